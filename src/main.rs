#[macro_use]
extern crate serde_derive;

use std::env;
use std::error::Error;
use std::path::Path;
use std::time::Instant;

use rand::thread_rng;
use sdl2::{
    event::Event, gfx::framerate::FPSManager, keyboard::Keycode, pixels::Color,
    pixels::PixelFormatEnum, render::Canvas, video::Window,
};

use crate::animation::Animation;
use crate::config::Config;
use crate::painter::Painter;
use crate::vec2::Vec2;

mod animation;
mod config;
mod painter;
mod rule;
mod shape;
mod vec2;

const CONFIG_PATH: &str = "frostline.json";

fn save_screenshot(canvas: &Canvas<Window>, config: &Config, frame: u64) -> Result<(), Box<dyn Error>> {
    let pixels = canvas.read_pixels(None, PixelFormatEnum::RGB24)?;
    let path = format!("frostline-{:06}.png", frame);
    image::save_buffer(&path, &pixels, config.width, config.height, image::ColorType::Rgb8)?;
    println!("Saved {}", path);

    Ok(())
}

/// Marks the current base triangle's vertices with dots and spokes from the
/// canvas origin.
fn draw_overlay(painter: &mut Painter, animation: &Animation) -> Result<(), String> {
    for vertex in animation.base_triangle() {
        painter.draw_vector(vertex)?;
        painter.draw_point(vertex)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None if Path::new(CONFIG_PATH).exists() => Config::load(&CONFIG_PATH)?,
        None => Config::default(),
    };

    let ctx = sdl2::init()?;
    let video = ctx.video()?;
    let window = video
        .window("Frostline", config.width, config.height)
        .position_centered()
        .opengl()
        .build()?;

    let mut canvas = window.into_canvas().accelerated().present_vsync().target_texture().build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_target(None, config.width, config.height)?;

    // The texture is cleared to black exactly once; every frame after that
    // draws on top of the previous ones, which produces the trailing look.
    canvas.with_texture_canvas(&mut texture, |target| {
        target.set_draw_color(Color::RGB(0, 0, 0));
        target.clear();
    })?;

    let mut fps = FPSManager::new();
    fps.set_framerate(config.framerate)?;

    let origin = Vec2::new(config.width as f64 / 2.0, config.height as f64 / 2.0);
    let mut animation = Animation::new(&config);
    let mut rng = thread_rng();

    let mut events = ctx.event_pump()?;
    'mainloop: loop {
        let mut screenshot = false;
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Q), ..
                } => break 'mainloop,
                Event::KeyDown {
                    keycode: Some(Keycode::S), ..
                } => {
                    screenshot = true;
                }
                _event => {}
            }
        }

        let now = Instant::now();
        let points = animation.step(&mut rng);

        let mut drawn = Ok(());
        canvas.with_texture_canvas(&mut texture, |target| {
            let mut painter = Painter::new(target, origin);
            painter.set_stroke(animation.iteration());

            drawn = painter.draw_chain(&points, false);
            if config.overlay && drawn.is_ok() {
                drawn = draw_overlay(&mut painter, &animation);
            }
        })?;
        drawn?;

        canvas.copy(&texture, None, None)?;

        if screenshot {
            save_screenshot(&canvas, &config, animation.iteration())?;
        }

        canvas.present();

        if animation.iteration() % 500 == 0 {
            let elapsed = now.elapsed();
            println!(
                "frame {}: {} points, {:.3} ms",
                animation.iteration(),
                points.len(),
                elapsed.as_secs_f64() * 1000.0
            );
        }

        fps.delay();
    }

    Ok(())
}
