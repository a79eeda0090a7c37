use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::vec2::Vec2;

const DOT_RADIUS: i16 = 3;

/// Drawing primitives over a borrowed render target. All coordinates are
/// relative to `origin`, which plays the role of a one-time translate of
/// the surface.
pub struct Painter<'a> {
    canvas: &'a mut Canvas<Window>,
    origin: Vec2<f64>,
    stroke: Color,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut Canvas<Window>, origin: Vec2<f64>) -> Self {
        Self {
            canvas,
            origin,
            stroke: Color::RGB(40, 0, 0),
        }
    }

    /// Stroke color for the given frame: fixed red, green and blue cycling
    /// together with the frame counter.
    pub fn set_stroke(&mut self, iteration: u64) {
        let cycle = (iteration * 10 % 255) as u8;
        self.stroke = Color::RGB(40, cycle, cycle);
    }

    #[inline]
    fn screen(&self, p: Vec2<f64>) -> (i16, i16) {
        let p = p + self.origin;
        (p.x.round() as i16, p.y.round() as i16)
    }

    /// Filled dot of fixed radius.
    pub fn draw_point(&mut self, p: Vec2<f64>) -> Result<(), String> {
        let (x, y) = self.screen(p);
        self.canvas.filled_circle(x, y, DOT_RADIUS, self.stroke)
    }

    /// Segment from the origin to `v`.
    pub fn draw_vector(&mut self, v: Vec2<f64>) -> Result<(), String> {
        self.draw_line(Vec2::new(0.0, 0.0), v)
    }

    pub fn draw_line(&mut self, p1: Vec2<f64>, p2: Vec2<f64>) -> Result<(), String> {
        let (x1, y1) = self.screen(p1);
        let (x2, y2) = self.screen(p2);
        self.canvas.line(x1, y1, x2, y2, self.stroke)
    }

    /// Strokes consecutive segments through `points`; with `close`, also the
    /// segment from the last point back to the first. Fewer than two points
    /// draw nothing.
    pub fn draw_chain(&mut self, points: &[Vec2<f64>], close: bool) -> Result<(), String> {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1])?;
        }
        if close && points.len() >= 2 {
            self.draw_line(points[points.len() - 1], points[0])?;
        }

        Ok(())
    }
}
