use std::f64::consts::PI;

use rand::Rng;

use crate::config::Config;
use crate::rule::{SideRule, SquareNotch, TriangleBump};
use crate::shape::equilateral_triangle;
use crate::vec2::Vec2;

/// One pass of per-edge replacement over a closed chain. Every consecutive
/// pair (wrapping last-to-first) has both endpoints jittered by an
/// independent uniform scale in `[1 - noise, 1 + noise]`, then gets replaced
/// by the output of a rule picked uniformly at random. Replacement outputs
/// are concatenated whole, duplicated endpoints included.
pub fn subdivide_round<R: Rng>(
    points: &[Vec2<f64>],
    noise: f64,
    rules: &[Box<dyn SideRule>],
    rng: &mut R,
) -> Vec<Vec2<f64>> {
    let mut next = Vec::new();

    for i in 0..points.len() {
        let left = points[i];
        let right = points[(i + 1) % points.len()];

        let left = left.scale(1.0 - noise + rng.gen::<f64>() * 2.0 * noise);
        let right = right.scale(1.0 - noise + rng.gen::<f64>() * 2.0 * noise);

        let rule = &rules[rng.gen_range(0..rules.len())];
        next.extend(rule.subdivide(left, right));
    }

    next
}

/// The whole mutable state of the animation; `main` owns one instance and
/// advances it once per frame.
pub struct Animation {
    iteration: u64,
    size: f64,
    size_step: f64,
    reversing: bool,
    noise: f64,
    rounds: u32,
    rules: Vec<Box<dyn SideRule>>,
}

impl Animation {
    pub fn new(config: &Config) -> Self {
        Self {
            iteration: 0,
            size: config.max_size,
            size_step: config.size_step,
            reversing: false,
            noise: config.noise,
            rounds: config.rounds,
            rules: vec![Box::new(TriangleBump), Box::new(SquareNotch)],
        }
    }

    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// The base triangle of the current frame, spun but not yet subdivided.
    pub fn base_triangle(&self) -> Vec<Vec2<f64>> {
        equilateral_triangle(self.size, PI / 3.0)
            .into_iter()
            .map(|p| p.rotate(PI / 9.0 * self.iteration as f64))
            .collect()
    }

    /// Advances the state by one frame and returns the open polyline to draw.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Vec<Vec2<f64>> {
        let mut points = equilateral_triangle(self.size, PI / 3.0);

        // The flag is never read back once set; the original behaves the
        // same way, so the quirk stays.
        if self.size < 0.0 {
            self.reversing = true;
            self.size_step = -self.size_step;
        }
        self.size -= self.size_step;
        self.iteration += 1;

        let spin = PI / 9.0 * self.iteration as f64;
        for p in &mut points {
            *p = p.rotate(spin);
        }

        for _ in 0..self.rounds {
            points = subdivide_round(&points, self.noise, &self.rules, rng);
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed(size: f64, size_step: f64, rounds: u32, noise: f64) -> Animation {
        Animation {
            iteration: 0,
            size,
            size_step,
            reversing: false,
            noise,
            rounds,
            rules: vec![Box::new(TriangleBump), Box::new(SquareNotch)],
        }
    }

    #[test]
    fn negative_size_flips_the_step_once() {
        let mut animation = fixed(-1.0, 3.0, 0, 0.0);
        animation.step(&mut StdRng::seed_from_u64(0));

        assert!(animation.reversing);
        assert_eq!(animation.size_step, -3.0);
        // size = -1 - (-3)
        assert_eq!(animation.size, 2.0);
        assert_eq!(animation.iteration, 1);
    }

    #[test]
    fn positive_size_shrinks_without_reversing() {
        let mut animation = fixed(300.0, 3.0, 0, 0.0);
        animation.step(&mut StdRng::seed_from_u64(0));

        assert!(!animation.reversing);
        assert_eq!(animation.size_step, 3.0);
        assert_eq!(animation.size, 297.0);
    }

    #[test]
    fn four_notch_rounds_yield_3888_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let rules: Vec<Box<dyn SideRule>> = vec![Box::new(SquareNotch)];

        let mut points = equilateral_triangle(300.0, 0.0);
        for _ in 0..4 {
            points = subdivide_round(&points, 0.0, &rules, &mut rng);
        }

        assert_eq!(points.len(), 3 * 6_usize.pow(4));
    }

    #[test]
    fn round_without_noise_keeps_endpoints() {
        let mut rng = StdRng::seed_from_u64(42);
        let rules: Vec<Box<dyn SideRule>> = vec![Box::new(TriangleBump)];

        let points = equilateral_triangle(90.0, 0.0);
        let next = subdivide_round(&points, 0.0, &rules, &mut rng);

        assert_eq!(next.len(), 3 * 5);
        assert_eq!(next[0], points[0]);
        assert_eq!(next[4], points[1]);
        assert_eq!(next[5], points[1]);
        assert_eq!(*next.last().unwrap(), points[0]);
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let rules: Vec<Box<dyn SideRule>> = vec![Box::new(TriangleBump)];
        let noise = 0.03;

        let points = vec![Vec2::new(100.0, 0.0), Vec2::new(0.0, 100.0)];
        for _ in 0..100 {
            let next = subdivide_round(&points, noise, &rules, &mut rng);
            for edge in 0..2 {
                let jittered = next[edge * 5];
                let original = points[edge];
                let ratio = jittered.len() / original.len();
                assert!(ratio >= 1.0 - noise && ratio <= 1.0 + noise);
            }
        }
    }

    #[test]
    fn step_point_count_is_bounded() {
        let mut animation = fixed(300.0, 3.0, 4, 0.03);
        let points = animation.step(&mut StdRng::seed_from_u64(1));

        // Between all-bump (3·5⁴) and all-notch (3·6⁴).
        assert!(points.len() >= 3 * 5_usize.pow(4));
        assert!(points.len() <= 3 * 6_usize.pow(4));
    }

    #[test]
    fn base_triangle_spins_with_iteration() {
        let mut animation = fixed(300.0, 0.0, 0, 0.0);
        let before = animation.base_triangle();
        animation.step(&mut StdRng::seed_from_u64(0));
        let after = animation.base_triangle();

        let delta = after[1].angle() - before[1].angle();
        let expected = PI / 9.0;
        assert!((delta - expected).abs() < 1e-9);
    }
}
