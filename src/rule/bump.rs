use std::f64::consts::PI;

use crate::rule::{along_segment, SideRule};
use crate::vec2::Vec2;

/// The classic Koch replacement: an outward triangular bump over the middle
/// third of the segment, 5 points total.
#[derive(Copy, Clone, Debug)]
pub struct TriangleBump;

impl SideRule for TriangleBump {
    fn subdivide(&self, s0: Vec2<f64>, s1: Vec2<f64>) -> Vec<Vec2<f64>> {
        let l = (s1 - s0).len();

        let controls = [
            Vec2::new(l / 3.0, 0.0),
            Vec2::new(l / 2.0, l / 3.0 * (PI / 3.0).sin()),
            Vec2::new(2.0 * l / 3.0, 0.0),
        ];

        along_segment(s0, s1, &controls)
    }
}
