use crate::vec2::Vec2;

mod bump;
mod notch;

pub use self::bump::TriangleBump;
pub use self::notch::SquareNotch;

/// A replacement rule mapping one straight segment to a jagged multi-point
/// path through it. The first and last points of the output are exactly
/// `s0` and `s1`.
pub trait SideRule {
    fn subdivide(&self, s0: Vec2<f64>, s1: Vec2<f64>) -> Vec<Vec2<f64>>;
}

/// Places `controls`, given in the frame where the segment runs from the
/// origin along positive x, back onto the world-space segment and brackets
/// them with the exact endpoints.
fn along_segment(s0: Vec2<f64>, s1: Vec2<f64>, controls: &[Vec2<f64>]) -> Vec<Vec2<f64>> {
    let angle = (s1 - s0).angle();

    let mut points = Vec::with_capacity(controls.len() + 2);
    points.push(s0);
    points.extend(controls.iter().map(|c| s0 + c.rotate(angle)));
    points.push(s1);
    points
}
