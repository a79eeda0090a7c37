use std::f64::consts::PI;

use crate::vec2::Vec2;

/// Vertices of an equilateral triangle with edge length `size`.
///
/// The raw triangle has one vertex at the origin and one at `(size, 0)`;
/// every vertex is rotated by `rotation` and then shifted by `(size / 2, 0)`.
pub fn equilateral_triangle(size: f64, rotation: f64) -> Vec<Vec2<f64>> {
    let raw = [
        Vec2::new(0.0, 0.0),
        Vec2::new(size, 0.0).rotate(PI / 3.0),
        Vec2::new(size, 0.0),
    ];

    raw.iter()
        .map(|p| p.rotate(rotation) + Vec2::new(size / 2.0, 0.0))
        .collect()
}
