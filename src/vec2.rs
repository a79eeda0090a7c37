use std::ops::{Add, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Vec2<f64> {
    #[inline]
    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Polar angle in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Vec2<f64> {
        Vec2 {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Rotates counter-clockwise by `alpha` radians about the origin.
    ///
    /// The zero vector has no polar angle, so it is returned as-is.
    pub fn rotate(&self, alpha: f64) -> Vec2<f64> {
        if self.x == 0.0 && self.y == 0.0 {
            return *self;
        }

        let angle = alpha + self.angle();
        let len = self.len();

        Vec2 {
            x: angle.cos() * len,
            y: angle.sin() * len,
        }
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn add(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn sub(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn rotate_preserves_length() {
        let v = Vec2::new(3.0, -7.5);

        for id in 0..16 {
            let alpha = 2.0 * PI * id as f64 / 16.0;
            assert!((v.rotate(alpha).len() - v.len()).abs() < EPS);
        }
    }

    #[test]
    fn rotate_zero_is_identity() {
        let zero = Vec2::new(0.0, 0.0);

        assert_eq!(zero.rotate(0.0), zero);
        assert_eq!(zero.rotate(1.0), zero);
        assert_eq!(zero.rotate(-PI), zero);
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotate(PI / 2.0);

        assert!(v.x.abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Vec2::new(1.5, 2.5);
        let b = Vec2::new(-0.5, 4.0);

        assert_eq!(a + b - b, a);
        assert_eq!(a - b, Vec2::new(2.0, -1.5));
    }

    #[test]
    fn angle_range() {
        assert!((Vec2::new(1.0, 0.0).angle()).abs() < EPS);
        assert!((Vec2::new(0.0, 1.0).angle() - PI / 2.0).abs() < EPS);
        assert!((Vec2::new(-1.0, 0.0).angle() - PI).abs() < EPS);
    }
}
