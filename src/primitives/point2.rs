//! 2D point type.

use super::{lerp, Vec2};
use num_traits::Float;
use std::ops::{Add, Sub};

/// A control point or curve position in image space.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        super::distance(self, other)
    }

    /// Linearly interpolates each coordinate between `self` and `other`.
    ///
    /// Uses `a·(1−t) + b·t`, so `t = 0` yields `self` and `t = 1` yields
    /// `other` exactly. Every curve evaluation and split goes through here.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }

    /// Returns the component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Returns the component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}

impl<F: Float> From<Point2<F>> for (F, F) {
    fn from(p: Point2<F>) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let a: Point2<f64> = Point2::new(0.1, -7.3);
        let b = Point2::new(13.7, 0.3);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 20.0);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_min_max() {
        let a: Point2<f64> = Point2::new(1.0, 5.0);
        let b = Point2::new(3.0, 2.0);
        assert_eq!(a.min(b), Point2::new(1.0, 2.0));
        assert_eq!(a.max(b), Point2::new(3.0, 5.0));
    }

    #[test]
    fn test_point_sub_point() {
        let a: Point2<f64> = Point2::new(4.0, 6.0);
        let b = Point2::new(1.0, 2.0);
        let v = a - b;
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_point_add_vec() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        let q = p + Vec2::new(3.0, -1.0);
        assert_eq!(q, Point2::new(4.0, 1.0));
    }

    #[test]
    fn test_tuple_conversion() {
        let p: Point2<f64> = (2.5, -1.0).into();
        assert_eq!(p, Point2::new(2.5, -1.0));
        let (x, y): (f64, f64) = p.into();
        assert_eq!((x, y), (2.5, -1.0));
    }
}
