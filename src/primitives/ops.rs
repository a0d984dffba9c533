//! Scalar and point helpers shared by every curve variant.

use super::Point2;
use num_traits::Float;

/// Linear interpolation `a·(1−t) + b·t`.
///
/// This form returns `a` at `t = 0` and `b` at `t = 1` without round-off,
/// which the curve endpoint identities rely on.
#[inline]
pub fn lerp<F: Float>(a: F, b: F, t: F) -> F {
    a * (F::one() - t) + b * t
}

/// Length of the vector `(dx, dy)`.
#[inline]
pub fn length<F: Float>(dx: F, dy: F) -> F {
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<F: Float>(p: Point2<F>, q: Point2<F>) -> F {
    length(p.x - q.x, p.y - q.y)
}

/// Parameter of the orthogonal projection of `point` onto the line `p1 → p2`.
///
/// `0` maps to `p1` and `1` to `p2`; values outside `[0, 1]` lie beyond the
/// endpoints. Returns `None` when `p1 == p2`, since no line is defined.
#[inline]
pub fn projection_parameter<F: Float>(p1: Point2<F>, p2: Point2<F>, point: Point2<F>) -> Option<F> {
    let v = p2 - p1;
    let len_sq = v.magnitude_squared();
    if len_sq == F::zero() {
        return None;
    }
    Some((point - p1).dot(v) / len_sq)
}

/// Foot of the perpendicular dropped from `point` onto the infinite line `p1 → p2`.
///
/// A zero-length line has no direction, so the shared point `p1` is returned.
///
/// # Example
///
/// ```
/// use bezier_clip::primitives::{perpendicular_foot, Point2};
///
/// let foot = perpendicular_foot(
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(4.0, 3.0),
/// );
/// assert_eq!(foot, Point2::new(4.0, 0.0));
/// ```
pub fn perpendicular_foot<F: Float>(p1: Point2<F>, p2: Point2<F>, point: Point2<F>) -> Point2<F> {
    match projection_parameter(p1, p2, point) {
        Some(t) => p1 + (p2 - p1) * t,
        None => p1,
    }
}
