//! Straight segments, the degree-1 Bézier curve.

use super::{BezierCurve, HitTestConfig};
use crate::primitives::{distance, projection_parameter, Point2, Vec2};
use num_traits::Float;

/// A linear Bézier curve: the straight segment from `p0` to `p1`.
///
/// # Example
///
/// ```
/// use bezier_clip::{BezierCurve, Point2};
/// use bezier_clip::curves::LinearBezier2;
///
/// let segment: LinearBezier2<f64> = LinearBezier2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
///
/// let t = segment.hit_test(Point2::new(5.0, 3.0), 5.0).unwrap();
/// assert!((t - 0.5).abs() < 1e-12);
///
/// // Nearest point is the start, 5 units away
/// assert!(segment.hit_test(Point2::new(-5.0, 0.0), 2.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// End point
    pub p1: Point2<F>,
}

impl<F: Float> LinearBezier2<F> {
    /// Creates a new segment.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>) -> Self {
        Self { p0, p1 }
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(&self) -> F {
        distance(self.p0, self.p1)
    }

    /// Returns the derivative, which is constant along a segment.
    #[inline]
    pub fn derivative_at(&self, _t: F) -> Vec2<F> {
        self.p1 - self.p0
    }

    /// Parameter of the point on the segment closest to `point`, in `[0, 1]`.
    ///
    /// The perpendicular foot on the infinite line is clamped back onto the
    /// segment. A zero-length segment reports `0`.
    pub fn closest_parameter(&self, point: Point2<F>) -> F {
        projection_parameter(self.p0, self.p1, point)
            .map_or(F::zero(), |t| t.max(F::zero()).min(F::one()))
    }
}

impl<F: Float> BezierCurve<F> for LinearBezier2<F> {
    #[inline]
    fn start(&self) -> Point2<F> {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point2<F> {
        self.p1
    }

    #[inline]
    fn sample(&self, t: F) -> Point2<F> {
        self.p0.lerp(self.p1, t)
    }

    fn hit_test_with(&self, point: Point2<F>, threshold: F, _config: &HitTestConfig<F>) -> Option<F> {
        let t = self.closest_parameter(point);
        if self.sample(t).distance(point) <= threshold {
            Some(t)
        } else {
            None
        }
    }

    fn interior_control_points(&self) -> Vec<Point2<F>> {
        Vec::new()
    }

    fn control_points(&self) -> Vec<Point2<F>> {
        vec![self.p0, self.p1]
    }

    fn tight_bounds(&self) -> (Point2<F>, Point2<F>) {
        (self.p0.min(self.p1), self.p0.max(self.p1))
    }
}
