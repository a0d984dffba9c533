//! Capabilities shared by the curve variants.

use super::HitTestConfig;
use crate::primitives::Point2;
use num_traits::Float;

/// Operations every Bézier segment supports, whatever its degree.
pub trait BezierCurve<F: Float> {
    /// First control point, where the curve starts.
    fn start(&self) -> Point2<F>;

    /// Last control point, where the curve ends.
    fn end(&self) -> Point2<F>;

    /// Evaluates the curve at `t` with de Casteljau's algorithm.
    ///
    /// `t` is not clamped: values outside `[0, 1]` extrapolate.
    fn sample(&self, t: F) -> Point2<F>;

    /// Tests whether some point of the curve lies within `threshold` of `point`,
    /// using explicit search parameters.
    ///
    /// On a hit, returns the curve parameter of that point, always inside `[0, 1]`.
    fn hit_test_with(&self, point: Point2<F>, threshold: F, config: &HitTestConfig<F>)
        -> Option<F>;

    /// Tests whether some point of the curve lies within `threshold` of `point`.
    ///
    /// Uses [`HitTestConfig::default`].
    ///
    /// Quadratic and cubic curves are searched with a bounded number of Newton
    /// steps. On curves spanning hundreds of units, a query lying exactly on the
    /// curve can come back up to about `1e-3` away, so sub-pixel thresholds may
    /// miss it. Raise the iteration count through [`HitTestConfig::new`] when
    /// that precision matters.
    fn hit_test(&self, point: Point2<F>, threshold: F) -> Option<F> {
        self.hit_test_with(point, threshold, &HitTestConfig::default())
    }

    /// Like [`hit_test`](Self::hit_test), but also returns the position on the
    /// curve the hit snapped to.
    fn hit_point(&self, point: Point2<F>, threshold: F) -> Option<(F, Point2<F>)> {
        self.hit_test(point, threshold).map(|t| (t, self.sample(t)))
    }

    /// Control points strictly between the endpoints, in order.
    ///
    /// Empty for linear segments.
    fn interior_control_points(&self) -> Vec<Point2<F>>;

    /// All control points in order, endpoints included.
    fn control_points(&self) -> Vec<Point2<F>>;

    /// Bounding box of the control points as `(min, max)`.
    ///
    /// The curve lies inside its control polygon, so this always contains it,
    /// though it may be larger than [`tight_bounds`](Self::tight_bounds).
    fn control_bounds(&self) -> (Point2<F>, Point2<F>) {
        let start = self.start();
        self.control_points()
            .into_iter()
            .fold((start, start), |(min, max), p| (min.min(p), max.max(p)))
    }

    /// Exact bounding box of the curve over `[0, 1]` as `(min, max)`.
    fn tight_bounds(&self) -> (Point2<F>, Point2<F>);
}

/// Splitting a curve into two curves of the same degree.
///
/// Linear segments do not implement this.
pub trait Subdivide<F: Float>: BezierCurve<F> + Sized {
    /// Splits the curve at `t` with de Casteljau's algorithm.
    ///
    /// The left curve covers `[0, t]` and the right curve `[t, 1]` of the
    /// original. Both share the point `sample(t)` exactly.
    fn subdivide(&self, t: F) -> (Self, Self);
}
