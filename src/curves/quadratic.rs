//! Quadratic Bézier curves.

use super::nearest::{axis_roots_hit, newton_nearest, Jet};
use super::{BezierCurve, HitStrategy, HitTestConfig, Subdivide};
use crate::primitives::{Point2, Vec2};
use crate::solver::solve_linear;
use log::trace;
use num_traits::Float;

/// A quadratic Bézier curve defined by 3 control points.
///
/// The curve starts at `p0`, is influenced by `p1`, and ends at `p2`.
///
/// # Example
///
/// ```
/// use bezier_clip::{BezierCurve, Point2, Subdivide};
/// use bezier_clip::curves::QuadraticBezier2;
///
/// let curve = QuadraticBezier2::new(
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(2.0, 0.0),
/// );
/// assert_eq!(curve.sample(0.5), Point2::new(1.0, 1.0));
///
/// let (left, right) = curve.subdivide(0.5);
/// assert_eq!(left.p2, right.p0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// Control point
    pub p1: Point2<F>,
    /// End point
    pub p2: Point2<F>,
}

impl<F: Float> QuadraticBezier2<F> {
    /// Creates a new quadratic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Returns the derivative at parameter `t`.
    #[inline]
    pub fn derivative_at(&self, t: F) -> Vec2<F> {
        let two = F::one() + F::one();
        let mt = F::one() - t;
        ((self.p1 - self.p0) * mt + (self.p2 - self.p1) * t) * two
    }

    /// Returns the second derivative, constant for a quadratic.
    #[inline]
    pub fn second_derivative_at(&self, _t: F) -> Vec2<F> {
        let two = F::one() + F::one();
        ((self.p2 - self.p1) - (self.p1 - self.p0)) * two
    }

    /// Power-basis coefficients of each axis, `[a, b, c]` for `a·t² + b·t + c`.
    fn axis_polynomials(&self) -> ([F; 3], [F; 3]) {
        let two = F::one() + F::one();
        let coeffs = |p0: F, p1: F, p2: F| [p0 - two * p1 + p2, two * (p1 - p0), p0];
        (
            coeffs(self.p0.x, self.p1.x, self.p2.x),
            coeffs(self.p0.y, self.p1.y, self.p2.y),
        )
    }

    fn jet(&self, t: F) -> Jet<F> {
        Jet {
            point: self.sample(t),
            first: self.derivative_at(t),
            second: self.second_derivative_at(t),
        }
    }
}

impl<F: Float> BezierCurve<F> for QuadraticBezier2<F> {
    #[inline]
    fn start(&self) -> Point2<F> {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point2<F> {
        self.p2
    }

    #[inline]
    fn sample(&self, t: F) -> Point2<F> {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        p01.lerp(p12, t)
    }

    fn hit_test_with(&self, point: Point2<F>, threshold: F, config: &HitTestConfig<F>) -> Option<F> {
        match config.strategy() {
            HitStrategy::Newton => {
                let (t, distance) = newton_nearest(|t| self.jet(t), point, config);
                trace!(
                    "quadratic hit test: nearest t={:?} distance={:?}",
                    t.to_f64(),
                    distance.to_f64()
                );
                (distance <= threshold).then_some(t)
            }
            HitStrategy::AxisRoots => {
                let (x_poly, y_poly) = self.axis_polynomials();
                axis_roots_hit(&x_poly, &y_poly, |t| self.sample(t), point, threshold)
            }
        }
    }

    fn interior_control_points(&self) -> Vec<Point2<F>> {
        vec![self.p1]
    }

    fn control_points(&self) -> Vec<Point2<F>> {
        vec![self.p0, self.p1, self.p2]
    }

    fn tight_bounds(&self) -> (Point2<F>, Point2<F>) {
        let mut min = self.p0.min(self.p2);
        let mut max = self.p0.max(self.p2);

        // B'(t) = 2(p1 - p0) + 2t(p0 - 2p1 + p2), linear in t per axis
        let two = F::one() + F::one();
        let slope = ((self.p2 - self.p1) - (self.p1 - self.p0)) * two;
        let intercept = (self.p1 - self.p0) * two;

        let roots = solve_linear(slope.x, intercept.x)
            .into_iter()
            .chain(solve_linear(slope.y, intercept.y));
        for t in roots {
            if t > F::zero() && t < F::one() {
                let p = self.sample(t);
                min = min.min(p);
                max = max.max(p);
            }
        }

        (min, max)
    }
}

impl<F: Float> Subdivide<F> for QuadraticBezier2<F> {
    fn subdivide(&self, t: F) -> (Self, Self) {
        // de Casteljau's algorithm
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p012 = p01.lerp(p12, t);

        (
            Self::new(self.p0, p01, p012),
            Self::new(p012, p12, self.p2),
        )
    }
}
