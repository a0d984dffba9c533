//! Cubic Bézier curves.

use super::nearest::{axis_roots_hit, newton_nearest, Jet};
use super::{BezierCurve, HitStrategy, HitTestConfig, QuadraticBezier2, Subdivide};
use crate::primitives::{Point2, Vec2};
use crate::solver::solve_quadratic;
use log::trace;
use num_traits::Float;

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is influenced by `p1` and `p2`, and ends at `p3`.
///
/// # Example
///
/// ```
/// use bezier_clip::{BezierCurve, Point2};
/// use bezier_clip::curves::CubicBezier2;
///
/// let curve: CubicBezier2<f64> = CubicBezier2::new(
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 0.0),
/// );
/// assert_eq!(curve.sample(0.5), Point2::new(0.5, 0.75));
///
/// // Point above the curve's crown
/// let (t, on_curve) = curve.hit_point(Point2::new(0.5, 0.9), 0.2).unwrap();
/// assert!((t - 0.5).abs() < 1e-6);
/// assert!((on_curve.y - 0.75).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Returns the derivative curve (a quadratic Bézier).
    ///
    /// Its control points are `3(p1 − p0)`, `3(p2 − p1)` and `3(p3 − p2)`.
    pub fn derivative(&self) -> QuadraticBezier2<F> {
        let three = F::one() + F::one() + F::one();
        let scaled = |v: Vec2<F>| Point2::new(three * v.x, three * v.y);
        QuadraticBezier2::new(
            scaled(self.p1 - self.p0),
            scaled(self.p2 - self.p1),
            scaled(self.p3 - self.p2),
        )
    }

    /// Returns the derivative at parameter `t`.
    #[inline]
    pub fn derivative_at(&self, t: F) -> Vec2<F> {
        self.derivative().sample(t).to_vec()
    }

    /// Returns the second derivative at parameter `t`.
    ///
    /// `B''(t) = 6[(1 − t)(p2 − 2p1 + p0) + t(p3 − 2p2 + p1)]`
    #[inline]
    pub fn second_derivative_at(&self, t: F) -> Vec2<F> {
        let one = F::one();
        let six = (one + one) * (one + one + one);
        let mt = one - t;
        let near = (self.p2 - self.p1) - (self.p1 - self.p0);
        let far = (self.p3 - self.p2) - (self.p2 - self.p1);
        (near * mt + far * t) * six
    }

    /// Power-basis coefficients of each axis, `[a, b, c, d]` for `a·t³ + b·t² + c·t + d`.
    fn axis_polynomials(&self) -> ([F; 4], [F; 4]) {
        let three = F::one() + F::one() + F::one();
        let coeffs = |p0: F, p1: F, p2: F, p3: F| {
            [
                -p0 + three * p1 - three * p2 + p3,
                three * (p0 - (p1 + p1) + p2),
                three * (p1 - p0),
                p0,
            ]
        };
        (
            coeffs(self.p0.x, self.p1.x, self.p2.x, self.p3.x),
            coeffs(self.p0.y, self.p1.y, self.p2.y, self.p3.y),
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

impl<F: Float> BezierCurve<F> for CubicBezier2<F> {
    #[inline]
    fn start(&self) -> Point2<F> {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point2<F> {
        self.p3
    }

    #[inline]
    fn sample(&self, t: F) -> Point2<F> {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);

        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);

        p012.lerp(p123, t)
    }

    fn hit_test_with(&self, point: Point2<F>, threshold: F, config: &HitTestConfig<F>) -> Option<F> {
        match config.strategy() {
            HitStrategy::Newton => {
                let (t, distance) = newton_nearest(|t| self.jet(t), point, config);
                trace!(
                    "cubic hit test: nearest t={:?} distance={:?}",
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
        vec![self.p1, self.p2]
    }

    fn control_points(&self) -> Vec<Point2<F>> {
        vec![self.p0, self.p1, self.p2, self.p3]
    }

    fn tight_bounds(&self) -> (Point2<F>, Point2<F>) {
        let mut min = self.p0.min(self.p3);
        let mut max = self.p0.max(self.p3);

        // The derivative is a quadratic per axis; its roots are the extrema
        let (x_poly, y_poly) = self.axis_polynomials();
        let three = F::one() + F::one() + F::one();
        let two = F::one() + F::one();
        let derivative_roots = |[a, b, c, _]: [F; 4]| solve_quadratic(three * a, two * b, c);

        for t in derivative_roots(x_poly)
            .into_iter()
            .chain(derivative_roots(y_poly))
        {
            if t > F::zero() && t < F::one() {
                let p = self.sample(t);
                min = min.min(p);
                max = max.max(p);
            }
        }

        (min, max)
    }
}

impl<F: Float> Subdivide<F> for CubicBezier2<F> {
    fn subdivide(&self, t: F) -> (Self, Self) {
        // de Casteljau's algorithm
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);

        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);

        let p0123 = p012.lerp(p123, t);

        (
            Self::new(self.p0, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.p3),
        )
    }
}
