//! Tagged union over the three curve degrees.

use super::{
    BezierCurve, CubicBezier2, HitTestConfig, LinearBezier2, QuadraticBezier2, Subdivide,
};
use crate::error::CurveError;
use crate::primitives::Point2;
use log::debug;
use num_traits::Float;

/// A Bézier segment of degree 1, 2 or 3.
///
/// Editors rebuild one of these from their point list whenever they need to
/// sample, hit-test or split a segment; it is never cached.
///
/// # Example
///
/// ```
/// use bezier_clip::{BezierCurve, Curve, Point2};
///
/// // Start point with an outgoing handle, end point without handles
/// let curve = Curve::from_handles(
///     Point2::new(0.0, 0.0),
///     Some(Point2::new(1.0, 2.0)),
///     None,
///     Point2::new(2.0, 0.0),
/// );
/// assert_eq!(curve.degree(), 2);
///
/// let (left, right) = curve.subdivide(0.5).unwrap();
/// assert_eq!(left.end(), right.start());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve<F> {
    /// Straight segment between two points.
    Linear(LinearBezier2<F>),
    /// Segment with one handle.
    Quadratic(QuadraticBezier2<F>),
    /// Segment with two handles.
    Cubic(CubicBezier2<F>),
}

impl<F: Float> Curve<F> {
    /// Builds the curve whose control points are `points`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidControlPointCount`] unless there are 2, 3 or 4 points.
    pub fn from_points(points: &[Point2<F>]) -> Result<Self, CurveError> {
        match *points {
            [p0, p1] => Ok(Self::Linear(LinearBezier2::new(p0, p1))),
            [p0, p1, p2] => Ok(Self::Quadratic(QuadraticBezier2::new(p0, p1, p2))),
            [p0, p1, p2, p3] => Ok(Self::Cubic(CubicBezier2::new(p0, p1, p2, p3))),
            _ => {
                debug!("cannot build a curve from {} control points", points.len());
                Err(CurveError::InvalidControlPointCount {
                    count: points.len(),
                })
            }
        }
    }

    /// Builds the segment between two path points from the handles they carry.
    ///
    /// `out_handle` belongs to `start` and `in_handle` to `end`. Two handles
    /// give a cubic, one handle a quadratic through it, none a straight line.
    pub fn from_handles(
        start: Point2<F>,
        out_handle: Option<Point2<F>>,
        in_handle: Option<Point2<F>>,
        end: Point2<F>,
    ) -> Self {
        match (out_handle, in_handle) {
            (Some(c1), Some(c2)) => Self::Cubic(CubicBezier2::new(start, c1, c2, end)),
            (Some(c), None) | (None, Some(c)) => {
                Self::Quadratic(QuadraticBezier2::new(start, c, end))
            }
            (None, None) => Self::Linear(LinearBezier2::new(start, end)),
        }
    }

    /// Polynomial degree of the curve: 1, 2 or 3.
    pub fn degree(&self) -> usize {
        match self {
            Self::Linear(_) => 1,
            Self::Quadratic(_) => 2,
            Self::Cubic(_) => 3,
        }
    }

    /// Splits quadratic and cubic curves at `t`; linear segments return `None`.
    pub fn subdivide(&self, t: F) -> Option<(Self, Self)> {
        match self {
            Self::Linear(_) => None,
            Self::Quadratic(c) => {
                let (left, right) = c.subdivide(t);
                Some((Self::Quadratic(left), Self::Quadratic(right)))
            }
            Self::Cubic(c) => {
                let (left, right) = c.subdivide(t);
                Some((Self::Cubic(left), Self::Cubic(right)))
            }
        }
    }
}

impl<F: Float> BezierCurve<F> for Curve<F> {
    fn start(&self) -> Point2<F> {
        match self {
            Self::Linear(c) => c.start(),
            Self::Quadratic(c) => c.start(),
            Self::Cubic(c) => c.start(),
        }
    }

    fn end(&self) -> Point2<F> {
        match self {
            Self::Linear(c) => c.end(),
            Self::Quadratic(c) => c.end(),
            Self::Cubic(c) => c.end(),
        }
    }

    fn sample(&self, t: F) -> Point2<F> {
        match self {
            Self::Linear(c) => c.sample(t),
            Self::Quadratic(c) => c.sample(t),
            Self::Cubic(c) => c.sample(t),
        }
    }

    fn hit_test_with(&self, point: Point2<F>, threshold: F, config: &HitTestConfig<F>) -> Option<F> {
        match self {
            Self::Linear(c) => c.hit_test_with(point, threshold, config),
            Self::Quadratic(c) => c.hit_test_with(point, threshold, config),
            Self::Cubic(c) => c.hit_test_with(point, threshold, config),
        }
    }

    fn interior_control_points(&self) -> Vec<Point2<F>> {
        match self {
            Self::Linear(c) => c.interior_control_points(),
            Self::Quadratic(c) => c.interior_control_points(),
            Self::Cubic(c) => c.interior_control_points(),
        }
    }

    fn control_points(&self) -> Vec<Point2<F>> {
        match self {
            Self::Linear(c) => c.control_points(),
            Self::Quadratic(c) => c.control_points(),
            Self::Cubic(c) => c.control_points(),
        }
    }

    fn tight_bounds(&self) -> (Point2<F>, Point2<F>) {
        match self {
            Self::Linear(c) => c.tight_bounds(),
            Self::Quadratic(c) => c.tight_bounds(),
            Self::Cubic(c) => c.tight_bounds(),
        }
    }
}

impl<F> From<LinearBezier2<F>> for Curve<F> {
    fn from(c: LinearBezier2<F>) -> Self {
        Self::Linear(c)
    }
}

impl<F> From<QuadraticBezier2<F>> for Curve<F> {
    fn from(c: QuadraticBezier2<F>) -> Self {
        Self::Quadratic(c)
    }
}

impl<F> From<CubicBezier2<F>> for Curve<F> {
    fn from(c: CubicBezier2<F>) -> Self {
        Self::Cubic(c)
    }
}
