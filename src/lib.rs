//! bezier-clip - Bézier curve math for clip-path editing
//!
//! Evaluation, nearest-point hit-testing and de Casteljau subdivision for
//! linear, quadratic and cubic segments, plus the closed-form polynomial
//! solver behind them. Curves are small `Copy` values built on demand from an
//! editor's control points; nothing here holds state between calls.
//!
//! ```
//! use bezier_clip::{BezierCurve, Curve, Point2};
//!
//! let segment = Curve::from_points(&[
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 0.0),
//! ])
//! .unwrap();
//!
//! // Snap a click to the segment, then split it there to insert a point
//! if let Some(t) = segment.hit_test(Point2::new(0.5, 0.8), 0.1) {
//!     let (left, right) = segment.subdivide(t).unwrap();
//!     assert_eq!(left.end(), right.start());
//! }
//! ```

pub mod consts;
pub mod curves;
pub mod error;
pub mod primitives;
pub mod solver;

pub use curves::{
    BezierCurve, CubicBezier2, Curve, HitStrategy, HitTestConfig, LinearBezier2,
    QuadraticBezier2, Subdivide,
};
pub use error::CurveError;
pub use primitives::{Point2, Vec2};
