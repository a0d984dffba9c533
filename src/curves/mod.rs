//! Bézier curves of degree 1 to 3: sampling, hit-testing and subdivision.

mod cubic;
mod curve;
mod linear;
mod nearest;
mod quadratic;
mod traits;

pub use cubic::CubicBezier2;
pub use curve::Curve;
pub use linear::LinearBezier2;
pub use nearest::{HitStrategy, HitTestConfig};
pub use quadratic::QuadraticBezier2;
pub use traits::{BezierCurve, Subdivide};
