//! Floating-point geometric primitives and operations.

mod ops;
mod point2;
mod vec2;

pub use ops::{distance, length, lerp, perpendicular_foot, projection_parameter};
pub use point2::Point2;
pub use vec2::Vec2;
