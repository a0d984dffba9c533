//! Polynomial root finding used by curve hit-testing and bounds.

mod polynomial;

pub use polynomial::{resolve, solve_cubic, solve_linear, solve_quadratic};
