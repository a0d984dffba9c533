//! Error types for curve construction and configuration.

use thiserror::Error;

/// Errors raised when building curves or solver input from untyped data.
///
/// Evaluation, hit-testing and subdivision never fail; only the surfaces that
/// accept slices or user-supplied tuning values return this.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A curve needs 2, 3 or 4 control points.
    #[error("expected 2, 3 or 4 control points, got {count}")]
    InvalidControlPointCount {
        /// Number of points supplied.
        count: usize,
    },

    /// Polynomials above degree 3 are not solved.
    #[error("polynomial of degree {degree} is not supported")]
    UnsupportedDegree {
        /// Degree implied by the coefficient slice.
        degree: usize,
    },

    /// The Newton search needs at least two seeds to cover both endpoints.
    #[error("at least 2 seeds are required, got {count}")]
    InvalidSeedCount {
        /// Number of seeds requested.
        count: usize,
    },

    /// The Newton search needs at least one step per seed.
    #[error("iteration count must be at least 1")]
    InvalidIterationCount,

    /// Tolerance must be finite and strictly positive.
    #[error("tolerance must be finite and greater than zero")]
    InvalidTolerance,
}
