//! Numeric tuning constants.
//!
//! These are the process-wide defaults behind [`HitTestConfig::default`] and
//! the cubic solver. Override the hit-test ones per call with
//! [`HitTestConfig::new`].
//!
//! [`HitTestConfig::default`]: crate::curves::HitTestConfig
//! [`HitTestConfig::new`]: crate::curves::HitTestConfig::new

/// Number of evenly spaced starting parameters for the Newton nearest-point search.
///
/// Seeds are placed at `i / (NEWTON_SEED_COUNT - 1)`, so 11 seeds land on `0.0, 0.1, ..., 1.0`.
pub const NEWTON_SEED_COUNT: usize = 11;

/// Maximum Newton steps taken from each seed.
pub const NEWTON_MAX_ITERATIONS: usize = 10;

/// Convergence tolerance of the Newton search.
///
/// Iteration stops once `|D'(t)|`, `|D''(t)|` or the step in `t` falls below it.
pub const NEWTON_TOLERANCE: f64 = 1e-6;

/// Width of the band around zero inside which the cubic discriminant is treated
/// as zero, in units of machine epsilon.
///
/// The band is relative: the discriminant `(q/2)² + (p/3)³` counts as zero when
/// its magnitude is below `DISCRIMINANT_ULPS · ε · ((q/2)² + |p/3|³)`. The same
/// factor decides whether `p` and `q` vanish against the size of the terms they
/// were computed from.
pub const DISCRIMINANT_ULPS: f64 = 16.0;

/// Converts one of the `f64` constants above into the working float type.
///
/// `f32` and `f64` represent every constant here, so the fallback is unreachable
/// for them.
#[inline]
pub(crate) fn cast<F: num_traits::Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}
