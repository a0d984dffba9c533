//! Nearest-point search behind quadratic and cubic hit-testing.

use crate::consts::{cast, NEWTON_MAX_ITERATIONS, NEWTON_SEED_COUNT, NEWTON_TOLERANCE};
use crate::error::CurveError;
use crate::primitives::{Point2, Vec2};
use crate::solver::{solve_cubic, solve_linear, solve_quadratic};
use log::{debug, trace};
use num_traits::Float;

/// Strategy used to hit-test quadratic and cubic curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitStrategy {
    /// Multi-start Newton–Raphson minimisation of the squared distance.
    ///
    /// Finds the true nearest point up to the iteration limits.
    #[default]
    Newton,
    /// Solves `Bx(t) = x` and `By(t) = y` separately and averages the matches.
    ///
    /// Only an approximation. It can miss curves that are not monotonic along
    /// an axis. Kept for callers that need the older hit-test results.
    AxisRoots,
}

/// Tuning parameters for curve hit-testing.
///
/// Linear segments ignore these; they are projected exactly. Values are only
/// built through [`Default`] or the validating [`HitTestConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestConfig<F> {
    seed_count: usize,
    max_iterations: usize,
    tolerance: F,
    strategy: HitStrategy,
}

impl<F: Float> HitTestConfig<F> {
    /// Creates a Newton configuration with custom limits.
    ///
    /// # Errors
    ///
    /// Fails when fewer than 2 seeds or 0 iterations are requested, or when
    /// `tolerance` is not finite and positive.
    pub fn new(seed_count: usize, max_iterations: usize, tolerance: F) -> Result<Self, CurveError> {
        if seed_count < 2 {
            debug!("rejecting hit-test config with {seed_count} seeds");
            return Err(CurveError::InvalidSeedCount { count: seed_count });
        }
        if max_iterations == 0 {
            debug!("rejecting hit-test config with zero iterations");
            return Err(CurveError::InvalidIterationCount);
        }
        if !tolerance.is_finite() || tolerance <= F::zero() {
            debug!("rejecting hit-test config with tolerance {:?}", tolerance.to_f64());
            return Err(CurveError::InvalidTolerance);
        }
        Ok(Self {
            seed_count,
            max_iterations,
            tolerance,
            strategy: HitStrategy::Newton,
        })
    }

    /// Number of evenly spaced Newton starting parameters over `[0, 1]`.
    #[inline]
    pub fn seed_count(&self) -> usize {
        self.seed_count
    }

    /// Maximum Newton steps per seed.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Convergence tolerance on `|D'|`, `|D''|` and the step in `t`.
    #[inline]
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Which search to run.
    #[inline]
    pub fn strategy(&self) -> HitStrategy {
        self.strategy
    }

    /// Returns the same configuration with a different strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: HitStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl<F: Float> Default for HitTestConfig<F> {
    fn default() -> Self {
        Self {
            seed_count: NEWTON_SEED_COUNT,
            max_iterations: NEWTON_MAX_ITERATIONS,
            tolerance: cast(NEWTON_TOLERANCE),
            strategy: HitStrategy::Newton,
        }
    }
}

/// A curve point with its first and second derivatives at some `t`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Jet<F> {
    pub point: Point2<F>,
    pub first: Vec2<F>,
    pub second: Vec2<F>,
}

/// Best parameter found so far and its distance to the query.
#[derive(Debug, Clone, Copy)]
struct Candidate<F> {
    t: F,
    distance: F,
}

impl<F: Float> Candidate<F> {
    fn offer(&mut self, t: F, distance: F) {
        if distance < self.distance {
            self.t = t;
            self.distance = distance;
        }
    }
}

/// Finds the parameter in `[0, 1]` nearest to `query`, returning `(t, distance)`.
///
/// Minimises `D(t) = |B(t) − query|²` by Newton steps on `D'` from
/// `config.seed_count` evenly spaced seeds. Both endpoints and every iterate
/// are candidates, so a boundary minimum is never lost.
pub(crate) fn newton_nearest<F, E>(jet_at: E, query: Point2<F>, config: &HitTestConfig<F>) -> (F, F)
where
    F: Float,
    E: Fn(F) -> Jet<F>,
{
    let zero = F::zero();
    let one = F::one();
    let two = one + one;
    let tol = config.tolerance;

    let mut best = Candidate {
        t: zero,
        distance: jet_at(zero).point.distance(query),
    };
    best.offer(one, jet_at(one).point.distance(query));

    let last_seed: F = cast(config.seed_count.saturating_sub(1).max(1) as f64);

    for seed in 0..config.seed_count {
        let mut t = cast::<F>(seed as f64) / last_seed;
        let mut steps = 0;

        while steps < config.max_iterations {
            let jet = jet_at(t);
            let diff = jet.point - query;
            best.offer(t, diff.magnitude());

            let d1 = two * diff.dot(jet.first);
            let d2 = two * (jet.first.magnitude_squared() + diff.dot(jet.second));
            if d1.abs() < tol || d2.abs() < tol {
                break;
            }

            let next = (t - d1 / d2).max(zero).min(one);
            let step = (next - t).abs();
            t = next;
            steps += 1;
            if step < tol {
                break;
            }
        }

        best.offer(t, jet_at(t).point.distance(query));
        trace!("newton seed {seed} settled after {steps} steps");
    }

    (best.t, best.distance)
}

/// Power-basis polynomial of one curve axis, highest degree first.
pub(crate) trait AxisPolynomial<F: Float> {
    /// Parameters where the polynomial takes `value`.
    fn roots_at(&self, value: F) -> Vec<F>;
}

impl<F: Float> AxisPolynomial<F> for [F; 2] {
    fn roots_at(&self, value: F) -> Vec<F> {
        let [a, b] = *self;
        solve_linear(a, b - value)
    }
}

impl<F: Float> AxisPolynomial<F> for [F; 3] {
    fn roots_at(&self, value: F) -> Vec<F> {
        let [a, b, c] = *self;
        solve_quadratic(a, b, c - value)
    }
}

impl<F: Float> AxisPolynomial<F> for [F; 4] {
    fn roots_at(&self, value: F) -> Vec<F> {
        let [a, b, c, d] = *self;
        solve_cubic(a, b, c, d - value)
    }
}

/// Hit-tests by solving each axis separately, the way older editors did.
///
/// `x_poly` and `y_poly` describe `Bx(t)` and `By(t)`. Roots outside `[0, 1]`
/// are discarded. Of the roots for one axis, the one whose other coordinate is
/// closest to the query (and within `threshold`) wins. When both axes produce
/// a winner their mean is reported.
pub(crate) fn axis_roots_hit<F, P, S>(
    x_poly: &P,
    y_poly: &P,
    sample: S,
    query: Point2<F>,
    threshold: F,
) -> Option<F>
where
    F: Float,
    P: AxisPolynomial<F>,
    S: Fn(F) -> Point2<F>,
{
    let from_x = best_axis_root(x_poly.roots_at(query.x), threshold, |t| {
        (sample(t).y - query.y).abs()
    });
    let from_y = best_axis_root(y_poly.roots_at(query.y), threshold, |t| {
        (sample(t).x - query.x).abs()
    });

    let hit = match (from_x, from_y) {
        (Some(tx), Some(ty)) => Some((tx + ty) / (F::one() + F::one())),
        (Some(t), None) | (None, Some(t)) => Some(t),
        (None, None) => None,
    };
    trace!("axis-root hit test matched: {}", hit.is_some());
    hit
}

fn best_axis_root<F, D>(roots: Vec<F>, threshold: F, off_axis: D) -> Option<F>
where
    F: Float,
    D: Fn(F) -> F,
{
    let mut best: Option<Candidate<F>> = None;
    for t in roots {
        if t < F::zero() || t > F::one() {
            continue;
        }
        let diff = off_axis(t);
        if diff > threshold {
            continue;
        }
        match best.as_mut() {
            Some(candidate) => candidate.offer(t, diff),
            None => best = Some(Candidate { t, distance: diff }),
        }
    }
    best.map(|c| c.t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Straight line from (0, 0) to (10, 0) with uniform speed
    fn line_jet(t: f64) -> Jet<f64> {
        Jet {
            point: Point2::new(10.0 * t, 0.0),
            first: Vec2::new(10.0, 0.0),
            second: Vec2::zero(),
        }
    }

    #[test]
    fn test_default_config() {
        let config: HitTestConfig<f64> = HitTestConfig::default();
        assert_eq!(config.seed_count(), 11);
        assert_eq!(config.max_iterations(), 10);
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.strategy(), HitStrategy::Newton);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            HitTestConfig::new(1, 10, 1e-6),
            Err(CurveError::InvalidSeedCount { count: 1 })
        );
        assert_eq!(
            HitTestConfig::new(5, 0, 1e-6),
            Err(CurveError::InvalidIterationCount)
        );
        assert_eq!(
            HitTestConfig::new(5, 10, 0.0),
            Err(CurveError::InvalidTolerance)
        );
        assert_eq!(
            HitTestConfig::new(5, 10, f64::NAN),
            Err(CurveError::InvalidTolerance)
        );

        let config = HitTestConfig::new(5, 3, 1e-8).unwrap();
        assert_eq!(config.seed_count(), 5);
        assert_eq!(config.max_iterations(), 3);
        assert_eq!(config.tolerance(), 1e-8);
        assert_eq!(config.strategy(), HitStrategy::Newton);
        let legacy = config.with_strategy(HitStrategy::AxisRoots);
        assert_eq!(legacy.strategy(), HitStrategy::AxisRoots);
        assert_eq!(legacy.max_iterations(), 3);
    }

    #[test]
    fn test_newton_interior_minimum() {
        let (t, distance) =
            newton_nearest(line_jet, Point2::new(3.7, 2.0), &HitTestConfig::default());
        assert_relative_eq!(t, 0.37, epsilon = 1e-9);
        assert_relative_eq!(distance, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_newton_boundary_minimum() {
        let (t, distance) =
            newton_nearest(line_jet, Point2::new(-4.0, 3.0), &HitTestConfig::default());
        assert_eq!(t, 0.0);
        assert_relative_eq!(distance, 5.0, epsilon = 1e-12);

        let (t, _) = newton_nearest(line_jet, Point2::new(12.0, 0.0), &HitTestConfig::default());
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_axis_roots_single_axis_match() {
        // Bx(t) = 10t, By(t) = 0
        let sample = |t: f64| Point2::new(10.0 * t, 0.0);
        let hit = axis_roots_hit(&[10.0, 0.0], &[0.0, 0.0], sample, Point2::new(4.0, 0.5), 1.0);
        assert_relative_eq!(hit.unwrap(), 0.4, epsilon = 1e-12);

        let miss = axis_roots_hit(&[10.0, 0.0], &[0.0, 0.0], sample, Point2::new(4.0, 2.0), 1.0);
        assert!(miss.is_none());
    }
}
