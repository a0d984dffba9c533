//! Closed-form real roots of polynomials up to degree 3.
//!
//! Each solver returns a fresh, possibly empty `Vec` of real roots. When the
//! leading coefficient is exactly zero the equation is handed to the next
//! lower degree, so callers can always use the solver matching the nominal
//! degree of their polynomial.

use crate::consts::{cast, DISCRIMINANT_ULPS};
use crate::error::CurveError;
use log::debug;
use num_traits::Float;

/// Solves `a·t + b = 0`.
///
/// Returns no roots when `b == 0` (the equation is treated as degenerate) or
/// when `a == 0` (there is no `t` term to solve for).
pub fn solve_linear<F: Float>(a: F, b: F) -> Vec<F> {
    if b == F::zero() || a == F::zero() {
        return Vec::new();
    }
    vec![-b / a]
}

/// Solves `a·t² + b·t + c = 0`.
///
/// A zero discriminant yields the repeated root once. Two distinct roots are
/// returned as `(−b + √Δ) / 2a` followed by `(−b − √Δ) / 2a`.
pub fn solve_quadratic<F: Float>(a: F, b: F, c: F) -> Vec<F> {
    if a == F::zero() {
        return solve_linear(b, c);
    }

    let two = F::one() + F::one();
    let four = two + two;
    let discriminant = b * b - four * a * c;

    if discriminant < F::zero() {
        return Vec::new();
    }

    let sqrt_d = discriminant.sqrt();
    if discriminant == F::zero() {
        vec![-b / (two * a)]
    } else {
        vec![(-b + sqrt_d) / (two * a), (-b - sqrt_d) / (two * a)]
    }
}

/// Solves `a·t³ + b·t² + c·t + d = 0`.
///
/// The cubic is depressed with `t = y − b/3a` into `y³ + p·y + q = 0` and
/// classified by `δ = (q/2)² + (p/3)³`:
///
/// - `δ > ε`: one real root (Cardano).
/// - `δ < −ε`: three distinct real roots (trigonometric form).
/// - otherwise: a triple root when `p` and `q` both vanish, else a simple root
///   followed by a double root reported once.
///
/// `ε` is relative to the size of the two terms of `δ`, scaled by
/// [`DISCRIMINANT_ULPS`], so tightly clustered roots stay distinct. Roots are
/// not sorted.
///
/// # Example
///
/// ```
/// use bezier_clip::solver::solve_cubic;
///
/// // (t - 1)(t - 2)(t - 3)
/// let mut roots = solve_cubic(1.0_f64, -6.0, 11.0, -6.0);
/// roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(roots.len(), 3);
/// assert!((roots[0] - 1.0).abs() < 1e-9);
/// assert!((roots[2] - 3.0).abs() < 1e-9);
/// ```
pub fn solve_cubic<F: Float>(a: F, b: F, c: F, d: F) -> Vec<F> {
    if a == F::zero() {
        return solve_quadratic(b, c, d);
    }

    let one = F::one();
    let two = one + one;
    let three = two + one;
    let nine = three * three;
    let twenty_seven = nine * three;
    let rel_tol = cast::<F>(DISCRIMINANT_ULPS) * F::epsilon();

    let shift = b / (three * a);
    let p = (three * a * c - b * b) / (three * a * a);
    let q = (two * b * b * b - nine * a * b * c + twenty_seven * a * a * d)
        / (twenty_seven * a * a * a);
    // Magnitudes of the terms p and q were computed from
    let p_scale = ((three * a * c).abs() + b * b) / (three * a * a);
    let q_scale = ((two * b * b * b).abs()
        + (nine * a * b * c).abs()
        + (twenty_seven * a * a * d).abs())
        / (twenty_seven * a * a * a).abs();

    let half_q = q / two;
    let third_p = p / three;
    let cube = third_p * third_p * third_p;
    let delta = half_q * half_q + cube;
    let eps = rel_tol * (half_q * half_q + cube.abs());

    if delta > eps {
        let sqrt_delta = delta.sqrt();
        // Pick the sign that avoids cancellation; |w| >= sqrt_delta > 0
        let w = if half_q > F::zero() {
            -half_q - sqrt_delta
        } else {
            -half_q + sqrt_delta
        };
        let u = w.cbrt();
        let v = -third_p / u;
        vec![u + v - shift]
    } else if delta < -eps {
        let r = (-third_p).sqrt();
        let cos_theta = (-half_q / (r * r * r)).max(-one).min(one);
        let theta = cos_theta.acos();
        let scale = two * r;
        let two_pi = two * cast::<F>(std::f64::consts::PI);

        (0..3)
            .map(|k| {
                let k: F = cast(k as f64);
                scale * ((theta + two_pi * k) / three).cos() - shift
            })
            .collect()
    } else if p.abs() <= rel_tol * p_scale && q.abs() <= rel_tol * q_scale {
        vec![-shift]
    } else {
        let u = (-half_q).cbrt();
        vec![two * u - shift, -u - shift]
    }
}

/// Solves the polynomial whose coefficients are given highest degree first.
///
/// `[a, b]` is `a·t + b`, `[a, b, c]` is `a·t² + b·t + c` and `[a, b, c, d]` is
/// `a·t³ + b·t² + c·t + d`. Empty and constant slices have no roots.
///
/// # Errors
///
/// Returns [`CurveError::UnsupportedDegree`] for more than four coefficients.
pub fn resolve<F: Float>(coefficients: &[F]) -> Result<Vec<F>, CurveError> {
    match *coefficients {
        [] | [_] => Ok(Vec::new()),
        [a, b] => Ok(solve_linear(a, b)),
        [a, b, c] => Ok(solve_quadratic(a, b, c)),
        [a, b, c, d] => Ok(solve_cubic(a, b, c, d)),
        _ => {
            let degree = coefficients.len() - 1;
            debug!("refusing to solve polynomial of degree {degree}");
            Err(CurveError::UnsupportedDegree { degree })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sorted(mut roots: Vec<f64>) -> Vec<f64> {
        roots.sort_by(|a, b| a.total_cmp(b));
        roots
    }

    #[test]
    fn test_linear() {
        assert_eq!(solve_linear(2.0, -6.0), vec![3.0]);
        assert_eq!(solve_linear(-4.0, 2.0), vec![0.5]);
    }

    #[test]
    fn test_linear_zero_intercept_is_degenerate() {
        assert!(solve_linear(2.0_f64, 0.0).is_empty());
    }

    #[test]
    fn test_linear_zero_slope_has_no_root() {
        assert!(solve_linear(0.0_f64, 3.0).is_empty());
    }

    #[test]
    fn test_quadratic_two_roots() {
        // (t - 1)(t - 2)
        let roots = solve_quadratic(1.0, -3.0, 2.0);
        assert_eq!(roots, vec![2.0, 1.0]);
    }

    #[test]
    fn test_quadratic_repeated_root() {
        // (t - 3)^2
        let roots = solve_quadratic(1.0, -6.0, 9.0);
        assert_eq!(roots, vec![3.0]);
    }

    #[test]
    fn test_quadratic_no_real_roots() {
        assert!(solve_quadratic(1.0_f64, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_quadratic_reduces_to_linear() {
        assert_eq!(solve_quadratic(0.0, 2.0, -6.0), solve_linear(2.0, -6.0));
    }

    #[test]
    fn test_cubic_three_distinct_roots() {
        let roots = sorted(solve_cubic(1.0, -6.0, 11.0, -6.0));
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_one_real_root() {
        // (t - 2)(t^2 + 1)
        let roots = solve_cubic(1.0, -2.0, 1.0, -2.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_negative_cardano_argument() {
        // t^3 + t + 10 = (t + 2)(t^2 - 2t + 5)
        let roots = solve_cubic(1.0, 0.0, 1.0, 10.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_simple_and_double_root() {
        // (t - 1)^2 (t + 2) = t^3 - 3t + 2
        let roots = sorted(solve_cubic(1.0, 0.0, -3.0, 2.0));
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_triple_root() {
        // (t - 1)^3
        let roots = solve_cubic(1.0, -3.0, 3.0, -1.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_scaled_leading_coefficient() {
        // 2(t + 1)(t - 0.5)(t - 4)
        let roots = sorted(solve_cubic(2.0, -7.0, -5.0, 4.0));
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], -1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 0.5, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_reduces_to_quadratic() {
        assert_eq!(
            solve_cubic(0.0, 1.0, -3.0, 2.0),
            solve_quadratic(1.0, -3.0, 2.0)
        );
    }

    #[test]
    fn test_cubic_reduces_twice_to_linear() {
        assert_eq!(solve_cubic(0.0, 0.0, 4.0, -2.0), vec![0.5]);
    }

    #[test]
    fn test_resolve_dispatch() {
        assert_eq!(resolve::<f64>(&[]).unwrap(), Vec::<f64>::new());
        assert_eq!(resolve(&[5.0]).unwrap(), Vec::<f64>::new());
        assert_eq!(resolve(&[2.0, -6.0]).unwrap(), vec![3.0]);
        assert_eq!(resolve(&[0.0, 1.0, -3.0, 2.0]).unwrap(), vec![2.0, 1.0]);
        assert_eq!(
            sorted(resolve(&[1.0, -6.0, 11.0, -6.0]).unwrap()).len(),
            3
        );
    }

    #[test]
    fn test_resolve_rejects_quartic() {
        assert_eq!(
            resolve(&[1.0, 0.0, 0.0, 0.0, -1.0]),
            Err(CurveError::UnsupportedDegree { degree: 4 })
        );
    }

    #[test]
    fn test_cubic_f32() {
        let roots = solve_cubic(1.0_f32, -6.0, 11.0, -6.0);
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn test_cubic_clustered_roots_stay_distinct() {
        // (t - 0.19)(t - 0.2)(t - 0.21)
        let roots = sorted(solve_cubic(1.0, -0.6, 0.1199, -0.00798));
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 0.19, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 0.2, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 0.21, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_small_coefficients_one_real_root() {
        // t^3 + 1e-4 t + 1e-7 has a single real root near -0.00099
        let roots = solve_cubic(1.0, 0.0, 1e-4, 1e-7);
        assert_eq!(roots.len(), 1);
        let t = roots[0];
        assert!(t > -1.0e-3 && t < -0.98e-3);
        assert!((t * t * t + 1e-4 * t + 1e-7).abs() < 1e-18);
    }
}
