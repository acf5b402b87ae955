//! Critical-value lookups (inverse CDFs) for the t, chi-square, and F
//! distributions.
//!
//! None of the three has a closed-form inverse, so each lookup runs Newton's
//! method on the CDF with a forward-difference derivative, seeded from the
//! normal quantile with a distribution-specific correction. Non-convergence
//! is observable (`converged == false`) and logged, never a silent wrong
//! value and never a panic.

use sl_core::Result;

use crate::normal;

/// Iteration cap for Newton's method.
const MAX_ITER: usize = 20;

/// Forward-difference step for the CDF derivative.
const FD_STEP: f64 = 0.01;

/// Absolute CDF error below which the lookup is considered converged.
const TOL: f64 = 1e-6;

/// Derivative magnitude below which iteration stops (flat CDF region).
const DERIV_FLOOR: f64 = 1e-12;

/// Smallest x the bounded-support inversions will evaluate.
const SUPPORT_FLOOR: f64 = 1e-4;

/// Result of a critical-value lookup.
///
/// When `converged` is false the iteration hit its cap or a flat region of
/// the CDF; `value` is then the estimate with the smallest CDF error seen,
/// and the caller decides whether to surface it.
#[derive(Debug, Clone, Copy)]
pub struct CriticalValue {
    /// The x whose CDF is closest to the requested probability.
    pub value: f64,
    /// Whether `|CDF(x) - p| < 1e-6` was reached.
    pub converged: bool,
    /// Newton iterations used.
    pub n_iter: usize,
}

/// Newton iteration on `cdf(x) = p` from seed `x0`.
///
/// For distributions supported on `[0, ∞)` each update is clamped into
/// `[x/8, 8x]` and floored inside the support.
fn invert<F>(what: &str, cdf: F, p: f64, x0: f64, positive_support: bool) -> Result<CriticalValue>
where
    F: Fn(f64) -> Result<f64>,
{
    let mut x = if positive_support { x0.max(FD_STEP) } else { x0 };
    let mut best_err = f64::INFINITY;
    let mut best_x = x;

    for iter in 1..=MAX_ITER {
        let value = cdf(x)?;
        let err = value - p;
        if err.abs() < best_err {
            best_err = err.abs();
            best_x = x;
        }
        if err.abs() < TOL {
            return Ok(CriticalValue { value: x, converged: true, n_iter: iter });
        }

        let slope = (cdf(x + FD_STEP)? - value) / FD_STEP;
        if !slope.is_finite() || slope.abs() < DERIV_FLOOR {
            break;
        }

        let mut next = x - err / slope;
        if positive_support {
            next = next.clamp(x / 8.0, x * 8.0).max(SUPPORT_FLOOR);
        }
        x = next;
    }

    log::warn!(
        "{}: critical-value lookup did not converge for p={} (best |cdf error| = {:.3e})",
        what,
        p,
        best_err
    );
    Ok(CriticalValue { value: best_x, converged: false, n_iter: MAX_ITER })
}

/// Critical t value: the t with `student_t::cdf(t, df) = p`.
///
/// Seeded with the first-order Cornish-Fisher correction of the normal
/// quantile.
pub fn student_t(p: f64, df: f64) -> Result<CriticalValue> {
    let z = normal::quantile(p)?;
    let x0 = z + (z * z * z + z) / (4.0 * df);
    invert("student_t", |x| crate::student_t::cdf(x, df), p, x0, false)
}

/// Critical chi-square value: the x with `chi_squared::cdf(x, df) = p`.
///
/// Seeded at `df + sqrt(2·df)·z`, clamped into the support.
pub fn chi_squared(p: f64, df: f64) -> Result<CriticalValue> {
    let z = normal::quantile(p)?;
    let x0 = df + (2.0 * df).sqrt() * z;
    invert("chi_squared", |x| crate::chi_squared::cdf(x, df), p, x0, true)
}

/// Critical F value: the f with `fisher_f::cdf(f, df1, df2) = p`.
///
/// Seeded at `1 + z·sqrt(2·(df1+df2)/(df1·df2))`, clamped into the support.
pub fn fisher_f(p: f64, df1: f64, df2: f64) -> Result<CriticalValue> {
    let z = normal::quantile(p)?;
    let x0 = 1.0 + z * (2.0 * (df1 + df2) / (df1 * df2)).sqrt();
    invert("fisher_f", |x| crate::fisher_f::cdf(x, df1, df2), p, x0, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_chi_squared_textbook_value() {
        // Upper 5% critical value, df=5.
        let cv = chi_squared(0.95, 5.0).unwrap();
        assert!(cv.converged, "did not converge: {:?}", cv);
        assert_abs_diff_eq!(cv.value, 11.0705, epsilon = 1e-2);
    }

    #[test]
    fn test_chi_squared_lower_tail() {
        // Lower 5% critical value, df=5 (seed starts below the support).
        let cv = chi_squared(0.05, 5.0).unwrap();
        assert!(cv.converged, "did not converge: {:?}", cv);
        assert_abs_diff_eq!(cv.value, 1.1455, epsilon = 1e-2);
    }

    #[test]
    fn test_student_t_textbook_values() {
        let cv = student_t(0.975, 10.0).unwrap();
        assert!(cv.converged);
        assert_abs_diff_eq!(cv.value, 2.2281, epsilon = 1e-3);

        // Symmetry of the two tails.
        let lo = student_t(0.025, 10.0).unwrap();
        assert!(lo.converged);
        assert_abs_diff_eq!(lo.value, -cv.value, epsilon = 1e-3);
    }

    #[test]
    fn test_fisher_f_textbook_value() {
        let cv = fisher_f(0.95, 3.0, 12.0).unwrap();
        assert!(cv.converged);
        assert_abs_diff_eq!(cv.value, 3.4903, epsilon = 1e-2);
    }

    #[test]
    fn test_round_trip_through_cdf() {
        let cv = student_t(0.9, 6.0).unwrap();
        let p = crate::student_t::cdf(cv.value, 6.0).unwrap();
        assert_abs_diff_eq!(p, 0.9, epsilon = 1e-5);

        let cv = chi_squared(0.99, 8.0).unwrap();
        let p = crate::chi_squared::cdf(cv.value, 8.0).unwrap();
        assert_abs_diff_eq!(p, 0.99, epsilon = 1e-5);
    }

    #[test]
    fn test_rejects_invalid_probability() {
        assert!(student_t(0.0, 5.0).is_err());
        assert!(chi_squared(1.0, 5.0).is_err());
        assert!(fisher_f(1.5, 3.0, 9.0).is_err());
    }

    #[test]
    fn test_rejects_invalid_df() {
        assert!(student_t(0.9, 0.5).is_err());
        assert!(chi_squared(0.9, 0.0).is_err());
        assert!(fisher_f(0.9, 2.0, 0.5).is_err());
    }
}
