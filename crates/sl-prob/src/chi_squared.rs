//! Chi-square distribution functions.

use sl_core::{Error, Result};

use crate::math::{inc_gamma_lower, ln_gamma};

const LN_2: f64 = std::f64::consts::LN_2;

fn check_df(df: f64) -> Result<()> {
    if !df.is_finite() || df < 1.0 {
        return Err(Error::Domain(format!(
            "degrees of freedom must be finite and >= 1, got {}",
            df
        )));
    }
    Ok(())
}

/// Log-PDF of the chi-square distribution with `df` degrees of freedom.
///
/// Support is `[0, ∞)`; out-of-support `x` yields `-inf`, and the density at
/// the origin diverges for `df < 2`.
pub fn logpdf(x: f64, df: f64) -> Result<f64> {
    check_df(df)?;
    let half = 0.5 * df;
    if x < 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if x == 0.0 {
        if half < 1.0 {
            return Ok(f64::INFINITY);
        }
        if half > 1.0 {
            return Ok(f64::NEG_INFINITY);
        }
        // df == 2 => exponential with rate 1/2
        return Ok(-LN_2);
    }
    Ok((half - 1.0) * x.ln() - 0.5 * x - half * LN_2 - ln_gamma(half))
}

/// PDF of the chi-square distribution with `df` degrees of freedom.
pub fn pdf(x: f64, df: f64) -> Result<f64> {
    Ok(logpdf(x, df)?.exp())
}

/// CDF of the chi-square distribution with `df` degrees of freedom.
///
/// `P(X <= x) = P(df/2, x/2)` (regularized lower incomplete gamma).
/// `x <= 0` yields 0: out-of-support observations are saturated chart
/// inputs, not errors.
pub fn cdf(x: f64, df: f64) -> Result<f64> {
    check_df(df)?;
    inc_gamma_lower(0.5 * df, 0.5 * x)
}
