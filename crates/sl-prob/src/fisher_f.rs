//! F (Fisher-Snedecor) distribution functions.

use sl_core::{Error, Result};

use crate::math::{inc_beta, ln_beta};

fn check_dfs(df1: f64, df2: f64) -> Result<()> {
    if !df1.is_finite() || df1 < 1.0 || !df2.is_finite() || df2 < 1.0 {
        return Err(Error::Domain(format!(
            "degrees of freedom must be finite and >= 1, got df1={}, df2={}",
            df1, df2
        )));
    }
    Ok(())
}

/// Log-PDF of the F distribution with `(df1, df2)` degrees of freedom.
///
/// Support is `[0, ∞)`; the density at the origin diverges for `df1 < 2`.
pub fn logpdf(f: f64, df1: f64, df2: f64) -> Result<f64> {
    check_dfs(df1, df2)?;
    let h1 = 0.5 * df1;
    let h2 = 0.5 * df2;
    if f < 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if f == 0.0 {
        if h1 < 1.0 {
            return Ok(f64::INFINITY);
        }
        if h1 > 1.0 {
            return Ok(f64::NEG_INFINITY);
        }
        // df1 == 2: f(0) = 1
        return Ok(0.0);
    }
    Ok(h1 * (df1 / df2).ln() + (h1 - 1.0) * f.ln()
        - (h1 + h2) * (df1 * f / df2).ln_1p()
        - ln_beta(h1, h2))
}

/// PDF of the F distribution with `(df1, df2)` degrees of freedom.
pub fn pdf(f: f64, df1: f64, df2: f64) -> Result<f64> {
    Ok(logpdf(f, df1, df2)?.exp())
}

/// CDF of the F distribution with `(df1, df2)` degrees of freedom.
///
/// `P(F <= f) = 1 - I_{df2/(df2+df1·f)}(df2/2, df1/2)`; `f <= 0` yields 0.
pub fn cdf(f: f64, df1: f64, df2: f64) -> Result<f64> {
    check_dfs(df1, df2)?;
    if f <= 0.0 {
        return Ok(0.0);
    }
    let ib = inc_beta(df2 / (df2 + df1 * f), 0.5 * df2, 0.5 * df1)?;
    Ok(1.0 - ib)
}
