//! Student-t distribution functions.

use sl_core::{Error, Result};

use crate::math::{inc_beta, ln_gamma};

/// Natural log of π.
const LN_PI: f64 = 1.144_729_885_849_400_2;

fn check_df(df: f64) -> Result<()> {
    if !df.is_finite() || df < 1.0 {
        return Err(Error::Domain(format!(
            "degrees of freedom must be finite and >= 1, got {}",
            df
        )));
    }
    Ok(())
}

/// Log-PDF of the t distribution with `df` degrees of freedom at `t`.
pub fn logpdf(t: f64, df: f64) -> Result<f64> {
    check_df(df)?;
    let a = ln_gamma(0.5 * (df + 1.0)) - ln_gamma(0.5 * df);
    let b = -0.5 * (df.ln() + LN_PI);
    let c = -0.5 * (df + 1.0) * (t * t / df).ln_1p();
    Ok(a + b + c)
}

/// PDF of the t distribution with `df` degrees of freedom at `t`.
pub fn pdf(t: f64, df: f64) -> Result<f64> {
    Ok(logpdf(t, df)?.exp())
}

/// CDF of the t distribution with `df` degrees of freedom at `t`.
///
/// Through the incomplete-beta identity
/// `P(T <= t) = 1 - I_{df/(df+t²)}(df/2, 1/2) / 2` for `t >= 0`, with the
/// symmetric form for `t < 0`.
pub fn cdf(t: f64, df: f64) -> Result<f64> {
    check_df(df)?;
    let ib = inc_beta(df / (df + t * t), 0.5 * df, 0.5)?;
    Ok(if t >= 0.0 { 1.0 - 0.5 * ib } else { 0.5 * ib })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cdf_at_zero_is_half() {
        for &df in &[1.0, 2.0, 5.0, 30.0] {
            assert_abs_diff_eq!(cdf(0.0, df).unwrap(), 0.5, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cdf_symmetry() {
        for &t in &[0.3, 1.0, 2.5, 4.0] {
            let hi = cdf(t, 7.0).unwrap();
            let lo = cdf(-t, 7.0).unwrap();
            assert_abs_diff_eq!(hi + lo, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cauchy_quartile() {
        // df=1 is Cauchy: P(T <= 1) = 3/4
        assert_abs_diff_eq!(cdf(1.0, 1.0).unwrap(), 0.75, epsilon = 1e-9);
    }

    #[test]
    fn test_large_df_approaches_normal() {
        for &t in &[-2.0, -1.0, -0.5, 0.5, 1.0, 2.0] {
            let t_p = cdf(t, 10_000.0).unwrap();
            let n_p = crate::normal::standard_cdf(t);
            assert_abs_diff_eq!(t_p, n_p, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_pdf_symmetric() {
        let p1 = pdf(1.7, 5.0).unwrap();
        let p2 = pdf(-1.7, 5.0).unwrap();
        assert_abs_diff_eq!(p1, p2, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_df() {
        assert!(cdf(1.0, 0.5).is_err());
        assert!(cdf(1.0, 0.0).is_err());
        assert!(pdf(1.0, f64::NAN).is_err());
    }
}
