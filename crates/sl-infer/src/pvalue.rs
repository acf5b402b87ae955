//! Tail p-values from a test statistic.

use serde::{Deserialize, Serialize};
use sl_core::Result;
use sl_prob::{chi_squared, fisher_f, normal, student_t};

/// Which tail(s) of the null distribution count as "at least as extreme".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tail {
    /// `P(X <= stat)`
    Left,
    /// `P(X >= stat)`
    Right,
    /// `2 * P(X >= |stat|)`, clamped to [0, 1]
    TwoTailed,
}

/// p-value of a z statistic under the standard normal null.
pub fn p_value(z: f64, tail: Tail) -> f64 {
    let p = match tail {
        Tail::Left => normal::standard_cdf(z),
        Tail::Right => 1.0 - normal::standard_cdf(z),
        Tail::TwoTailed => 2.0 * (1.0 - normal::standard_cdf(z.abs())),
    };
    p.clamp(0.0, 1.0)
}

/// p-value of a t statistic with `df` degrees of freedom.
pub fn p_value_t(t: f64, df: f64, tail: Tail) -> Result<f64> {
    let p = match tail {
        Tail::Left => student_t::cdf(t, df)?,
        Tail::Right => 1.0 - student_t::cdf(t, df)?,
        Tail::TwoTailed => 2.0 * (1.0 - student_t::cdf(t.abs(), df)?),
    };
    Ok(p.clamp(0.0, 1.0))
}

/// Right-tailed p-value of a chi-square statistic (the test-of-fit
/// convention: large statistics are extreme).
pub fn p_value_chi_squared(x: f64, df: f64) -> Result<f64> {
    Ok((1.0 - chi_squared::cdf(x, df)?).clamp(0.0, 1.0))
}

/// Right-tailed p-value of an F statistic.
pub fn p_value_f(f: f64, df1: f64, df2: f64) -> Result<f64> {
    Ok((1.0 - fisher_f::cdf(f, df1, df2)?).clamp(0.0, 1.0))
}
