//! Sample-size and power calculations for a two-group comparison.
//!
//! Standard normal-approximation design formulas: both directions of the
//! pair are exposed so the study-design tool can move either slider.

use sl_core::{Error, Result};
use sl_prob::normal;

fn check_unit_interval(name: &str, v: f64) -> Result<()> {
    if !v.is_finite() || v <= 0.0 || v >= 1.0 {
        return Err(Error::Domain(format!("{} must be in (0,1), got {}", name, v)));
    }
    Ok(())
}

fn check_effect_size(effect_size: f64) -> Result<()> {
    if effect_size == 0.0 {
        return Err(Error::DivisionByZero("effect size is 0".to_string()));
    }
    if !effect_size.is_finite() || effect_size < 0.0 {
        return Err(Error::Domain(format!(
            "effect size must be finite and > 0, got {}",
            effect_size
        )));
    }
    Ok(())
}

/// Required per-group sample size for a two-sided test at level `alpha`
/// with the requested `power` against standardized effect size
/// `effect_size`:
///
/// `n = ceil( 2 * ((z_{1-alpha/2} + z_power) / effect_size)^2 )`
pub fn required_sample_size(alpha: f64, power: f64, effect_size: f64) -> Result<u64> {
    check_unit_interval("alpha", alpha)?;
    check_unit_interval("power", power)?;
    check_effect_size(effect_size)?;

    let z_alpha = normal::quantile(1.0 - 0.5 * alpha)?;
    let z_power = normal::quantile(power)?;
    let ratio = (z_alpha + z_power) / effect_size;
    let n = (2.0 * ratio * ratio).ceil();
    if !n.is_finite() || n > u64::MAX as f64 {
        return Err(Error::Computation(format!(
            "required sample size overflows for effect size {}",
            effect_size
        )));
    }
    Ok(n as u64)
}

/// Achieved power of a two-sided test at level `alpha` with per-group sample
/// size `n` against standardized effect size `effect_size`:
///
/// `power = Φ(effect_size * sqrt(n/2) - z_{1-alpha/2})`
pub fn achieved_power(alpha: f64, effect_size: f64, n: u64) -> Result<f64> {
    check_unit_interval("alpha", alpha)?;
    check_effect_size(effect_size)?;
    if n == 0 {
        return Err(Error::Domain("sample size must be >= 1".to_string()));
    }

    let z_alpha = normal::quantile(1.0 - 0.5 * alpha)?;
    let shift = effect_size * (n as f64 / 2.0).sqrt();
    Ok(normal::standard_cdf(shift - z_alpha))
}
