//! Normal distribution functions.
//!
//! One canonical calling convention throughout the workspace: the
//! three-argument forms take `(x, mean, sd)` and standardize internally,
//! and `standard_cdf` is the parameter-free primitive the derived-quantity
//! code builds on. No call site standardizes by hand before calling the
//! three-argument form.

use sl_core::{Error, Result};

/// Natural log of `sqrt(2π)`.
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// `1 / sqrt(2π)`.
const INV_SQRT_2PI: f64 = 0.398_942_3;

fn check_sd(sd: f64) -> Result<()> {
    if sd == 0.0 {
        return Err(Error::DivisionByZero("standard deviation is 0".to_string()));
    }
    if !sd.is_finite() || sd < 0.0 {
        return Err(Error::Domain(format!(
            "standard deviation must be finite and > 0, got {}",
            sd
        )));
    }
    Ok(())
}

/// Log-PDF of `N(mean, sd)` at `x`.
///
/// `log p(x) = -0.5 * ((x-mean)/sd)^2 - ln(sd) - ln(sqrt(2π))`
pub fn logpdf(x: f64, mean: f64, sd: f64) -> Result<f64> {
    check_sd(sd)?;
    let z = (x - mean) / sd;
    Ok(-0.5 * z * z - sd.ln() - LN_SQRT_2PI)
}

/// PDF of `N(mean, sd)` at `x`.
pub fn pdf(x: f64, mean: f64, sd: f64) -> Result<f64> {
    Ok(logpdf(x, mean, sd)?.exp())
}

/// CDF of `N(mean, sd)` at `x`.
///
/// Standardizes internally, then evaluates [`standard_cdf`].
pub fn cdf(x: f64, mean: f64, sd: f64) -> Result<f64> {
    check_sd(sd)?;
    Ok(standard_cdf((x - mean) / sd))
}

/// Standard normal CDF `Φ(z)`.
///
/// Zelen & Severo rational polynomial approximation of the complementary
/// tail, absolute error below `7.5e-8`. Underflows cleanly to 0/1 in the far
/// tails.
pub fn standard_cdf(z: f64) -> f64 {
    const P: f64 = 0.231_641_9;
    const B: [f64; 5] = [0.319_381_5, -0.356_563_8, 1.781_478, -1.821_256, 1.330_274];

    let t = 1.0 / (1.0 + P * z.abs());
    let d = INV_SQRT_2PI * (-0.5 * z * z).exp();
    let poly = B[0] + t * (B[1] + t * (B[2] + t * (B[3] + t * B[4])));
    let tail = d * t * poly;
    if z > 0.0 { 1.0 - tail } else { tail }
}

/// Quantile (inverse CDF, probit) of the standard normal distribution.
///
/// Rational approximation by Peter Acklam (relative error < 1.15e-9).
/// `p` outside the open interval (0, 1) is a domain error.
pub fn quantile(p: f64) -> Result<f64> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(Error::Domain(format!("p must be in (0,1), got {}", p)));
    }

    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383_577_518_672_69e2,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let z = if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };
    Ok(z)
}
