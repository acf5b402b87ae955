//! Standardized scores.

use sl_core::{Error, Result};

/// z-score of an observation: `(observed - mean) / sd`.
pub fn z_score(observed: f64, mean: f64, sd: f64) -> Result<f64> {
    if sd == 0.0 {
        return Err(Error::DivisionByZero("standard deviation is 0".to_string()));
    }
    if !sd.is_finite() || sd < 0.0 {
        return Err(Error::Domain(format!(
            "standard deviation must be finite and > 0, got {}",
            sd
        )));
    }
    Ok((observed - mean) / sd)
}
