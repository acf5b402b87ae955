//! Sampled `(x, density)` curves for the chart-based tools.
//!
//! Every constructor is a pure function of its parameters: same inputs,
//! same sequence, bit for bit. The sampling simulators elsewhere in the
//! product are deliberately random; these curves are deliberately not.

use serde::{Deserialize, Serialize};
use sl_core::{Error, Result};
use sl_prob::{chi_squared, fisher_f, normal, student_t};

/// Schema tag embedded in serialized curve artifacts.
const SCHEMA_VERSION: &str = "statlab_density_curve_v1";

/// Default number of curve segments (a curve has `segments + 1` points).
pub const DEFAULT_SEGMENTS: usize = 200;

/// Single sampled point of a density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Sample position.
    pub x: f64,
    /// Density at `x`.
    pub density: f64,
}

/// Plot-friendly artifact for one density curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurveArtifact {
    /// Artifact schema tag.
    pub schema_version: String,
    /// Version of the library that produced the artifact.
    pub tool_version: String,
    /// Distribution label ("normal", "student_t", "chi_squared", "fisher_f").
    pub distribution: String,
    /// Lower end of the sampled range.
    pub x_min: f64,
    /// Upper end of the sampled range.
    pub x_max: f64,
    /// Per-point results.
    pub points: Vec<CurvePoint>,
    /// Sample positions (same as `points[*].x`).
    pub x_values: Vec<f64>,
    /// Densities aligned with `x_values`.
    pub density_values: Vec<f64>,
}

impl DensityCurveArtifact {
    /// Sample `density` at `segments + 1` evenly spaced points on
    /// `[x_min, x_max]`, strictly increasing in x.
    fn sample<F>(
        distribution: &str,
        x_min: f64,
        x_max: f64,
        segments: usize,
        density: F,
    ) -> Result<Self>
    where
        F: Fn(f64) -> Result<f64>,
    {
        if segments < 2 {
            return Err(Error::Domain(format!(
                "curve needs at least 2 segments, got {}",
                segments
            )));
        }
        if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
            return Err(Error::Domain(format!(
                "invalid curve range [{}, {}]",
                x_min, x_max
            )));
        }

        let step = (x_max - x_min) / segments as f64;
        let mut points = Vec::with_capacity(segments + 1);
        let mut x_values = Vec::with_capacity(segments + 1);
        let mut density_values = Vec::with_capacity(segments + 1);

        for i in 0..=segments {
            let x = if i == segments { x_max } else { x_min + step * i as f64 };
            let d = density(x)?;
            points.push(CurvePoint { x, density: d });
            x_values.push(x);
            density_values.push(d);
        }

        Ok(Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool_version: sl_core::VERSION.to_string(),
            distribution: distribution.to_string(),
            x_min,
            x_max,
            points,
            x_values,
            density_values,
        })
    }

    /// Normal density curve over `[mean - 4·sd, mean + 4·sd]`.
    pub fn normal(mean: f64, sd: f64, segments: usize) -> Result<Self> {
        // Validate sd before deriving the range from it.
        normal::pdf(mean, mean, sd)?;
        let half = 4.0 * sd;
        Self::sample("normal", mean - half, mean + half, segments, |x| {
            normal::pdf(x, mean, sd)
        })
    }

    /// Student-t density curve over `[-4, 4]` (the teaching range shared
    /// with the standard normal overlay).
    pub fn student_t(df: f64, segments: usize) -> Result<Self> {
        student_t::pdf(0.0, df)?;
        Self::sample("student_t", -4.0, 4.0, segments, |x| student_t::pdf(x, df))
    }

    /// Chi-square density curve over `[0, df + 4·sqrt(2·df)]`
    /// (mean + 4·sd of the distribution).
    ///
    /// For `df < 2` the density diverges at the origin; that single endpoint
    /// sample is clamped to 0 so the artifact stays chart-safe.
    pub fn chi_squared(df: f64, segments: usize) -> Result<Self> {
        chi_squared::pdf(1.0, df)?;
        let x_max = df + 4.0 * (2.0 * df).sqrt();
        Self::sample("chi_squared", 0.0, x_max, segments, |x| {
            let d = chi_squared::pdf(x, df)?;
            Ok(if d.is_finite() { d } else { 0.0 })
        })
    }

    /// F density curve over `[0, mean + 4·sd]` when the moments exist
    /// (`df2 > 4`), else the fixed teaching range `[0, 5]`.
    ///
    /// Same origin clamp as the chi-square curve, for `df1 < 2`.
    pub fn fisher_f(df1: f64, df2: f64, segments: usize) -> Result<Self> {
        fisher_f::pdf(1.0, df1, df2)?;
        let x_max = if df2 > 4.0 {
            let mean = df2 / (df2 - 2.0);
            let var = 2.0 * df2 * df2 * (df1 + df2 - 2.0)
                / (df1 * (df2 - 2.0) * (df2 - 2.0) * (df2 - 4.0));
            mean + 4.0 * var.sqrt()
        } else {
            5.0
        };
        Self::sample("fisher_f", 0.0, x_max, segments, |x| {
            let d = fisher_f::pdf(x, df1, df2)?;
            Ok(if d.is_finite() { d } else { 0.0 })
        })
    }

    /// Trapezoid-rule integral of the sampled curve.
    pub fn trapezoid_mass(&self) -> f64 {
        let mut mass = 0.0;
        for w in self.points.windows(2) {
            mass += 0.5 * (w[0].density + w[1].density) * (w[1].x - w[0].x);
        }
        mass
    }
}
