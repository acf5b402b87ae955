//! # sl-viz
//!
//! Visualization data artifacts for statlab.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (arrays instead of nested objects). The
//! charting layer binds the arrays directly; nothing here renders.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Sampled density-curve artifacts for the chart-based tools.
pub mod curve;

pub use curve::{CurvePoint, DEFAULT_SEGMENTS, DensityCurveArtifact};
