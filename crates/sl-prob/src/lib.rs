//! Probability building blocks for statlab.
//!
//! This crate hosts the numerical core shared by every visualization tool:
//! - special functions (log-gamma, incomplete beta, incomplete gamma)
//! - normal / t / chi-square / F distribution functions
//! - Newton critical-value lookups for the distributions without a
//!   closed-form inverse
//!
//! Everything is a pure synchronous function over `f64` scalars with bounded
//! iteration counts; no shared state, no I/O. Callers re-invoke on every
//! parameter change, so the hot paths are cheap by construction.

pub mod chi_squared;
pub mod critical;
pub mod fisher_f;
pub mod math;
pub mod normal;
pub mod student_t;

pub use critical::CriticalValue;
