//! Core types for statlab
//!
//! Shared error taxonomy and result alias used by every crate in the
//! workspace. Nothing here computes anything; the numerical content lives in
//! `sl-prob` and above.

pub mod error;

pub use error::{Error, Result};

/// Workspace version string (embedded in serialized artifacts).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
