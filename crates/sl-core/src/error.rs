//! Error types for statlab

use thiserror::Error;

/// statlab error type
#[derive(Error, Debug)]
pub enum Error {
    /// Argument outside a function's mathematical domain
    /// (probability not in (0,1), degrees of freedom below 1, ...).
    #[error("domain error: {0}")]
    Domain(String),

    /// Division by a zero-valued parameter (standard deviation, effect size).
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// A numerical routine produced a non-finite intermediate.
    #[error("computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
