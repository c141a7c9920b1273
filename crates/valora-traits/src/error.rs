//! Error types for the Valora engine.
//!
//! The factor calculators are total and never fail. Errors only surface at
//! the edges: turning tabular batches into records and validating
//! configuration supplied by callers.

use thiserror::Error;

/// The main error type for Valora operations.
#[derive(Debug, Error)]
pub enum ValoraError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from the data.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error when a configuration value is out of its accepted domain.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error when a factor is not found in the registry.
    #[error("Factor not found: {0}")]
    FactorNotFound(String),
}

/// A specialized Result type for Valora operations.
///
/// This is a convenience type that uses [`ValoraError`] as the error type.
pub type Result<T> = std::result::Result<T, ValoraError>;
