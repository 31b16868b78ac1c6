//! Error types for the smoothcast library.
//!
//! The numeric core is total and never fails; errors only surface at the
//! validated entry points (series construction, request decoding, config).

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur at the boundary of the forecasting engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Values and timestamps differ in length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Horizon outside the accepted range.
    #[error("invalid horizon: {horizon} (must be between 1 and {max})")]
    InvalidHorizon { horizon: usize, max: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Request payload could not be decoded.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::InvalidPayload(err.to_string())
    }
}
