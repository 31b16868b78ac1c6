//! Exponential smoothing models.
//!
//! This module provides the exponential smoothing forecasting methods:
//! - Holt's Linear Trend (double exponential smoothing)
//! - Additive Holt-Winters (triple exponential smoothing)
//! - AutoSmoothing (grid-search model selection over both)

mod auto_smoothing;
mod holt;
mod holt_winters;

pub use auto_smoothing::{
    AutoSmoothing, AutoSmoothingConfig, Candidate, CandidateModel, Selection, ALPHA_GRID,
    BETA_GRID, GAMMA_GRID,
};
pub use holt::HoltLinear;
pub use holt_winters::HoltWintersAdditive;
