//! Utility functions shared by the smoothing models and the selector.

pub mod metrics;
pub mod stats;

pub use metrics::sse;
pub use stats::{mean, median};
