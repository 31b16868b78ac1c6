//! Detection utilities for time series analysis.
//!
//! This module classifies the sampling frequency of a series from its
//! timestamps, which determines the seasonal period tried by the selector.

mod frequency;

pub use frequency::{detect_frequency, detect_frequency_instants, parse_timestamp, Frequency};
