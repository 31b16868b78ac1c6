//! Smoothing models and automatic model selection.

mod traits;

pub mod exponential;

pub use exponential::{AutoSmoothing, AutoSmoothingConfig, HoltLinear, HoltWintersAdditive};
pub use traits::Smoother;
