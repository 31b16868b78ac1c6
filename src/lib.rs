//! # smoothcast
//!
//! Automatic point forecasting with exponential smoothing.
//!
//! The engine classifies the sampling frequency of a series from its
//! timestamps, grid-searches Holt's linear trend and additive Holt-Winters
//! coefficients, and returns the fit with the lowest in-sample sum of
//! squared residuals.
//!
//! ```
//! use smoothcast::auto_forecast;
//!
//! let values = [3.0, 5.0, 4.0, 6.0, 5.0, 7.0];
//! let dates = [
//!     "2024-01-01", "2024-02-01", "2024-03-01",
//!     "2024-04-01", "2024-05-01", "2024-06-01",
//! ];
//! let outcome = auto_forecast(&values, &dates, 2);
//! assert_eq!(outcome.forecast.len(), 2);
//! ```

pub mod core;
pub mod detection;
pub mod engine;
pub mod error;
pub mod models;
pub mod request;
pub mod utils;

pub use engine::{auto_forecast, AutoForecaster};
pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Coefficients, ForecastOutcome, Method, Series, SmoothingResult};
    pub use crate::detection::{detect_frequency, Frequency};
    pub use crate::engine::{auto_forecast, AutoForecaster};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{AutoSmoothing, AutoSmoothingConfig, Smoother};
    pub use crate::request::ForecastRequest;
}
