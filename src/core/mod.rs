//! Core data structures for time series forecasting.

mod forecast;
mod series;

pub use forecast::{Coefficients, ForecastOutcome, Method, SmoothingResult};
pub use series::Series;
