//! Holt's Linear Trend smoothing model.
//!
//! Also known as double exponential smoothing, this model is suitable for
//! data with a linear trend but no seasonality.

use crate::core::{Coefficients, Method, SmoothingResult};
use crate::models::Smoother;

/// Holt's Linear Trend smoother.
///
/// The model equations are:
/// - Level: `l_t = α × y_t + (1-α) × (l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β × (l_t - l_{t-1}) + (1-β) × b_{t-1}`
/// - Fitted: `ŷ_t = l_t + b_t`
/// - Forecast: `ŷ_{n+h} = l_n + h × b_n`
///
/// State is seeded with `l = y_0` and `b = y_1 - y_0`. Series shorter than
/// two observations take the degenerate path of
/// [`SmoothingResult::degenerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltLinear {
    /// Level smoothing parameter (0 < alpha < 1).
    alpha: f64,
    /// Trend smoothing parameter (0 < beta < 1).
    beta: f64,
}

impl HoltLinear {
    /// Create a new Holt model with fixed parameters.
    ///
    /// # Arguments
    /// * `alpha` - Level smoothing parameter (0 < alpha < 1)
    /// * `beta` - Trend smoothing parameter (0 < beta < 1)
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Smoother for HoltLinear {
    fn fit(&self, series: &[f64], horizon: usize) -> SmoothingResult {
        if series.len() < 2 {
            return SmoothingResult::degenerate(series, horizon);
        }

        let (alpha, beta) = (self.alpha, self.beta);
        let mut level = series[0];
        let mut trend = series[1] - series[0];

        let mut fitted = Vec::with_capacity(series.len());
        let mut residuals = Vec::with_capacity(series.len());

        for &y in series {
            let prev_level = level;
            level = alpha * y + (1.0 - alpha) * (prev_level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;

            let f = level + trend;
            fitted.push(f);
            residuals.push(y - f);
        }

        let forecast = (1..=horizon).map(|h| level + h as f64 * trend).collect();

        SmoothingResult::new(fitted, forecast, residuals)
    }

    fn method(&self) -> Method {
        Method::HoltLinear
    }

    fn coefficients(&self) -> Coefficients {
        Coefficients::trend(self.alpha, self.beta)
    }
}
