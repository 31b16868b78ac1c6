//! Result structures produced by the smoothing models and the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output of a single smoothing model evaluation.
///
/// `fitted` and `residuals` have the length of the input series, `forecast`
/// has the length of the requested horizon, and
/// `residuals[i] == observed[i] - fitted[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmoothingResult {
    fitted: Vec<f64>,
    forecast: Vec<f64>,
    residuals: Vec<f64>,
}

impl SmoothingResult {
    pub fn new(fitted: Vec<f64>, forecast: Vec<f64>, residuals: Vec<f64>) -> Self {
        Self {
            fitted,
            forecast,
            residuals,
        }
    }

    /// Result for series too short to smooth: fitted echoes the input, the
    /// forecast repeats the last observation (or 0), residuals are zero.
    pub fn degenerate(series: &[f64], horizon: usize) -> Self {
        let last = series.last().copied().unwrap_or(0.0);
        Self {
            fitted: series.to_vec(),
            forecast: vec![last; horizon],
            residuals: vec![0.0; series.len()],
        }
    }

    /// In-sample fitted values.
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    /// Out-of-sample point forecast.
    pub fn forecast(&self) -> &[f64] {
        &self.forecast
    }

    /// Residuals (observed - fitted).
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.forecast.len()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.fitted, self.forecast, self.residuals)
    }
}

/// Smoothing method tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Additive Holt-Winters (triple exponential smoothing).
    #[serde(rename = "holt_winters_additive")]
    HoltWintersAdditive,
    /// Holt's linear trend (double exponential smoothing).
    #[serde(rename = "holt_linear")]
    HoltLinear,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::HoltWintersAdditive => "holt_winters_additive",
            Method::HoltLinear => "holt_linear",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smoothing coefficients of a model.
///
/// `gamma` and `season_length` are only present for the seasonal method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coefficients {
    pub alpha: f64,
    pub beta: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_length: Option<usize>,
}

impl Coefficients {
    /// Coefficients of a trend-only model.
    pub fn trend(alpha: f64, beta: f64) -> Self {
        Self {
            alpha,
            beta,
            gamma: None,
            season_length: None,
        }
    }

    /// Coefficients of a seasonal model.
    pub fn seasonal(alpha: f64, beta: f64, gamma: f64, season_length: usize) -> Self {
        Self {
            alpha,
            beta,
            gamma: Some(gamma),
            season_length: Some(season_length),
        }
    }
}

/// The externally visible result of an automatic forecast.
///
/// Serializes to the boundary JSON shape
/// `{ method, horizon, params, fitted, forecast, residuals }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOutcome {
    pub method: Method,
    pub horizon: usize,
    #[serde(rename = "params")]
    pub coefficients: Coefficients,
    pub fitted: Vec<f64>,
    pub forecast: Vec<f64>,
    pub residuals: Vec<f64>,
}

impl ForecastOutcome {
    pub fn new(
        method: Method,
        horizon: usize,
        coefficients: Coefficients,
        result: SmoothingResult,
    ) -> Self {
        let (fitted, forecast, residuals) = result.into_parts();
        Self {
            method,
            horizon,
            coefficients,
            fitted,
            forecast,
            residuals,
        }
    }

    /// Serialize to the boundary JSON representation.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
