//! Automatic forecasting entry point.
//!
//! Detects the sampling frequency from the timestamps, runs the smoothing
//! grid search and returns the winning model's output.

use crate::core::{ForecastOutcome, Series};
use crate::detection::{detect_frequency, Frequency};
use crate::error::Result;
use crate::models::exponential::{AutoSmoothing, AutoSmoothingConfig, Selection};

/// Frequency detection followed by smoothing model selection.
///
/// Every call is a pure function of its inputs: the same values,
/// timestamps and horizon always produce the same outcome.
#[derive(Debug, Clone, Default)]
pub struct AutoForecaster {
    selector: AutoSmoothing,
}

impl AutoForecaster {
    /// Create a forecaster with the default coefficient grids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecaster with a custom search configuration.
    pub fn with_config(config: AutoSmoothingConfig) -> Result<Self> {
        Ok(Self {
            selector: AutoSmoothing::with_config(config)?,
        })
    }

    pub fn config(&self) -> &AutoSmoothingConfig {
        self.selector.config()
    }

    /// Forecast `horizon` steps of `values`.
    ///
    /// `timestamps` are only used to classify the frequency. Lengths are
    /// not checked here; use [`Series`] or
    /// [`ForecastRequest`](crate::request::ForecastRequest) for validated
    /// input.
    pub fn forecast<S: AsRef<str>>(
        &self,
        values: &[f64],
        timestamps: &[S],
        horizon: usize,
    ) -> ForecastOutcome {
        let (_, selection) = self.forecast_detailed(values, timestamps, horizon);
        selection.best.into_outcome(horizon)
    }

    /// Forecast a validated series.
    pub fn forecast_series(&self, series: &Series, horizon: usize) -> ForecastOutcome {
        self.forecast(series.values(), series.timestamps(), horizon)
    }

    /// Like [`forecast`](Self::forecast) but also returns the detected
    /// frequency and the full search record.
    pub fn forecast_detailed<S: AsRef<str>>(
        &self,
        values: &[f64],
        timestamps: &[S],
        horizon: usize,
    ) -> (Frequency, Selection) {
        let frequency = detect_frequency(timestamps);
        tracing::debug!(
            len = values.len(),
            horizon,
            frequency = frequency.as_str(),
            "starting automatic forecast"
        );
        let selection = self.selector.select(values, frequency, horizon);
        (frequency, selection)
    }
}

/// Forecast with the default grids.
///
/// # Example
///
/// ```
/// use smoothcast::auto_forecast;
///
/// let values = [10.0, 12.0, 13.0, 12.0, 15.0, 16.0, 17.0, 16.0];
/// let dates = [
///     "2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04",
///     "2024-01-05", "2024-01-06", "2024-01-07", "2024-01-08",
/// ];
/// let outcome = auto_forecast(&values, &dates, 3);
/// assert_eq!(outcome.forecast.len(), 3);
/// assert_eq!(outcome.fitted.len(), values.len());
/// ```
pub fn auto_forecast<S: AsRef<str>>(
    values: &[f64],
    timestamps: &[S],
    horizon: usize,
) -> ForecastOutcome {
    AutoForecaster::new().forecast(values, timestamps, horizon)
}
