//! Validated request boundary for the forecasting engine.
//!
//! Decodes the `{ "datesISO", "values", "horizon" }` payload, enforces the
//! horizon range and the length agreement between dates and values, then
//! hands off to [`AutoForecaster`].

use crate::core::ForecastOutcome;
use crate::engine::AutoForecaster;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted forecast horizon.
pub const MAX_HORIZON: usize = 365;

/// A forecast request as received from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    #[serde(rename = "datesISO")]
    pub dates_iso: Vec<String>,
    pub values: Vec<f64>,
    pub horizon: usize,
}

impl ForecastRequest {
    pub fn new(dates_iso: Vec<String>, values: Vec<f64>, horizon: usize) -> Self {
        Self {
            dates_iso,
            values,
            horizon,
        }
    }

    /// Decode a JSON payload.
    ///
    /// # Example
    /// ```
    /// use smoothcast::request::ForecastRequest;
    ///
    /// let req = ForecastRequest::from_json(
    ///     r#"{"datesISO":["2024-01-01","2024-01-02"],"values":[1.0,2.0],"horizon":3}"#,
    /// ).unwrap();
    /// assert_eq!(req.horizon, 3);
    /// ```
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Check the horizon range and that dates and values line up.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HORIZON).contains(&self.horizon) {
            return Err(ForecastError::InvalidHorizon {
                horizon: self.horizon,
                max: MAX_HORIZON,
            });
        }
        if self.dates_iso.len() != self.values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.dates_iso.len(),
                got: self.values.len(),
            });
        }
        if self.dates_iso.iter().any(|d| d.is_empty()) {
            return Err(ForecastError::InvalidPayload(
                "datesISO entries must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and forecast with the default grids.
    pub fn run(&self) -> Result<ForecastOutcome> {
        self.run_with(&AutoForecaster::new())
    }

    /// Validate and forecast with a configured forecaster.
    pub fn run_with(&self, forecaster: &AutoForecaster) -> Result<ForecastOutcome> {
        self.validate()?;
        let outcome = forecaster.forecast(&self.values, &self.dates_iso, self.horizon);
        Ok(outcome)
    }
}

/// Decode, validate and forecast a JSON payload, returning the JSON result.
pub fn handle_json(payload: &str) -> Result<String> {
    let request = ForecastRequest::from_json(payload)?;
    let outcome = request.run().map_err(|err| {
        tracing::debug!(error = %err, "rejected forecast request");
        err
    })?;
    outcome.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(n: usize, horizon: usize) -> ForecastRequest {
        let dates = (1..=n).map(|d| format!("2024-01-{d:02}")).collect();
        let values = (0..n).map(|i| i as f64).collect();
        ForecastRequest::new(dates, values, horizon)
    }

    #[test]
    fn horizon_bounds_are_enforced() {
        assert_eq!(
            request(5, 0).validate(),
            Err(ForecastError::InvalidHorizon {
                horizon: 0,
                max: 365,
            })
        );
        assert!(request(5, 366).validate().is_err());
        assert!(request(5, 1).validate().is_ok());
        assert!(request(5, 365).validate().is_ok());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut req = request(5, 3);
        req.values.pop();
        assert_eq!(
            req.run(),
            Err(ForecastError::DimensionMismatch {
                expected: 5,
                got: 4,
            })
        );
    }

    #[test]
    fn empty_date_strings_are_rejected() {
        let req = ForecastRequest::new(vec![String::new()], vec![1.0], 1);
        assert!(matches!(
            req.validate(),
            Err(ForecastError::InvalidPayload(_))
        ));
    }

    #[test]
    fn malformed_payload_is_rejected() {
        assert!(matches!(
            ForecastRequest::from_json(r#"{"values":[1.0]}"#),
            Err(ForecastError::InvalidPayload(_))
        ));
        assert!(matches!(
            ForecastRequest::from_json(r#"{"datesISO":[],"values":[],"horizon":-1}"#),
            Err(ForecastError::InvalidPayload(_))
        ));
    }

    #[test]
    fn run_returns_outcome() {
        let outcome = request(20, 5).run().unwrap();
        assert_eq!(outcome.horizon, 5);
        assert_eq!(outcome.forecast.len(), 5);
        assert_eq!(outcome.fitted.len(), 20);
    }

    #[test]
    fn handle_json_round_trips_payload() {
        let payload = serde_json::to_string(&request(10, 2)).unwrap();
        assert!(payload.contains("\"datesISO\""));

        let response = handle_json(&payload).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["horizon"], 2);
        assert_eq!(value["forecast"].as_array().unwrap().len(), 2);
        assert!(value["params"]["alpha"].is_number());
    }

    #[test]
    fn handle_json_surfaces_validation_errors() {
        let payload = r#"{"datesISO":["2024-01-01"],"values":[1.0],"horizon":400}"#;
        assert!(matches!(
            handle_json(payload),
            Err(ForecastError::InvalidHorizon { horizon: 400, .. })
        ));
    }
}
