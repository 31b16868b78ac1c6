//! Series data structure pairing observations with their timestamps.

use crate::detection::{detect_frequency, Frequency};
use crate::error::{ForecastError, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// An ordered sequence of observations, index-aligned with ISO-8601
/// timestamps.
///
/// Timestamps are kept as strings; they are only used to infer the
/// sampling frequency. Ordering is the caller's responsibility and is not
/// checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    values: Vec<f64>,
    timestamps: Vec<String>,
}

impl Series {
    /// Create a series, checking that values and timestamps line up.
    pub fn new(values: Vec<f64>, timestamps: Vec<String>) -> Result<Self> {
        if values.len() != timestamps.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        Ok(Self { values, timestamps })
    }

    /// Create a series from parsed instants.
    pub fn from_instants(values: Vec<f64>, instants: &[DateTime<Utc>]) -> Result<Self> {
        let timestamps = instants
            .iter()
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .collect();
        Self::new(values, timestamps)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn timestamps(&self) -> &[String] {
        &self.timestamps
    }

    /// Classify the sampling frequency from the timestamps.
    pub fn frequency(&self) -> Frequency {
        detect_frequency(&self.timestamps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn rejects_length_mismatch() {
        let err = Series::new(vec![1.0, 2.0], vec!["2024-01-01".to_string()]).unwrap_err();
        assert_eq!(
            err,
            ForecastError::DimensionMismatch {
                expected: 1,
                got: 2,
            }
        );
    }

    #[test]
    fn empty_series_is_valid() {
        let series = Series::new(vec![], vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.frequency(), Frequency::Unknown);
    }

    #[test]
    fn from_instants_formats_rfc3339() {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let instants: Vec<_> = (0..4).map(|i| base + Duration::weeks(i)).collect();
        let series = Series::from_instants(vec![1.0, 2.0, 3.0, 4.0], &instants).unwrap();

        assert_eq!(series.len(), 4);
        assert_eq!(series.timestamps()[0], "2024-03-01T00:00:00Z");
        assert_eq!(series.frequency(), Frequency::Weekly);
    }
}
