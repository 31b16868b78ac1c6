//! Sampling frequency classification from timestamp spacing.
//!
//! The median gap between consecutive timestamps is matched against loose
//! day-count bands, which tolerates weekends, holidays and the odd missing
//! observation.

use crate::utils::stats::median;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Open interval of median gap (in days) classified as monthly.
const MONTHLY_GAP_DAYS: (f64, f64) = (25.0, 32.0);
/// Open interval of median gap (in days) classified as weekly.
const WEEKLY_GAP_DAYS: (f64, f64) = (6.0, 8.0);
/// Open interval of median gap (in days) classified as daily.
const DAILY_GAP_DAYS: (f64, f64) = (0.9, 1.2);

/// Detected sampling frequency and its seasonal period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Daily data, weekly cycle (period 7).
    Daily,
    /// Weekly data, yearly cycle (period 52).
    Weekly,
    /// Monthly data, yearly cycle (period 12).
    Monthly,
    /// No recognizable frequency (period 0).
    Unknown,
}

impl Frequency {
    /// Seasonal period used for Holt-Winters; 0 when unknown.
    pub fn period(&self) -> usize {
        match self {
            Frequency::Daily => 7,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Unknown => 0,
        }
    }

    /// Whether a seasonal model should be tried.
    pub fn is_seasonal(&self) -> bool {
        self.period() > 0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Unknown => "unknown",
        }
    }

    /// Classify a median gap expressed in days. First matching band wins.
    pub fn from_median_gap(days: f64) -> Self {
        let within = |(lo, hi): (f64, f64)| days > lo && days < hi;
        if within(MONTHLY_GAP_DAYS) {
            Frequency::Monthly
        } else if within(WEEKLY_GAP_DAYS) {
            Frequency::Weekly
        } else if within(DAILY_GAP_DAYS) {
            Frequency::Daily
        } else {
            Frequency::Unknown
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with offset, naive date-times (`T` or space separated,
/// optional fractional seconds) and plain dates. Naive values are read as
/// UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Classify the frequency of ISO-8601 timestamp strings.
///
/// Fewer than three timestamps yields [`Frequency::Unknown`]. Unparseable
/// entries are removed before gaps are computed, so the gap across a bad
/// entry still counts: `["2024-01-01", "bad", "2024-02-01", "2024-02-02"]`
/// has gaps of 31 and 1 days and classifies as unknown. Callers are
/// expected to drop bad rows beforehand.
///
/// # Example
/// ```
/// use smoothcast::detection::{detect_frequency, Frequency};
///
/// let dates = ["2024-01-01", "2024-01-02", "2024-01-03"];
/// assert_eq!(detect_frequency(&dates), Frequency::Daily);
/// ```
pub fn detect_frequency<S: AsRef<str>>(timestamps: &[S]) -> Frequency {
    if timestamps.len() < 3 {
        return Frequency::Unknown;
    }
    let instants: Vec<DateTime<Utc>> = timestamps
        .iter()
        .filter_map(|t| parse_timestamp(t.as_ref()))
        .collect();
    classify(instants)
}

/// Classify the frequency of already-parsed instants.
pub fn detect_frequency_instants(instants: &[DateTime<Utc>]) -> Frequency {
    if instants.len() < 3 {
        return Frequency::Unknown;
    }
    classify(instants.to_vec())
}

fn classify(mut instants: Vec<DateTime<Utc>>) -> Frequency {
    instants.sort();

    let gaps: Vec<f64> = instants
        .windows(2)
        .map(|w| (w[1] - w[0]).num_milliseconds() as f64 / MILLIS_PER_DAY)
        .filter(|gap| gap.is_finite())
        .collect();

    if gaps.is_empty() {
        tracing::debug!("no usable timestamp gaps, frequency unknown");
        return Frequency::Unknown;
    }

    let median_gap = median(&gaps);
    let frequency = Frequency::from_median_gap(median_gap);
    tracing::debug!(
        median_gap_days = median_gap,
        frequency = frequency.as_str(),
        period = frequency.period(),
        "classified series frequency"
    );
    frequency
}
