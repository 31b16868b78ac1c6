//! Additive Holt-Winters smoothing model.
//!
//! Also known as triple exponential smoothing, this model handles
//! data with both trend and additive seasonality.

use crate::core::{Coefficients, Method, SmoothingResult};
use crate::models::exponential::HoltLinear;
use crate::models::Smoother;
use crate::utils::stats::mean;

/// Additive Holt-Winters smoother.
///
/// The model equations, with `m` the season length and `s` the seasonal
/// index at position `t mod m`:
/// - Level: `l_t = α(y_t - s_{t-m}) + (1-α)(l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// - Seasonal: `s_t = γ(y_t - l_t) + (1-γ)s_{t-m}`
/// - Fitted: `ŷ_t = l_t + b_t + s_t`
/// - Forecast: `ŷ_{n+h} = l_n + h*b_n + s_{(n+h-1) mod m}`
///
/// Series with fewer than `m + 2` observations (or `m == 0`) cannot seed a
/// seasonal cycle plus a trend and are smoothed by [`HoltLinear`] with the
/// same `alpha` and `beta` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltWintersAdditive {
    /// Level smoothing parameter (0 < alpha < 1).
    alpha: f64,
    /// Trend smoothing parameter (0 < beta < 1).
    beta: f64,
    /// Seasonal smoothing parameter (0 < gamma < 1).
    gamma: f64,
    /// Seasonal period.
    season_length: usize,
}

impl HoltWintersAdditive {
    /// Create a new additive Holt-Winters model with fixed parameters.
    pub fn new(alpha: f64, beta: f64, gamma: f64, season_length: usize) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            season_length,
        }
    }

    /// Get the smoothing parameters.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Get the seasonal period.
    pub fn season_length(&self) -> usize {
        self.season_length
    }

    /// Minimum series length needed for the seasonal recurrence.
    pub fn min_observations(&self) -> usize {
        self.season_length.saturating_add(2)
    }

    /// Initial seasonal indices from the complete seasons in `values`.
    ///
    /// Index `i` is the average deviation of offset `i` from its season's
    /// mean. Offsets with no data stay at 0.
    fn initial_seasonals(values: &[f64], period: usize) -> Vec<f64> {
        let season_means: Vec<f64> = values.chunks_exact(period).map(mean).collect();

        (0..period)
            .map(|i| {
                let (sum, count) = season_means
                    .iter()
                    .enumerate()
                    .filter_map(|(s, avg)| values.get(s * period + i).map(|y| y - avg))
                    .fold((0.0, 0usize), |(sum, count), d| (sum + d, count + 1));
                if count > 0 {
                    sum / count as f64
                } else {
                    0.0
                }
            })
            .collect()
    }
}

impl Smoother for HoltWintersAdditive {
    fn fit(&self, series: &[f64], horizon: usize) -> SmoothingResult {
        let m = self.season_length;
        let n = series.len();
        if m == 0 || n < self.min_observations() {
            tracing::trace!(
                len = n,
                season_length = m,
                "too few observations for a seasonal cycle, using trend model"
            );
            return HoltLinear::new(self.alpha, self.beta).fit(series, horizon);
        }

        let (alpha, beta, gamma) = (self.alpha, self.beta, self.gamma);
        let mut seasonals = Self::initial_seasonals(series, m);
        let mut level = series[0] - seasonals[0];
        let mut trend = (series[m] - series[0]) / m as f64;

        let mut fitted = Vec::with_capacity(n);
        let mut residuals = Vec::with_capacity(n);

        for (t, &y) in series.iter().enumerate() {
            let idx = t % m;
            let prev_level = level;
            let prev_season = seasonals[idx];

            level = alpha * (y - prev_season) + (1.0 - alpha) * (prev_level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
            seasonals[idx] = gamma * (y - level) + (1.0 - gamma) * prev_season;

            let f = level + trend + seasonals[idx];
            fitted.push(f);
            residuals.push(y - f);
        }

        let forecast = (1..=horizon)
            .map(|h| level + h as f64 * trend + seasonals[(n + h - 1) % m])
            .collect();

        SmoothingResult::new(fitted, forecast, residuals)
    }

    fn method(&self) -> Method {
        Method::HoltWintersAdditive
    }

    fn coefficients(&self) -> Coefficients {
        Coefficients::seasonal(self.alpha, self.beta, self.gamma, self.season_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_slice_eq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn initial_seasonals_average_deviation_from_season_mean() {
        let seasonals = HoltWintersAdditive::initial_seasonals(&[1.0, 3.0, 2.0, 4.0], 2);
        assert_slice_eq(&seasonals, &[-1.0, 1.0]);

        // Trailing partial season is ignored.
        let seasonals =
            HoltWintersAdditive::initial_seasonals(&[1.0, 3.0, 2.0, 4.0, 100.0], 2);
        assert_slice_eq(&seasonals, &[-1.0, 1.0]);
    }

    #[test]
    fn holt_winters_matches_hand_computed_recurrence() {
        let model = HoltWintersAdditive::new(0.5, 0.5, 0.5, 2);
        let result = model.fit(&[1.0, 3.0, 2.0, 4.0], 2);

        assert_slice_eq(result.fitted(), &[1.5, 3.375, 2.21875, 4.3671875]);
        assert_slice_eq(
            result.residuals(),
            &[-0.5, -0.375, -0.21875, -0.3671875],
        );
        assert_slice_eq(result.forecast(), &[2.556640625, 4.724609375]);
    }

    #[test]
    fn holt_winters_forecast_repeats_season() {
        let pattern = [5.0, -3.0, 2.0, -4.0];
        let values: Vec<f64> = (0..48).map(|i| 100.0 + pattern[i % 4]).collect();
        let result = HoltWintersAdditive::new(0.3, 0.05, 0.2, 4).fit(&values, 8);

        assert_eq!(result.forecast().len(), 8);
        // Peaks and troughs land on the same seasonal offsets as the data.
        let f = result.forecast();
        assert!(f[0] > f[1]);
        assert!(f[2] > f[3]);
        assert!(f[4] > f[5]);
        assert_relative_eq!(f[0], f[4], epsilon = 1.0);
    }

    #[test]
    fn holt_winters_falls_back_when_too_short() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        // Needs 7 + 2 = 9 observations.
        let seasonal = HoltWintersAdditive::new(0.3, 0.1, 0.2, 7).fit(&values, 3);
        let trend = HoltLinear::new(0.3, 0.1).fit(&values, 3);
        assert_eq!(seasonal, trend);
    }

    #[test]
    fn holt_winters_zero_period_falls_back() {
        let values = [1.0, 2.0, 3.0, 5.0];
        let seasonal = HoltWintersAdditive::new(0.5, 0.2, 0.1, 0).fit(&values, 2);
        let trend = HoltLinear::new(0.5, 0.2).fit(&values, 2);
        assert_eq!(seasonal, trend);
    }

    #[test]
    fn holt_winters_huge_period_falls_back() {
        let values = [1.0, 2.0, 3.0];
        let model = HoltWintersAdditive::new(0.2, 0.1, 0.1, usize::MAX);
        assert_eq!(model.min_observations(), usize::MAX);

        let seasonal = model.fit(&values, 1);
        let trend = HoltLinear::new(0.2, 0.1).fit(&values, 1);
        assert_eq!(seasonal, trend);
    }

    #[test]
    fn holt_winters_degenerate_inputs() {
        let model = HoltWintersAdditive::new(0.2, 0.1, 0.1, 12);
        let empty = model.fit(&[], 2);
        assert!(empty.fitted().is_empty());
        assert_eq!(empty.forecast(), &[0.0, 0.0]);

        let single = model.fit(&[4.0], 1);
        assert_eq!(single.forecast(), &[4.0]);
        assert_eq!(single.residuals(), &[0.0]);
    }

    #[test]
    fn holt_winters_fitted_plus_residual_is_observed() {
        let values: Vec<f64> = (0..30)
            .map(|i| 20.0 + 0.5 * i as f64 + [3.0, 0.0, -3.0][i % 3])
            .collect();
        let result = HoltWintersAdditive::new(0.5, 0.1, 0.2, 3).fit(&values, 6);

        assert_eq!(result.fitted().len(), values.len());
        for i in 0..values.len() {
            assert_relative_eq!(
                result.fitted()[i] + result.residuals()[i],
                values[i],
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn holt_winters_reports_method_and_coefficients() {
        let model = HoltWintersAdditive::new(0.8, 0.3, 0.05, 12);
        assert_eq!(model.method(), Method::HoltWintersAdditive);
        assert_eq!(
            model.coefficients(),
            Coefficients::seasonal(0.8, 0.3, 0.05, 12)
        );
        assert_eq!(model.min_observations(), 14);
    }
}
