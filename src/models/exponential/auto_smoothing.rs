//! Automatic smoothing model selection.
//!
//! AutoSmoothing runs an exhaustive grid search over Holt-Winters and Holt
//! coefficients and keeps the candidate with the lowest in-sample sum of
//! squared residuals.

use crate::core::{Coefficients, ForecastOutcome, Method, SmoothingResult};
use crate::detection::Frequency;
use crate::error::{ForecastError, Result};
use crate::models::exponential::{HoltLinear, HoltWintersAdditive};
use crate::models::Smoother;
use crate::utils::metrics::sse;
use std::time::{Duration, Instant};

/// Default level smoothing grid.
pub const ALPHA_GRID: [f64; 5] = [0.1, 0.2, 0.3, 0.5, 0.8];
/// Default trend smoothing grid.
pub const BETA_GRID: [f64; 4] = [0.05, 0.1, 0.2, 0.3];
/// Default seasonal smoothing grid.
pub const GAMMA_GRID: [f64; 3] = [0.05, 0.1, 0.2];

/// Configuration for AutoSmoothing.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoSmoothingConfig {
    /// Level smoothing values to try.
    pub alpha_grid: Vec<f64>,
    /// Trend smoothing values to try.
    pub beta_grid: Vec<f64>,
    /// Seasonal smoothing values to try.
    pub gamma_grid: Vec<f64>,
    /// Alpha of the trend model used when no candidate was evaluated.
    pub fallback_alpha: f64,
    /// Beta of the trend model used when no candidate was evaluated.
    pub fallback_beta: f64,
    /// Stop the sequential search once this much time has elapsed.
    pub deadline: Option<Duration>,
    /// Evaluate candidates on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for AutoSmoothingConfig {
    fn default() -> Self {
        Self {
            alpha_grid: ALPHA_GRID.to_vec(),
            beta_grid: BETA_GRID.to_vec(),
            gamma_grid: GAMMA_GRID.to_vec(),
            fallback_alpha: 0.2,
            fallback_beta: 0.1,
            deadline: None,
            parallel: false,
        }
    }
}

impl AutoSmoothingConfig {
    /// Replace the alpha grid.
    pub fn with_alpha_grid(mut self, grid: Vec<f64>) -> Self {
        self.alpha_grid = grid;
        self
    }

    /// Replace the beta grid.
    pub fn with_beta_grid(mut self, grid: Vec<f64>) -> Self {
        self.beta_grid = grid;
        self
    }

    /// Replace the gamma grid.
    pub fn with_gamma_grid(mut self, grid: Vec<f64>) -> Self {
        self.gamma_grid = grid;
        self
    }

    /// Bound the wall-clock time of the search.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Evaluate candidates in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that every coefficient lies in the open interval (0, 1).
    ///
    /// Empty grids are accepted; they leave the search without candidates
    /// and the fallback trend model is used.
    pub fn validate(&self) -> Result<()> {
        let grids = [
            ("alpha", self.alpha_grid.as_slice()),
            ("beta", self.beta_grid.as_slice()),
            ("gamma", self.gamma_grid.as_slice()),
            ("fallback alpha", std::slice::from_ref(&self.fallback_alpha)),
            ("fallback beta", std::slice::from_ref(&self.fallback_beta)),
        ];
        for (name, values) in grids {
            if let Some(v) = values.iter().find(|v| !(**v > 0.0 && **v < 1.0)) {
                return Err(ForecastError::InvalidParameter(format!(
                    "{name} must be in (0, 1), got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// One grid point: a smoothing model with fixed coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CandidateModel {
    Seasonal(HoltWintersAdditive),
    Trend(HoltLinear),
}

impl Smoother for CandidateModel {
    fn fit(&self, series: &[f64], horizon: usize) -> SmoothingResult {
        match self {
            CandidateModel::Seasonal(m) => m.fit(series, horizon),
            CandidateModel::Trend(m) => m.fit(series, horizon),
        }
    }

    fn method(&self) -> Method {
        match self {
            CandidateModel::Seasonal(m) => m.method(),
            CandidateModel::Trend(m) => m.method(),
        }
    }

    fn coefficients(&self) -> Coefficients {
        match self {
            CandidateModel::Seasonal(m) => m.coefficients(),
            CandidateModel::Trend(m) => m.coefficients(),
        }
    }
}

/// An evaluated grid point and its in-sample score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub method: Method,
    pub coefficients: Coefficients,
    pub result: SmoothingResult,
    /// Sum of squared residuals over the observed series.
    pub sse: f64,
}

impl Candidate {
    /// Fit `model` to `series` and score it.
    pub fn evaluate<S: Smoother + ?Sized>(model: &S, series: &[f64], horizon: usize) -> Self {
        let result = model.fit(series, horizon);
        let sse = sse(series, result.fitted());
        Self {
            method: model.method(),
            coefficients: model.coefficients(),
            result,
            sse,
        }
    }

    /// Drop the score and expose the externally visible result.
    pub fn into_outcome(self, horizon: usize) -> ForecastOutcome {
        ForecastOutcome::new(self.method, horizon, self.coefficients, self.result)
    }
}

/// Outcome of a grid search.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Lowest-scoring candidate.
    pub best: Candidate,
    /// Number of Holt-Winters grid points evaluated.
    pub seasonal_evaluated: usize,
    /// Number of Holt grid points evaluated.
    pub trend_evaluated: usize,
    /// The deadline stopped the search before the grid was exhausted.
    pub truncated: bool,
    /// No grid point was evaluated and the fallback trend model was used.
    pub used_fallback: bool,
}

impl Selection {
    /// Total number of grid points evaluated.
    pub fn evaluated(&self) -> usize {
        self.seasonal_evaluated + self.trend_evaluated
    }
}

/// Automatic smoothing model selection.
///
/// Candidates are enumerated in a fixed order: Holt-Winters first (alpha
/// outer, beta middle, gamma inner), then Holt (alpha outer, beta inner).
/// A candidate replaces the running best only when its SSE is strictly
/// lower, so ties go to the earlier grid point.
///
/// # Example
///
/// ```
/// use smoothcast::detection::Frequency;
/// use smoothcast::models::exponential::AutoSmoothing;
///
/// let values: Vec<f64> = (0..21).map(|i| 10.0 + (i % 7) as f64).collect();
/// let selection = AutoSmoothing::new().select(&values, Frequency::Daily, 7);
/// assert_eq!(selection.seasonal_evaluated, 60);
/// assert_eq!(selection.trend_evaluated, 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutoSmoothing {
    config: AutoSmoothingConfig,
}

impl AutoSmoothing {
    /// Create a new AutoSmoothing with the default grids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new AutoSmoothing with custom configuration.
    pub fn with_config(config: AutoSmoothingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AutoSmoothingConfig {
        &self.config
    }

    /// Grid points in canonical evaluation order.
    ///
    /// The seasonal block is only generated when `period > 0`.
    pub fn candidate_models(&self, period: usize) -> Vec<CandidateModel> {
        let cfg = &self.config;
        let mut models = Vec::new();

        if period > 0 {
            for &alpha in &cfg.alpha_grid {
                for &beta in &cfg.beta_grid {
                    for &gamma in &cfg.gamma_grid {
                        models.push(CandidateModel::Seasonal(HoltWintersAdditive::new(
                            alpha, beta, gamma, period,
                        )));
                    }
                }
            }
        }

        for &alpha in &cfg.alpha_grid {
            for &beta in &cfg.beta_grid {
                models.push(CandidateModel::Trend(HoltLinear::new(alpha, beta)));
            }
        }

        models
    }

    /// Search the grids for `series` sampled at `frequency`.
    pub fn select(&self, series: &[f64], frequency: Frequency, horizon: usize) -> Selection {
        let models = self.candidate_models(frequency.period());
        let mut search = Search::default();

        if self.config.parallel && cfg!(feature = "parallel") {
            for (model, candidate) in models.iter().zip(evaluate_all(&models, series, horizon)) {
                search.consider(model, candidate);
            }
        } else {
            let started = Instant::now();
            for model in &models {
                if let Some(deadline) = self.config.deadline {
                    if started.elapsed() >= deadline {
                        tracing::warn!(
                            evaluated = search.evaluated(),
                            total = models.len(),
                            deadline_ms = deadline.as_millis() as u64,
                            "grid search deadline reached, keeping best so far"
                        );
                        search.truncated = true;
                        break;
                    }
                }
                search.consider(model, Candidate::evaluate(model, series, horizon));
            }
        }

        self.finish(search, series, horizon)
    }

    fn finish(&self, search: Search, series: &[f64], horizon: usize) -> Selection {
        let Search {
            best,
            seasonal_evaluated,
            trend_evaluated,
            truncated,
        } = search;

        let (best, used_fallback) = match best {
            Some(best) => (best, false),
            None => {
                tracing::warn!(
                    alpha = self.config.fallback_alpha,
                    beta = self.config.fallback_beta,
                    "no candidate evaluated, using fallback trend model"
                );
                let model = HoltLinear::new(self.config.fallback_alpha, self.config.fallback_beta);
                (Candidate::evaluate(&model, series, horizon), true)
            }
        };

        tracing::debug!(
            method = best.method.as_str(),
            alpha = best.coefficients.alpha,
            beta = best.coefficients.beta,
            gamma = ?best.coefficients.gamma,
            season_length = ?best.coefficients.season_length,
            sse = best.sse,
            seasonal_evaluated,
            trend_evaluated,
            "selected smoothing model"
        );

        Selection {
            best,
            seasonal_evaluated,
            trend_evaluated,
            truncated,
            used_fallback,
        }
    }
}

/// Running minimum over candidates in evaluation order.
#[derive(Debug, Default)]
struct Search {
    best: Option<Candidate>,
    seasonal_evaluated: usize,
    trend_evaluated: usize,
    truncated: bool,
}

impl Search {
    fn evaluated(&self) -> usize {
        self.seasonal_evaluated + self.trend_evaluated
    }

    fn consider(&mut self, model: &CandidateModel, candidate: Candidate) {
        match model {
            CandidateModel::Seasonal(_) => self.seasonal_evaluated += 1,
            CandidateModel::Trend(_) => self.trend_evaluated += 1,
        }
        tracing::trace!(
            method = candidate.method.as_str(),
            alpha = candidate.coefficients.alpha,
            beta = candidate.coefficients.beta,
            gamma = ?candidate.coefficients.gamma,
            sse = candidate.sse,
            "evaluated candidate"
        );

        let replace = match &self.best {
            None => true,
            Some(best) => candidate.sse < best.sse,
        };
        if replace {
            self.best = Some(candidate);
        }
    }
}

/// Fit every model, returning candidates in the same order as `models`.
#[cfg(feature = "parallel")]
fn evaluate_all(models: &[CandidateModel], series: &[f64], horizon: usize) -> Vec<Candidate> {
    use rayon::prelude::*;

    models
        .par_iter()
        .map(|model| Candidate::evaluate(model, series, horizon))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(models: &[CandidateModel], series: &[f64], horizon: usize) -> Vec<Candidate> {
    models
        .iter()
        .map(|model| Candidate::evaluate(model, series, horizon))
        .collect()
}
