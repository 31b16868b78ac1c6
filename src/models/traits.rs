//! Smoother trait defining the common interface for the smoothing models.

use crate::core::{Coefficients, Method, SmoothingResult};

/// A stateless smoothing model with fixed coefficients.
///
/// Each call to [`fit`](Smoother::fit) runs the full recurrence over the
/// series and returns fresh fitted values, forecast and residuals. Nothing
/// is retained between calls, so a single instance can be shared freely.
///
/// # Example
///
/// ```
/// use smoothcast::models::{HoltLinear, Smoother};
///
/// let model = HoltLinear::new(0.5, 0.1);
/// let result = model.fit(&[1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(result.forecast().len(), 2);
/// assert_eq!(model.method().as_str(), "holt_linear");
/// ```
pub trait Smoother {
    /// Fit the model to `series` and forecast `horizon` steps ahead.
    fn fit(&self, series: &[f64], horizon: usize) -> SmoothingResult;

    /// Method tag reported for this model.
    fn method(&self) -> Method;

    /// Coefficients this model was built with.
    fn coefficients(&self) -> Coefficients;
}
