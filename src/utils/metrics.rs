//! In-sample error metrics used for model selection.

/// Sum of squared errors between observed and fitted values.
///
/// Pairs are taken index by index; extra trailing values on either side are
/// ignored.
pub fn sse(actual: &[f64], fitted: &[f64]) -> f64 {
    actual
        .iter()
        .zip(fitted.iter())
        .map(|(a, f)| {
            let e = a - f;
            e * e
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sse_sums_squared_differences() {
        let actual = [1.0, 2.0, 3.0];
        let fitted = [1.5, 2.0, 1.0];
        assert_relative_eq!(sse(&actual, &fitted), 0.25 + 0.0 + 4.0, epsilon = 1e-12);
    }

    #[test]
    fn sse_of_perfect_fit_is_zero() {
        let values = [4.0, 5.0, 6.0];
        assert_eq!(sse(&values, &values), 0.0);
        assert_eq!(sse(&[], &[]), 0.0);
    }
}
