//! Box-Cox power transformation with maximum-likelihood lambda fitting.

use crate::error::{EdaError, Result};

/// Result of a fitted Box-Cox transformation.
#[derive(Debug, Clone)]
pub struct BoxCoxFit {
    /// Transformed data.
    pub data: Vec<f64>,
    /// Fitted lambda parameter.
    pub lambda: f64,
}

/// Apply the Box-Cox transformation with a given lambda.
///
/// For lambda != 0: `y = (x^lambda - 1) / lambda`; for lambda == 0:
/// `y = ln(x)`. Non-positive inputs map to NaN rather than panicking;
/// callers are expected to restrict to the strictly-positive subsequence
/// first.
pub fn boxcox(series: &[f64], lambda: f64) -> Vec<f64> {
    series
        .iter()
        .map(|&x| {
            if x <= 0.0 {
                f64::NAN
            } else if lambda.abs() < 1e-10 {
                x.ln()
            } else {
                (x.powf(lambda) - 1.0) / lambda
            }
        })
        .collect()
}

/// Fit the lambda that maximizes the likelihood of Normality and apply
/// the transform with it.
///
/// Errors with a domain error when the input is empty, contains
/// non-positive values, or is degenerate (all equal), in which case no
/// lambda improves the likelihood.
pub fn boxcox_fit(series: &[f64]) -> Result<BoxCoxFit> {
    let lambda = boxcox_lambda(series)?;
    let data = boxcox(series, lambda);
    Ok(BoxCoxFit { data, lambda })
}

/// Find the optimal Box-Cox lambda by maximum likelihood.
///
/// Coarse grid search over [-2, 2] followed by a finer search around the
/// best coarse value.
pub fn boxcox_lambda(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(EdaError::Domain(
            "Box-Cox fit needs a non-empty positive sample".into(),
        ));
    }
    if series.iter().any(|&x| x <= 0.0) {
        return Err(EdaError::Domain(
            "Box-Cox transform is undefined for non-positive values".into(),
        ));
    }

    let mut best_lambda = f64::NAN;
    let mut best_llf = f64::NEG_INFINITY;

    for i in -200..=200 {
        let lambda = i as f64 / 100.0;
        let llf = boxcox_llf(series, lambda);
        if llf > best_llf {
            best_llf = llf;
            best_lambda = lambda;
        }
    }

    if !best_llf.is_finite() {
        return Err(EdaError::Domain(
            "Box-Cox fit did not converge (degenerate sample)".into(),
        ));
    }

    // Refine with a finer search around the coarse optimum.
    let start = (best_lambda - 0.1).max(-2.0);
    let end = (best_lambda + 0.1).min(2.0);
    for i in 0..=100 {
        let lambda = start + (end - start) * i as f64 / 100.0;
        let llf = boxcox_llf(series, lambda);
        if llf > best_llf {
            best_llf = llf;
            best_lambda = lambda;
        }
    }

    Ok(best_lambda)
}

/// Log-likelihood of the transformed data being Normal, up to constants:
/// `-n/2 * ln(variance) + (lambda - 1) * sum(ln(x))`.
fn boxcox_llf(series: &[f64], lambda: f64) -> f64 {
    let n = series.len();
    if n < 2 {
        return f64::NEG_INFINITY;
    }

    let transformed = boxcox(series, lambda);
    if transformed.iter().any(|x| !x.is_finite()) {
        return f64::NEG_INFINITY;
    }

    let mean = transformed.iter().sum::<f64>() / n as f64;
    let variance = transformed.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    if variance <= 0.0 {
        return f64::NEG_INFINITY;
    }

    let log_sum: f64 = series.iter().map(|x| x.ln()).sum();

    -0.5 * n as f64 * variance.ln() + (lambda - 1.0) * log_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn boxcox_lambda_1_shifts_by_one() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = boxcox(&series, 1.0);
        for (i, &x) in series.iter().enumerate() {
            assert_relative_eq!(result[i], x - 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn boxcox_lambda_0_is_log() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = boxcox(&series, 0.0);
        for (i, &x) in series.iter().enumerate() {
            assert_relative_eq!(result[i], x.ln(), epsilon = 1e-10);
        }
    }

    #[test]
    fn boxcox_lambda_2() {
        let series = vec![1.0, 2.0, 3.0];
        let result = boxcox(&series, 2.0);
        assert_relative_eq!(result[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(result[1], 1.5, epsilon = 1e-10);
        assert_relative_eq!(result[2], 4.0, epsilon = 1e-10);
    }

    #[test]
    fn non_positive_values_map_to_nan() {
        let result = boxcox(&[-1.0, 0.0, 1.0], 1.0);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!(!result[2].is_nan());
    }

    #[test]
    fn fitted_lambda_is_in_range() {
        let series: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let lambda = boxcox_lambda(&series).unwrap();
        assert!((-2.0..=2.0).contains(&lambda));
    }

    #[test]
    fn exponential_data_fits_lambda_near_zero() {
        let series: Vec<f64> = (1..=10).map(|i| (i as f64).exp()).collect();
        let lambda = boxcox_lambda(&series).unwrap();
        assert!(
            lambda.abs() < 0.5,
            "expected lambda near 0 for exponential data, got {lambda}"
        );
    }

    #[test]
    fn degenerate_sample_fails_to_fit() {
        let err = boxcox_fit(&[5.0; 8]).unwrap_err();
        assert!(err.to_string().contains("did not converge"));
    }

    #[test]
    fn empty_and_non_positive_inputs_fail() {
        assert!(boxcox_fit(&[]).is_err());
        assert!(boxcox_fit(&[1.0, -2.0, 3.0]).is_err());
    }

    #[test]
    fn fit_applies_the_fitted_lambda() {
        let series = vec![1.0, 4.0, 9.0, 16.0, 25.0];
        let fit = boxcox_fit(&series).unwrap();
        let reapplied = boxcox(&series, fit.lambda);
        assert_eq!(fit.data, reapplied);
    }
}
