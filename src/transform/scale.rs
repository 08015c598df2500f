//! Z-score standardization.

/// Result of a scaling transform, keeping the parameters needed to map
/// back to the original scale.
#[derive(Debug, Clone)]
pub struct ScaleResult {
    /// Transformed data (mean 0, sd 1 for a non-degenerate sample).
    pub data: Vec<f64>,
    /// Center (sample mean) removed from each value.
    pub center: f64,
    /// Scale (sample standard deviation) divided out; 1.0 when the
    /// sample is degenerate.
    pub scale: f64,
}

impl ScaleResult {
    /// Inverse transform back to the original scale.
    pub fn inverse(&self) -> Vec<f64> {
        self.data
            .iter()
            .map(|&z| z * self.scale + self.center)
            .collect()
    }
}

/// Standardize data to zero mean and unit variance (z-scores), using the
/// sample standard deviation (n-1 denominator).
///
/// Standardizing rescales and recenters but does not change shape, so
/// skewness and kurtosis are unaffected. A zero-variance sample is
/// returned centered but unscaled (scale = 1) rather than dividing by
/// zero.
pub fn standardize(series: &[f64]) -> ScaleResult {
    if series.is_empty() {
        return ScaleResult {
            data: Vec::new(),
            center: 0.0,
            scale: 1.0,
        };
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = if series.len() > 1 {
        series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };
    let std = variance.sqrt();

    let scale = if std < 1e-10 { 1.0 } else { std };
    let data = series.iter().map(|&x| (x - mean) / scale).collect();

    ScaleResult {
        data,
        center: mean,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::stats::basic::{mean, std_dev};
    use crate::stats::distribution::{kurtosis, skewness};

    #[test]
    fn standardized_data_has_zero_mean_unit_sd() {
        let series = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = standardize(&series);
        assert_relative_eq!(mean(&result.data), 0.0, epsilon = 1e-12);
        assert_relative_eq!(std_dev(&result.data), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_recovers_original() {
        let series = vec![1.5, 2.5, 10.0, -3.0];
        let result = standardize(&series);
        let recovered = result.inverse();
        for (orig, rec) in series.iter().zip(recovered.iter()) {
            assert_relative_eq!(orig, rec, epsilon = 1e-10);
        }
    }

    #[test]
    fn standardizing_preserves_shape() {
        let series = vec![1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0];
        let result = standardize(&series);
        assert_relative_eq!(
            skewness(&series),
            skewness(&result.data),
            epsilon = 1e-10
        );
        assert_relative_eq!(
            kurtosis(&series),
            kurtosis(&result.data),
            epsilon = 1e-10
        );
    }

    #[test]
    fn constant_sample_is_centered_not_scaled() {
        let series = vec![5.0; 4];
        let result = standardize(&series);
        assert_eq!(result.data, vec![0.0; 4]);
        assert_relative_eq!(result.scale, 1.0);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let result = standardize(&[]);
        assert!(result.data.is_empty());
    }
}
