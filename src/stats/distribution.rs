//! Distribution shape metrics: skewness, kurtosis, mode count.

use crate::error::Result;
use crate::stats::basic::{mean, std_dev};
use crate::stats::density::{mode_count, KdeConfig};

/// Shape diagnostics for a numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeMetrics {
    /// Bias-corrected sample skewness (0 = symmetric).
    pub skew: f64,
    /// Bias-corrected kurtosis on the Normal ~= 3 convention.
    pub kurtosis: f64,
    /// KDE-based estimate of the number of modes (heuristic).
    pub mode_count: usize,
}

impl ShapeMetrics {
    /// Distance-from-Normal score: `|skew| + |kurtosis - 3|`.
    ///
    /// Lower is closer to Normal; 0 only for an exactly Normal-shaped
    /// sample.
    pub fn normality_score(&self) -> f64 {
        self.skew.abs() + (self.kurtosis - 3.0).abs()
    }
}

/// Returns the bias-corrected sample skewness (third standardized
/// moment, adjusted Fisher-Pearson coefficient).
///
/// Defined as 0 when the sample standard deviation is 0, so a constant
/// sequence never divides by zero. Returns NaN below 3 values, where the
/// bias correction is undefined.
///
/// ```
/// use normcheck::stats::distribution::skewness;
/// // A perfectly symmetric sample has zero skew.
/// assert!(skewness(&[-2.0, -1.0, 0.0, 1.0, 2.0]).abs() < 1e-12);
/// ```
pub fn skewness(series: &[f64]) -> f64 {
    if series.len() < 3 {
        return f64::NAN;
    }
    let n = series.len() as f64;
    let m = mean(series);
    let s = std_dev(series);

    if s < 1e-10 {
        return 0.0;
    }

    let sum_cubed: f64 = series.iter().map(|x| ((x - m) / s).powi(3)).sum();

    (n / ((n - 1.0) * (n - 2.0))) * sum_cubed
}

/// Returns the bias-corrected kurtosis on the convention where a Normal
/// distribution scores ~= 3 (i.e. not excess kurtosis).
///
/// Defined as 0 for zero-variance input (a documented implementation
/// choice; it never panics). Returns NaN below 4 values, where the bias
/// correction is undefined.
///
/// ```
/// use normcheck::stats::distribution::kurtosis;
/// // Evenly spaced symmetric sample: platykurtic, exactly 1.8.
/// let k = kurtosis(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
/// assert!((k - 1.8).abs() < 1e-12);
/// ```
pub fn kurtosis(series: &[f64]) -> f64 {
    if series.len() < 4 {
        return f64::NAN;
    }
    let n = series.len() as f64;
    let m = mean(series);
    let s = std_dev(series);

    if s < 1e-10 {
        return 0.0;
    }

    let sum_fourth: f64 = series.iter().map(|x| ((x - m) / s).powi(4)).sum();

    let excess = (n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0))) * sum_fourth
        - (3.0 * (n - 1.0).powi(2)) / ((n - 2.0) * (n - 3.0));
    excess + 3.0
}

/// Compute the full shape-metric record for a sequence: skewness,
/// kurtosis, and the KDE mode count.
///
/// Errors with a domain error when the sequence has fewer than 2
/// distinct values (density estimation undefined).
pub fn shape_metrics(series: &[f64], kde: &KdeConfig) -> Result<ShapeMetrics> {
    let modes = mode_count(series, kde)?;
    Ok(ShapeMetrics {
        skew: skewness(series),
        kurtosis: kurtosis(series),
        mode_count: modes,
    })
}
