//! Tukey IQR outlier bounds and sequence partitioning.

use crate::core::YearSeries;
use crate::stats::basic::quantile;

/// Conventional Tukey multiplier.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Quartile-based outlier bounds for a sample.
///
/// Quartiles use linear interpolation between ranked data points; bounds
/// are `q1 - k*iqr` and `q3 + k*iqr` for multiplier `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl OutlierBounds {
    /// Compute bounds from a sample with the given multiplier.
    pub fn from_values(values: &[f64], multiplier: f64) -> Self {
        let q1 = quantile(values, 0.25);
        let q3 = quantile(values, 0.75);
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        }
    }

    /// Whether a value lies within the bounds, inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Result of partitioning a sample into kept and removed values.
///
/// `kept` and `removed` together hold every input value exactly once,
/// each in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierPartition {
    pub bounds: OutlierBounds,
    pub kept: Vec<f64>,
    pub removed: Vec<f64>,
}

impl OutlierPartition {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Percentage of input values flagged as outliers.
    pub fn removed_percentage(&self) -> f64 {
        let total = self.kept.len() + self.removed.len();
        if total == 0 {
            0.0
        } else {
            100.0 * self.removed.len() as f64 / total as f64
        }
    }
}

/// Partition a sample by Tukey bounds.
///
/// No error conditions: a single-value sample collapses to
/// `q1 = q3 = value`, `iqr = 0`, so the value is trivially kept.
///
/// ```
/// use normcheck::outlier::partition;
///
/// let p = partition(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 100.0], 1.5);
/// assert_eq!(p.bounds.lower, 0.5);
/// assert_eq!(p.bounds.upper, 4.5);
/// assert_eq!(p.removed, vec![100.0]);
/// ```
pub fn partition(values: &[f64], multiplier: f64) -> OutlierPartition {
    let bounds = OutlierBounds::from_values(values, multiplier);
    let (kept, removed) = values.iter().copied().partition(|&v| bounds.contains(v));
    OutlierPartition {
        bounds,
        kept,
        removed,
    }
}

/// Row-wise partition of a year series by Tukey bounds on its values.
#[derive(Debug, Clone)]
pub struct SeriesPartition {
    pub bounds: OutlierBounds,
    pub kept: YearSeries,
    pub removed: YearSeries,
}

/// Partition a [`YearSeries`] into kept and removed observations.
pub fn partition_series(series: &YearSeries, multiplier: f64) -> SeriesPartition {
    let bounds = OutlierBounds::from_values(series.values(), multiplier);
    SeriesPartition {
        bounds,
        kept: series.retain_values(|v| bounds.contains(v)),
        removed: series.retain_values(|v| !bounds.contains(v)),
    }
}
