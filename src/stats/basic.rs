//! Basic sample statistics.

/// Returns the arithmetic mean, or NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the sample variance (n-1 denominator), or NaN below 2 values.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Returns the sample standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Returns the minimum value, or NaN for an empty slice.
pub fn minimum(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Returns the maximum value, or NaN for an empty slice.
pub fn maximum(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Returns the value at the given quantile using linear interpolation
/// between ranked data points (the "linear" method of numpy/pandas).
///
/// The interpolation position is `q * (n - 1)`, so `quantile(v, 0.25)` on
/// seven sorted values interpolates between ranks 1 and 2.
///
/// # Arguments
/// * `values` - Input sample (need not be sorted)
/// * `q` - Quantile in [0, 1]; clamped if outside
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let q = q.clamp(0.0, 1.0);
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Returns the median (0.5 quantile).
pub fn median(values: &[f64]) -> f64 {
    quantile(values, 0.5)
}

/// Summary statistics for a sample, the row set of the HTML summary
/// table: five-number summary plus spread and Tukey outlier counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub n: usize,
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub std_dev: f64,
    /// Percentage of values v with q1 <= v <= q3 (inclusive).
    pub pct_within_iqr: f64,
    /// Values outside [q1 - k*iqr, q3 + k*iqr] under Tukey's rule.
    pub outlier_count: usize,
}

impl SummaryStats {
    /// Compute summary statistics with the given Tukey IQR multiplier
    /// (1.5 is the conventional choice).
    pub fn from_values(values: &[f64], iqr_multiplier: f64) -> Self {
        let q1 = quantile(values, 0.25);
        let q3 = quantile(values, 0.75);
        let iqr = q3 - q1;
        let lower = q1 - iqr_multiplier * iqr;
        let upper = q3 + iqr_multiplier * iqr;

        let n = values.len();
        let within_iqr = values.iter().filter(|&&v| v >= q1 && v <= q3).count();
        let outlier_count = values.iter().filter(|&&v| v < lower || v > upper).count();

        Self {
            n,
            mean: mean(values),
            min: minimum(values),
            q1,
            median: median(values),
            q3,
            max: maximum(values),
            std_dev: std_dev(values),
            pct_within_iqr: if n == 0 {
                0.0
            } else {
                100.0 * within_iqr as f64 / n as f64
            },
            outlier_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_and_variance() {
        let v = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(mean(&v), 3.0);
        assert_relative_eq!(variance(&v), 2.5);
        assert_relative_eq!(std_dev(&v), 2.5_f64.sqrt());
    }

    #[test]
    fn empty_slices_yield_nan() {
        assert!(mean(&[]).is_nan());
        assert!(variance(&[1.0]).is_nan());
        assert!(minimum(&[]).is_nan());
        assert!(maximum(&[]).is_nan());
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn quantile_linear_interpolation() {
        // Worked example: n = 7, q1 position = 1.5, q3 position = 4.5.
        let v = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 100.0];
        assert_relative_eq!(quantile(&v, 0.25), 2.0);
        assert_relative_eq!(quantile(&v, 0.75), 3.0);

        // Interpolation between distinct ranks.
        let v = vec![1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile(&v, 0.25), 1.75);
        assert_relative_eq!(quantile(&v, 0.5), 2.5);
    }

    #[test]
    fn quantile_single_value() {
        assert_relative_eq!(quantile(&[42.0], 0.25), 42.0);
        assert_relative_eq!(quantile(&[42.0], 0.75), 42.0);
    }

    #[test]
    fn quantile_clamps_out_of_range() {
        let v = vec![1.0, 2.0, 3.0];
        assert_relative_eq!(quantile(&v, -0.5), 1.0);
        assert_relative_eq!(quantile(&v, 1.5), 3.0);
    }

    #[test]
    fn summary_stats_counts_outliers() {
        let v = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 100.0];
        let s = SummaryStats::from_values(&v, 1.5);
        assert_eq!(s.n, 7);
        assert_relative_eq!(s.q1, 2.0);
        assert_relative_eq!(s.q3, 3.0);
        assert_eq!(s.outlier_count, 1);
        // 2, 2, 3, 3, 3 fall inside [q1, q3].
        assert_relative_eq!(s.pct_within_iqr, 100.0 * 5.0 / 7.0);
    }
}
