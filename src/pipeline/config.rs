//! Pipeline configuration.

use crate::outlier::DEFAULT_IQR_MULTIPLIER;
use crate::stats::density::KdeConfig;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Order of the outlier-trim stage relative to shape-metric evaluation.
///
/// The source workflows are inconsistent about whether IQR filtering
/// runs before or after shape analysis, so the order is a pipeline
/// parameter rather than a baked-in choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageOrder {
    /// Trim outliers first, then compute shape metrics on the kept
    /// subset (the usual phase-3 sequence).
    #[default]
    OutliersFirst,
    /// Compute shape metrics on the raw values, then trim. Transforms
    /// are still evaluated on the trimmed subset.
    ShapeFirst,
}

/// Configuration for a pipeline run: explicit input/output locations and
/// every tunable the stages take, passed in at construction time.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Aggregated two-column input CSV.
    pub input: PathBuf,
    /// Transformed-output CSV location.
    pub output: PathBuf,
    /// Optional HTML summary location.
    pub report_html: Option<PathBuf>,
    /// Name of the value column in the input.
    pub value_column: String,
    /// Calendar-year range kept by the year filter.
    pub year_range: RangeInclusive<i32>,
    /// Tukey IQR multiplier.
    pub iqr_multiplier: f64,
    /// KDE tunables for mode counting.
    pub kde: KdeConfig,
    /// Outlier-trim vs shape-evaluation ordering.
    pub stage_order: StageOrder,
}

impl PipelineConfig {
    /// Configuration with the reference defaults: `aggregate_value`
    /// column, 1800-2013 year range, 1.5x IQR, 512-point Scott KDE,
    /// outliers trimmed before shape evaluation.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            report_html: None,
            value_column: "aggregate_value".to_string(),
            year_range: 1800..=2013,
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            kde: KdeConfig::default(),
            stage_order: StageOrder::default(),
        }
    }

    pub fn with_report_html(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_html = Some(path.into());
        self
    }

    pub fn with_value_column(mut self, column: impl Into<String>) -> Self {
        self.value_column = column.into();
        self
    }

    pub fn with_year_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.year_range = range;
        self
    }

    pub fn with_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = multiplier;
        self
    }

    pub fn with_kde(mut self, kde: KdeConfig) -> Self {
        self.kde = kde;
        self
    }

    pub fn with_stage_order(mut self, order: StageOrder) -> Self {
        self.stage_order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_workflow() {
        let config = PipelineConfig::new("in.csv", "out.csv");
        assert_eq!(config.value_column, "aggregate_value");
        assert_eq!(config.year_range, 1800..=2013);
        assert_eq!(config.iqr_multiplier, 1.5);
        assert_eq!(config.kde.grid_size, 512);
        assert_eq!(config.stage_order, StageOrder::OutliersFirst);
        assert!(config.report_html.is_none());
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = PipelineConfig::new("in.csv", "out.csv")
            .with_value_column("num_fell_found")
            .with_year_range(1900..=2000)
            .with_iqr_multiplier(3.0)
            .with_stage_order(StageOrder::ShapeFirst)
            .with_report_html("report.html");
        assert_eq!(config.value_column, "num_fell_found");
        assert_eq!(config.year_range, 1900..=2000);
        assert_eq!(config.iqr_multiplier, 3.0);
        assert_eq!(config.stage_order, StageOrder::ShapeFirst);
        assert!(config.report_html.is_some());
    }
}
