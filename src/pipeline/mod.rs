//! Pipeline stages and orchestration.
//!
//! Each stage is a pure function from input rows/sequences to output
//! rows/sequences; [`run`] chains them according to a [`PipelineConfig`]
//! and writes the artifacts only after all computation succeeds.

mod config;

pub use config::{PipelineConfig, StageOrder};

use crate::core::YearSeries;
use crate::error::{EdaError, Result};
use crate::io::loader::{load_series, RawRecord};
use crate::io::report::render_report;
use crate::io::writer::write_transformed;
use crate::outlier::{partition_series, OutlierBounds};
use crate::stats::basic::SummaryStats;
use crate::stats::distribution::{shape_metrics, ShapeMetrics};
use crate::transform::{evaluate, select, Candidate, Selection};
use std::collections::{BTreeMap, HashSet};
use std::ops::RangeInclusive;
use tracing::info;

/// Keep only records whose year falls inside the range (inclusive).
pub fn filter_year_range(records: Vec<RawRecord>, range: &RangeInclusive<i32>) -> Vec<RawRecord> {
    records
        .into_iter()
        .filter(|r| range.contains(&r.year))
        .collect()
}

fn normalize_fall(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

/// Keep only records whose `fall` field is Fell or Found
/// (case-insensitive, whitespace-tolerant).
pub fn filter_fell_found(records: Vec<RawRecord>) -> Vec<RawRecord> {
    records
        .into_iter()
        .filter(|r| matches!(normalize_fall(&r.fall).as_str(), "Fell" | "Found"))
        .collect()
}

/// Drop exact duplicate rows (all fields equal), keeping the first
/// occurrence of each.
pub fn dedup_rows(records: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.fields.clone()))
        .collect()
}

/// Aggregate records into a per-year count series.
pub fn aggregate_by_year(records: &[RawRecord]) -> YearSeries {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.year).or_default() += 1;
    }
    let (years, values) = counts
        .into_iter()
        .map(|(year, count)| (year, count as f64))
        .unzip();
    YearSeries::from_sorted_parts(years, values)
}

/// Outcome of a full pipeline run, for console summaries.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub rows_in: usize,
    pub rows_kept: usize,
    pub rows_removed: usize,
    pub bounds: OutlierBounds,
    /// Shape metrics on the raw or trimmed values, per the configured
    /// stage order.
    pub metrics: ShapeMetrics,
    pub candidates: Vec<Candidate>,
    pub selection: Selection,
    /// Observations the transform was applied to (positive-filtered for
    /// non-identity transforms).
    pub base: YearSeries,
    pub transformed: Vec<f64>,
}

/// Run the numeric pipeline over an aggregated two-column CSV:
/// load, trim outliers and compute shape metrics (in the configured
/// order), evaluate and select a transform, apply it, and write the
/// transformed CSV plus the optional HTML report.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    let series = load_series(&config.input, &config.value_column)?;
    info!(rows = series.len(), input = %config.input.display(), "pipeline input loaded");

    let partition = partition_series(&series, config.iqr_multiplier);
    let metric_input = match config.stage_order {
        StageOrder::OutliersFirst => &partition.kept,
        StageOrder::ShapeFirst => &series,
    };
    // Degenerate data at the top level is fatal, unlike the
    // per-candidate failures inside the evaluator.
    let metrics = shape_metrics(metric_input.values(), &config.kde)?;
    info!(
        removed = partition.removed.len(),
        skew = metrics.skew,
        kurtosis = metrics.kurtosis,
        modes = metrics.mode_count,
        "outliers trimmed and shape measured"
    );

    let candidates = evaluate(partition.kept.values(), &config.kde);
    let selection = select(&candidates).ok_or_else(|| {
        EdaError::Domain("no transform candidate could be scored".to_string())
    })?;
    info!(best = %selection.best.kind, score = selection.best.score, "transform selected");

    let base = if selection.best.kind.requires_positive() {
        partition.kept.retain_values(|v| v > 0.0)
    } else {
        partition.kept.clone()
    };
    let transformed = selection.best.apply(base.values());

    write_transformed(
        &config.output,
        &base,
        &transformed,
        &config.value_column,
        "transformed_value",
    )?;

    if let Some(report_path) = &config.report_html {
        let stats = SummaryStats::from_values(partition.kept.values(), config.iqr_multiplier);
        let html = render_report(
            "Normality Check",
            &config.value_column,
            &stats,
            &candidates,
            &selection,
        );
        std::fs::write(report_path, html)?;
        info!(path = %report_path.display(), "wrote HTML report");
    }

    Ok(PipelineReport {
        rows_in: series.len(),
        rows_kept: partition.kept.len(),
        rows_removed: partition.removed.len(),
        bounds: partition.bounds,
        metrics,
        candidates,
        selection,
        base,
        transformed,
    })
}
