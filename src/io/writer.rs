//! CSV output writers.
//!
//! Writers are called only after all computation for a run completes, so
//! a failed run never leaves a partially written artifact behind.

use crate::core::YearSeries;
use crate::error::{EdaError, Result};
use std::path::Path;
use tracing::info;

/// Write a `[year, <value_header>]` CSV.
///
/// The header row is written explicitly so the value column can carry
/// any name; the rows themselves serialize the series' observations.
pub fn write_series(path: &Path, series: &YearSeries, value_header: &str) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["year", value_header])?;
    for obs in series.iter() {
        writer.serialize(obs)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = series.len(), "wrote series CSV");
    Ok(())
}

/// Write a `[year, <value_header>, <transformed_header>]` CSV pairing
/// each kept observation with its transformed value.
pub fn write_transformed(
    path: &Path,
    series: &YearSeries,
    transformed: &[f64],
    value_header: &str,
    transformed_header: &str,
) -> Result<()> {
    if transformed.len() != series.len() {
        return Err(EdaError::Domain(format!(
            "transformed length {} does not match series length {}",
            transformed.len(),
            series.len()
        )));
    }

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["year", value_header, transformed_header])?;
    for (obs, tx) in series.iter().zip(transformed) {
        writer.serialize((obs.year, obs.value, tx))?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = series.len(), "wrote transformed CSV");
    Ok(())
}
