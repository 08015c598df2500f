//! CSV loaders with schema validation.
//!
//! A missing file is a `NotFound` error, missing columns are a `Schema`
//! error, and rows whose numeric fields cannot be coerced are silently
//! dropped. An input with no usable rows at all is a fatal `Domain`
//! error.

use crate::core::{Observation, YearSeries};
use crate::error::{EdaError, Result};
use std::path::Path;
use tracing::debug;

/// One raw input row: its parsed calendar year and `fall` field, plus
/// the full original field set kept verbatim so exact-duplicate rows can
/// be detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawRecord {
    pub year: i32,
    /// The `fall` column as read (e.g. "Fell", "Found").
    pub fall: String,
    /// The row's fields as read, in column order.
    pub fields: Vec<String>,
}

/// Extract a calendar year from a raw field value: up to the first 3-4
/// leading digits, stopping at the first non-digit.
///
/// Handles the date-like encodings seen in the wild without going
/// through a datetime parse (which mangles pre-1970 years):
///
/// ```
/// use normcheck::io::parse_year;
///
/// assert_eq!(parse_year("1880-01-01T00:00:00"), Some(1880));
/// assert_eq!(parse_year("860-01-01T00:00:00"), Some(860));
/// assert_eq!(parse_year("1985.0"), Some(1985));
/// assert_eq!(parse_year("unknown"), None);
/// ```
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let digits: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(4)
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn check_columns(path: &Path, headers: &csv::StringRecord, required: &[&str]) -> Result<Vec<usize>> {
    let found: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut indices = Vec::with_capacity(required.len());
    for name in required {
        match headers.iter().position(|h| h == *name) {
            Some(idx) => indices.push(idx),
            None => {
                debug!(path = %path.display(), column = name, "required column missing");
                return Err(EdaError::Schema {
                    expected: required.iter().map(|s| s.to_string()).collect(),
                    found,
                });
            }
        }
    }
    Ok(indices)
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(EdaError::NotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::Reader::from_path(path)?)
}

/// Load a raw meteorite-style CSV, requiring `year` and `fall` columns.
///
/// Rows without a parsable year are dropped silently. The `fall` field
/// is left as-is; filtering to Fell/Found is a pipeline stage.
pub fn load_raw(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers()?.clone();
    let indices = check_columns(path, &headers, &["year", "fall"])?;
    let (year_idx, fall_idx) = (indices[0], indices[1]);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row?;
        match row.get(year_idx).and_then(parse_year) {
            Some(year) => records.push(RawRecord {
                year,
                fall: row.get(fall_idx).unwrap_or_default().to_string(),
                fields: row.iter().map(str::to_string).collect(),
            }),
            None => dropped += 1,
        }
    }
    debug!(
        path = %path.display(),
        kept = records.len(),
        dropped,
        "loaded raw records"
    );

    if records.is_empty() {
        return Err(EdaError::Domain(format!(
            "no rows with a parsable year in {}",
            path.display()
        )));
    }
    Ok(records)
}

/// Load an aggregated two-column CSV (`year` plus a named value column)
/// into a [`YearSeries`].
///
/// Rows where either field fails to coerce are dropped silently; an
/// input with no valid numeric rows is a fatal domain error.
pub fn load_series(path: &Path, value_column: &str) -> Result<YearSeries> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers()?.clone();
    let indices = check_columns(path, &headers, &["year", value_column])?;
    let (year_idx, value_idx) = (indices[0], indices[1]);

    // Deserialize rows against renamed headers so the value column maps
    // onto `Observation::value` whatever the file calls it; unrelated
    // columns get placeholder names serde ignores.
    let renamed: csv::StringRecord = headers
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i == year_idx {
                "year".to_string()
            } else if i == value_idx {
                "value".to_string()
            } else {
                format!("_{i}")
            }
        })
        .collect();

    let mut observations = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row?;
        match row.deserialize::<Observation>(Some(&renamed)) {
            Ok(obs) if obs.value.is_finite() => observations.push(obs),
            _ => dropped += 1,
        }
    }
    debug!(
        path = %path.display(),
        kept = observations.len(),
        dropped,
        column = value_column,
        "loaded series"
    );

    if observations.is_empty() {
        return Err(EdaError::Domain(format!(
            "no valid numeric values in column '{value_column}' of {}",
            path.display()
        )));
    }
    YearSeries::from_observations(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_year_handles_date_like_strings() {
        assert_eq!(parse_year("1880-01-01T00:00:00"), Some(1880));
        assert_eq!(parse_year("860-01-01T00:00:00"), Some(860));
        assert_eq!(parse_year("1970-01-01 00:00:00"), Some(1970));
        assert_eq!(parse_year("1985.0"), Some(1985));
        assert_eq!(parse_year("  2013 "), Some(2013));
    }

    #[test]
    fn parse_year_rejects_non_numeric() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("   "), None);
        assert_eq!(parse_year("n/a"), None);
        assert_eq!(parse_year("-1200"), None);
    }

    #[test]
    fn parse_year_caps_at_four_digits() {
        assert_eq!(parse_year("123456"), Some(1234));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_series(Path::new("definitely_missing.csv"), "aggregate_value").unwrap_err();
        assert!(matches!(err, EdaError::NotFound { .. }));
    }
}
