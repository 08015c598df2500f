//! Year-indexed numeric series.

use crate::error::{EdaError, Result};
use serde::{Deserialize, Serialize};

/// A single (year, value) observation, the record type used for CSV
/// round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

/// A one-dimensional numeric sequence indexed by calendar year.
///
/// Invariants enforced at construction: years and values have equal
/// length, all values are finite, and observations are sorted ascending
/// by year. The numeric core operates on the value slice; the year axis
/// rides along for row-wise filtering and CSV output.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    years: Vec<i32>,
    values: Vec<f64>,
}

impl YearSeries {
    /// Create a new series from parallel year/value vectors.
    ///
    /// Observations are sorted by year. Returns an error on length
    /// mismatch or non-finite values.
    pub fn new(years: Vec<i32>, values: Vec<f64>) -> Result<Self> {
        if years.len() != values.len() {
            return Err(EdaError::Domain(format!(
                "year/value length mismatch: {} years, {} values",
                years.len(),
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(EdaError::Domain(format!(
                "non-finite value in series: {bad}"
            )));
        }

        let mut obs: Vec<(i32, f64)> = years.into_iter().zip(values).collect();
        obs.sort_by_key(|&(year, _)| year);

        let (years, values) = obs.into_iter().unzip();
        Ok(Self { years, values })
    }

    /// Build a series from observations.
    pub fn from_observations(observations: Vec<Observation>) -> Result<Self> {
        let (years, values) = observations.iter().map(|o| (o.year, o.value)).unzip();
        Self::new(years, values)
    }

    /// Construct from already-validated, already-sorted parts.
    ///
    /// Used internally when filtering a validated series, where the
    /// invariants are preserved by construction.
    pub(crate) fn from_sorted_parts(years: Vec<i32>, values: Vec<f64>) -> Self {
        debug_assert_eq!(years.len(), values.len());
        Self { years, values }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Year axis, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Values in year order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over (year, value) observations.
    pub fn iter(&self) -> impl Iterator<Item = Observation> + '_ {
        self.years
            .iter()
            .zip(&self.values)
            .map(|(&year, &value)| Observation { year, value })
    }

    /// (min, max) over values, or `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Keep only observations whose value satisfies the predicate.
    pub fn retain_values<F: Fn(f64) -> bool>(&self, keep: F) -> YearSeries {
        let (years, values) = self
            .iter()
            .filter(|o| keep(o.value))
            .map(|o| (o.year, o.value))
            .unzip();
        YearSeries::from_sorted_parts(years, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_by_year() {
        let s = YearSeries::new(vec![2000, 1990, 1995], vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.years(), &[1990, 1995, 2000]);
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_observations_sorts_and_validates() {
        let obs = vec![
            Observation {
                year: 2000,
                value: 2.0,
            },
            Observation {
                year: 1990,
                value: 1.0,
            },
        ];
        let s = YearSeries::from_observations(obs).unwrap();
        assert_eq!(s.years(), &[1990, 2000]);
        assert_eq!(s.values(), &[1.0, 2.0]);

        let bad = vec![Observation {
            year: 1990,
            value: f64::NAN,
        }];
        assert!(YearSeries::from_observations(bad).is_err());
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = YearSeries::new(vec![2000], vec![1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }

    #[test]
    fn new_rejects_non_finite() {
        assert!(YearSeries::new(vec![2000], vec![f64::NAN]).is_err());
        assert!(YearSeries::new(vec![2000], vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn value_range_and_retain() {
        let s = YearSeries::new(vec![1, 2, 3, 4], vec![10.0, -5.0, 7.0, 0.0]).unwrap();
        assert_eq!(s.value_range(), Some((-5.0, 10.0)));

        let positive = s.retain_values(|v| v > 0.0);
        assert_eq!(positive.years(), &[1, 3]);
        assert_eq!(positive.values(), &[10.0, 7.0]);
    }

    #[test]
    fn empty_series() {
        let s = YearSeries::new(vec![], vec![]).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.value_range(), None);
    }
}
