//! Core data structures for the EDA pipeline.

mod series;

pub use series::{Observation, YearSeries};
