//! Statistical primitives for shape analysis.
//!
//! # Example
//!
//! ```
//! use normcheck::stats::basic::{mean, quantile};
//! use normcheck::stats::distribution::skewness;
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(mean(&series), 3.0);
//! assert_eq!(quantile(&series, 0.5), 3.0);
//! assert!(skewness(&series).abs() < 1e-12);
//! ```

pub mod basic;
pub mod density;
pub mod distribution;

pub use basic::{
    maximum, mean, median, minimum, quantile, std_dev, variance, SummaryStats,
};
pub use density::{kde_grid, mode_count, Bandwidth, KdeConfig};
pub use distribution::{kurtosis, shape_metrics, skewness, ShapeMetrics};
