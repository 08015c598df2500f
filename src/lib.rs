//! # normcheck
//!
//! Distribution-shape diagnostics and variance-stabilizing transform
//! selection for yearly count data.
//!
//! Provides the numeric core of a batch EDA pipeline: skewness/kurtosis
//! estimation, KDE-based mode counting, Tukey IQR outlier partitioning,
//! and evaluation/selection among candidate transforms (identity, log1p,
//! sqrt, cube root, Box-Cox) scored by distance from a Normal shape.
//!
//! # Example
//!
//! ```
//! use normcheck::stats::density::KdeConfig;
//! use normcheck::transform::{evaluate, select};
//!
//! let counts = vec![4.0, 9.0, 16.0, 25.0, 36.0];
//! let candidates = evaluate(&counts, &KdeConfig::default());
//! let selection = select(&candidates).expect("at least one scored candidate");
//! assert!(selection.best.score >= 0.0);
//! ```

pub mod core;
pub mod error;
pub mod io;
pub mod outlier;
pub mod pipeline;
pub mod stats;
pub mod transform;

pub use error::{EdaError, Result};

pub mod prelude {
    pub use crate::core::{Observation, YearSeries};
    pub use crate::error::{EdaError, Result};
    pub use crate::outlier::{partition, OutlierBounds, OutlierPartition};
    pub use crate::pipeline::{PipelineConfig, StageOrder};
    pub use crate::stats::density::{Bandwidth, KdeConfig};
    pub use crate::stats::distribution::{shape_metrics, ShapeMetrics};
    pub use crate::transform::{evaluate, select, Candidate, Selection, TransformKind};
}
