//! Variance-stabilizing transforms and candidate selection.
//!
//! # Example
//!
//! ```
//! use normcheck::stats::density::KdeConfig;
//! use normcheck::transform::{evaluate, select, standardize};
//!
//! let counts = vec![1.0, 2.0, 2.0, 4.0, 7.0, 11.0, 18.0, 29.0];
//!
//! // Score every candidate transform and pick the most Normal-like.
//! let candidates = evaluate(&counts, &KdeConfig::default());
//! let selection = select(&candidates).unwrap();
//! let transformed = selection.best.apply(&counts);
//!
//! // Z-scale the transformed values for downstream modeling.
//! let z = standardize(&transformed);
//! assert_eq!(z.data.len(), transformed.len());
//! ```

pub mod boxcox;
pub mod candidate;
pub mod scale;

pub use boxcox::{boxcox, boxcox_fit, boxcox_lambda, BoxCoxFit};
pub use candidate::{evaluate, select, Candidate, Selection, TransformKind};
pub use scale::{standardize, ScaleResult};
