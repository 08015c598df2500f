//! CSV loading/writing and HTML reporting.

pub mod loader;
pub mod report;
pub mod writer;

pub use loader::{load_raw, load_series, parse_year, RawRecord};
pub use report::{interpret_kurtosis, interpret_modes, interpret_skew, render_report};
pub use writer::{write_series, write_transformed};
