//! The six dataset tables and their records.
//!
//! Records are immutable once loaded. The pipeline only ever selects or
//! excludes rows; it never mutates them.

pub mod dataset;
pub mod types;

pub use dataset::{Dataset, DatasetSummary};
pub use types::*;
