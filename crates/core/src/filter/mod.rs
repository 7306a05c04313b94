//! Filter selections and the row-filtering pipeline.
//!
//! Filtering is a pure, stateless function of (table, selection) -> subset.
//! Dimensions combine by logical AND; an empty dimension set means "no
//! restriction".

pub mod service;
pub mod types;


pub use service::{Filterable, apply_filters};
pub use types::{FilterSelection, QuickRange};
