//! CSV ingestion layer for the Andina dashboard.
//!
//! Loads the six exported tables into the core [`Dataset`]. A malformed row
//! is skipped and logged; an unreadable file aborts the load. The dataset is
//! built once and returned as an immutable value, so a reload replaces the
//! whole structure atomically.
//!
//! [`Dataset`]: andina_core::tables::Dataset

pub mod error;
pub mod loader;
pub mod rows;

pub use error::LoadError;
pub use loader::load_dataset;
