//! KPI and chart assembly for the three dashboard views.
//!
//! Each view is built from pre-filtered tables and carries everything the
//! rendering layer needs: KPI scalars plus small aggregate tables for the
//! charts. This module has no knowledge of how any of it is drawn.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::ViewService;
pub use types::*;
