//! Filtered dashboard snapshots.
//!
//! One synchronous recomputation pass per filter change: the selection is
//! applied to each filterable table and the three views are rebuilt from the
//! resulting subsets.

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::DashboardSnapshot;
