//! Dashboard snapshot types.

use serde::{Deserialize, Serialize};

use crate::filter::FilterSelection;
use crate::views::{CommercialView, ManagerialView, OperationalView};

/// The three views computed for one filter selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// The selection the snapshot was computed for.
    pub selection: FilterSelection,
    /// Managerial view.
    pub managerial: ManagerialView,
    /// Commercial view.
    pub commercial: CommercialView,
    /// Operational view.
    pub operational: OperationalView,
}
