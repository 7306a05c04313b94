//! Snapshot recomputation.

use super::types::DashboardSnapshot;
use crate::filter::{FilterSelection, apply_filters};
use crate::tables::Dataset;
use crate::views::ViewService;

/// Computes dashboard snapshots from the read-only dataset.
pub struct DashboardService;

impl DashboardService {
    /// Applies the selection to each filterable table and rebuilds the three
    /// views.
    ///
    /// Each table honors only the predicates for attributes it carries:
    /// sales see date/category/region/segment, receivables see date/region,
    /// inventory sees category/center. The clients, products, and imports
    /// tables are never filtered.
    #[must_use]
    pub fn snapshot(dataset: &Dataset, selection: &FilterSelection) -> DashboardSnapshot {
        let sales = apply_filters(&dataset.sales, selection);
        let receivables = apply_filters(&dataset.receivables, selection);
        let inventory = apply_filters(&dataset.inventory, selection);

        DashboardSnapshot {
            selection: selection.clone(),
            managerial: ViewService::managerial(&sales, &receivables, &dataset.clients),
            commercial: ViewService::commercial(&sales),
            operational: ViewService::operational(&inventory, &receivables),
        }
    }
}
