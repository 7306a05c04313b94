//! The immutable in-memory dataset.

use andina_shared::types::DateRange;
use serde::{Deserialize, Serialize};

use super::types::{
    ClientRecord, ImportRecord, InventoryRecord, ProductRecord, ReceivableRecord, SaleRecord,
};

/// All six tables, loaded once at startup.
///
/// The dataset is process-wide read-only state. A reload replaces the whole
/// value; nothing ever patches individual rows in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Sales transactions.
    pub sales: Vec<SaleRecord>,
    /// Client master data.
    pub clients: Vec<ClientRecord>,
    /// Inventory snapshots.
    pub inventory: Vec<InventoryRecord>,
    /// Open receivables.
    pub receivables: Vec<ReceivableRecord>,
    /// Product catalog.
    pub products: Vec<ProductRecord>,
    /// Import purchase orders.
    pub imports: Vec<ImportRecord>,
}

/// Per-table row counts, logged at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of sales rows.
    pub sales: usize,
    /// Number of client rows.
    pub clients: usize,
    /// Number of inventory rows.
    pub inventory: usize,
    /// Number of receivable rows.
    pub receivables: usize,
    /// Number of product rows.
    pub products: usize,
    /// Number of import rows.
    pub imports: usize,
}

impl Dataset {
    /// Earliest and latest sale dates, the default date-picker bounds.
    ///
    /// `None` when the sales table is empty.
    #[must_use]
    pub fn date_bounds(&self) -> Option<DateRange> {
        let start = self.sales.iter().map(|s| s.date).min()?;
        let end = self.sales.iter().map(|s| s.date).max()?;
        Some(DateRange::new(start, end))
    }

    /// Sorted distinct product categories present in sales.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        Self::distinct(self.sales.iter().map(|s| s.category.as_str()))
    }

    /// Sorted distinct sales regions.
    #[must_use]
    pub fn regions(&self) -> Vec<String> {
        Self::distinct(self.sales.iter().map(|s| s.region.as_str()))
    }

    /// Sorted distinct client segments present in sales.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        Self::distinct(self.sales.iter().map(|s| s.segment.as_str()))
    }

    /// Sorted distinct logistics centers present in inventory.
    #[must_use]
    pub fn centers(&self) -> Vec<String> {
        Self::distinct(self.inventory.iter().map(|i| i.center.as_str()))
    }

    /// Number of clients with an active account.
    #[must_use]
    pub fn active_clients(&self) -> usize {
        self.clients.iter().filter(|c| c.is_active()).count()
    }

    /// Per-table row counts.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            sales: self.sales.len(),
            clients: self.clients.len(),
            inventory: self.inventory.len(),
            receivables: self.receivables.len(),
            products: self.products.len(),
            imports: self.imports.len(),
        }
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = values.map(str::to_string).collect();
        out.sort();
        out.dedup();
        out
    }
}
