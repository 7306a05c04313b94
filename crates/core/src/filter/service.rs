//! The row-filtering pipeline.

use chrono::NaiveDate;

use super::types::FilterSelection;
use crate::tables::types::{InventoryRecord, ReceivableRecord, SaleRecord};

/// Exposes the filterable attributes a record carries.
///
/// Every accessor defaults to `None`; a table implements only the accessors
/// for attributes it actually has, and the pipeline skips the predicates for
/// the rest. Sales expose date/category/region/segment, receivables expose
/// date/region, inventory exposes category/center.
pub trait Filterable {
    /// Date the range filter applies to.
    fn date(&self) -> Option<NaiveDate> {
        None
    }

    /// Product category.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Sales region.
    fn region(&self) -> Option<&str> {
        None
    }

    /// Client segment.
    fn segment(&self) -> Option<&str> {
        None
    }

    /// Logistics center.
    fn center(&self) -> Option<&str> {
        None
    }
}

impl Filterable for SaleRecord {
    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }

    fn segment(&self) -> Option<&str> {
        Some(&self.segment)
    }
}

impl Filterable for ReceivableRecord {
    fn date(&self) -> Option<NaiveDate> {
        Some(self.invoice_date)
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }
}

impl Filterable for InventoryRecord {
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn center(&self) -> Option<&str> {
        Some(&self.center)
    }
}

/// Narrows a table to the rows matching the selection.
///
/// A row is included iff its date (when the table has one) falls within the
/// inclusive range, AND for every non-empty dimension set the row's
/// corresponding attribute (when the table has it) is a member. Input order
/// is preserved and no row is ever fabricated, so the result is always a
/// subset of the input and re-filtering it with the same selection is a
/// no-op.
#[must_use]
pub fn apply_filters<T: Filterable + Clone>(rows: &[T], selection: &FilterSelection) -> Vec<T> {
    rows.iter()
        .filter(|row| matches(*row, selection))
        .cloned()
        .collect()
}

fn matches<T: Filterable>(row: &T, selection: &FilterSelection) -> bool {
    if let Some(date) = row.date()
        && !selection.date_range.contains(date)
    {
        return false;
    }

    dimension_allows(&selection.categories, row.category())
        && dimension_allows(&selection.regions, row.region())
        && dimension_allows(&selection.segments, row.segment())
        && dimension_allows(&selection.centers, row.center())
}

/// A dimension predicate passes when unrestricted, when the table lacks the
/// attribute, or when the row's value is among the allowed ones.
fn dimension_allows(allowed: &[String], value: Option<&str>) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match value {
        None => true,
        Some(v) => allowed.iter().any(|a| a == v),
    }
}
