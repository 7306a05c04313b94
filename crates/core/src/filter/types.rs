//! Filter selection types.

use andina_shared::types::DateRange;
use chrono::Months;
use serde::{Deserialize, Serialize};

/// The combination of date range and optional dimension sets that narrows
/// displayed data.
///
/// An empty set for any dimension means "no restriction" on that dimension.
/// Values that do not occur in the dataset simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Inclusive date interval applied to date-bearing tables.
    pub date_range: DateRange,
    /// Allowed product categories.
    pub categories: Vec<String>,
    /// Allowed sales regions.
    pub regions: Vec<String>,
    /// Allowed client segments.
    pub segments: Vec<String>,
    /// Allowed logistics centers.
    pub centers: Vec<String>,
}

impl FilterSelection {
    /// Creates a selection with the given date range and no dimension
    /// restrictions.
    #[must_use]
    pub const fn new(date_range: DateRange) -> Self {
        Self {
            date_range,
            categories: Vec::new(),
            regions: Vec::new(),
            segments: Vec::new(),
            centers: Vec::new(),
        }
    }

    /// Restricts to the given categories.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts to the given regions.
    #[must_use]
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts to the given segments.
    #[must_use]
    pub fn with_segments(mut self, segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts to the given logistics centers.
    #[must_use]
    pub fn with_centers(mut self, centers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.centers = centers.into_iter().map(Into::into).collect();
        self
    }

    /// The "clear filters" reset: all four dimension sets become empty, the
    /// date range stays untouched.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new(self.date_range)
    }

    /// Returns true if no dimension restriction is set.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty()
            && self.regions.is_empty()
            && self.segments.is_empty()
            && self.centers.is_empty()
    }
}

/// Quick-access date range presets, resolved against the dataset bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickRange {
    /// The full dataset range.
    All,
    /// Twelve months back from the latest sale.
    LastYear,
    /// Six months back from the latest sale.
    LastSixMonths,
    /// Three months back from the latest sale.
    LastThreeMonths,
    /// One month back from the latest sale.
    LastMonth,
}

impl QuickRange {
    /// Resolves the preset to a concrete range within `bounds`.
    ///
    /// The start is clamped so it never precedes the earliest sale.
    #[must_use]
    pub fn resolve(self, bounds: DateRange) -> DateRange {
        let months = match self {
            Self::All => return bounds,
            Self::LastYear => 12,
            Self::LastSixMonths => 6,
            Self::LastThreeMonths => 3,
            Self::LastMonth => 1,
        };
        let start = bounds
            .end
            .checked_sub_months(Months::new(months))
            .unwrap_or(bounds.start)
            .max(bounds.start);
        DateRange::new(start, bounds.end)
    }
}
