//! Aggregation primitives.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One label with its summed measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotal {
    /// Group label (category, region, month key, ...).
    pub label: String,
    /// Summed measure for the group.
    pub total: Decimal,
}

/// One slice of a whole, with its share of the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    /// Slice label.
    pub label: String,
    /// Slice amount.
    pub amount: Decimal,
    /// Share of the grand total, in percent (0 when the total is 0).
    pub percent: Decimal,
}

/// Group-by accumulator that preserves first-appearance order of keys.
///
/// Rankings built on top of it break ties by stable input order, which is
/// what makes top-N results deterministic.
#[derive(Debug)]
pub struct OrderedGroups<V> {
    keys: Vec<String>,
    index: HashMap<String, usize>,
    values: Vec<V>,
}

impl<V: Default> OrderedGroups<V> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            values: Vec::new(),
        }
    }

    /// Returns the accumulator slot for `key`, inserting a default value on
    /// first appearance.
    pub fn entry(&mut self, key: &str) -> &mut V {
        if !self.index.contains_key(key) {
            self.index.insert(key.to_string(), self.values.len());
            self.keys.push(key.to_string());
            self.values.push(V::default());
        }
        let idx = self.index[key];
        &mut self.values[idx]
    }

    /// Consumes the accumulator into (key, value) pairs in first-appearance
    /// order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, V)> {
        self.keys.into_iter().zip(self.values).collect()
    }
}

impl<V: Default> Default for OrderedGroups<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sums a measure over the rows.
#[must_use]
pub fn sum<T>(rows: &[T], measure: impl Fn(&T) -> Decimal) -> Decimal {
    rows.iter().map(measure).sum()
}

/// Arithmetic mean of a measure, rounded to 2 decimals. Zero on empty input.
#[must_use]
pub fn mean<T>(rows: &[T], measure: impl Fn(&T) -> Decimal) -> Decimal {
    if rows.is_empty() {
        return Decimal::ZERO;
    }
    (sum(rows, measure) / Decimal::from(rows.len())).round_dp(2)
}

/// `part` as a percentage of `whole`, rounded to 2 decimals. Zero when the
/// whole is zero.
#[must_use]
pub fn ratio_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * Decimal::ONE_HUNDRED).round_dp(2)
    }
}

/// Groups rows by a key and sums a measure, preserving first-appearance
/// order of keys.
#[must_use]
pub fn group_totals<T>(
    rows: &[T],
    key: impl Fn(&T) -> String,
    measure: impl Fn(&T) -> Decimal,
) -> Vec<GroupTotal> {
    let mut groups: OrderedGroups<Decimal> = OrderedGroups::new();
    for row in rows {
        *groups.entry(&key(row)) += measure(row);
    }
    groups
        .into_pairs()
        .into_iter()
        .map(|(label, total)| GroupTotal { label, total })
        .collect()
}

/// Sorts group totals descending by total. The sort is stable, so ties keep
/// first-appearance order.
#[must_use]
pub fn sorted_desc(mut groups: Vec<GroupTotal>) -> Vec<GroupTotal> {
    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

/// The `n` largest groups, ties broken by stable input order.
#[must_use]
pub fn top_n(groups: Vec<GroupTotal>, n: usize) -> Vec<GroupTotal> {
    let mut ranked = sorted_desc(groups);
    ranked.truncate(n);
    ranked
}

/// Converts group totals into slices carrying their share of the grand
/// total.
#[must_use]
pub fn breakdown(groups: Vec<GroupTotal>) -> Vec<BreakdownSlice> {
    let grand_total: Decimal = groups.iter().map(|g| g.total).sum();
    groups
        .into_iter()
        .map(|g| BreakdownSlice {
            percent: ratio_percent(g.total, grand_total),
            label: g.label,
            amount: g.total,
        })
        .collect()
}
