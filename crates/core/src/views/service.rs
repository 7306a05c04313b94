//! View assembly from pre-filtered tables.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{
    AgingBucket, CategoryMargin, CategorySeries, CenterInventory, ClientRanking, CommercialKpis,
    CommercialView, ExecutivePerformance, InventoryTrendChart, ManagerialKpis, ManagerialView,
    MonthlyCategoryChart, MonthlyTrendChart, OperationalKpis, OperationalView, ProductRanking,
    RegionOverdue,
};
use crate::aggregate::{
    OrderedGroups, breakdown, group_totals, mean, ratio_percent, sorted_desc, sum, top_n,
};
use crate::tables::types::{ClientRecord, InventoryRecord, ReceivableRecord, SaleRecord};

/// Number of products ranked in the managerial view.
const TOP_PRODUCTS: usize = 10;
/// Number of clients ranked in the commercial view.
const TOP_CLIENTS: usize = 15;
/// Number of executives ranked in the commercial view.
const TOP_EXECUTIVES: usize = 10;

/// Assembles the three dashboard views from pre-filtered tables.
pub struct ViewService;

impl ViewService {
    /// Builds the managerial view.
    ///
    /// Sales and receivables are expected pre-filtered; the clients table is
    /// always the full one (the active-clients KPI is never filtered).
    #[must_use]
    pub fn managerial(
        sales: &[SaleRecord],
        receivables: &[ReceivableRecord],
        clients: &[ClientRecord],
    ) -> ManagerialView {
        let overdue_balance = sum(receivables, |r| {
            if r.is_overdue() { r.balance } else { Decimal::ZERO }
        });

        ManagerialView {
            kpis: ManagerialKpis {
                total_revenue: sum(sales, |s| s.revenue),
                active_clients: clients.iter().filter(|c| c.is_active()).count(),
                total_margin: sum(sales, |s| s.margin),
                overdue_balance,
            },
            monthly_trend: Self::monthly_trend(sales),
            revenue_by_region: breakdown(group_totals(sales, |s| s.region.clone(), |s| s.revenue)),
            top_products: Self::top_products(sales),
            margin_by_category: Self::margin_by_category(sales),
        }
    }

    /// Builds the commercial view from pre-filtered sales.
    #[must_use]
    pub fn commercial(sales: &[SaleRecord]) -> CommercialView {
        CommercialView {
            kpis: CommercialKpis {
                total_revenue: sum(sales, |s| s.revenue),
                average_margin_percent: mean(sales, SaleRecord::margin_percent),
                average_ticket: mean(sales, |s| s.revenue),
                average_discount_percent: mean(sales, |s| s.discount_percent),
            },
            category_performance: Self::margin_by_category(sales),
            monthly_by_category: Self::monthly_by_category(sales),
            revenue_by_segment: breakdown(group_totals(
                sales,
                |s| s.segment.clone(),
                |s| s.revenue,
            )),
            top_clients: Self::top_clients(sales),
            top_executives: Self::top_executives(sales),
        }
    }

    /// Builds the operational view from pre-filtered inventory and
    /// receivables.
    ///
    /// Stock KPIs come from the current snapshot: the rows at the latest
    /// cut-off date among the filtered inventory.
    #[must_use]
    pub fn operational(
        inventory: &[InventoryRecord],
        receivables: &[ReceivableRecord],
    ) -> OperationalView {
        let snapshot = Self::current_snapshot(inventory);
        let receivables_balance = sum(receivables, |r| r.balance);
        let overdue: Vec<&ReceivableRecord> =
            receivables.iter().filter(|r| r.is_overdue()).collect();
        let overdue_balance: Decimal = overdue.iter().map(|r| r.balance).sum();

        OperationalView {
            kpis: OperationalKpis {
                inventory_value: snapshot.iter().map(|i| i.value).sum(),
                stock_units: snapshot.iter().map(|i| i.units).sum(),
                receivables_balance,
                overdue_percent: ratio_percent(overdue_balance, receivables_balance),
            },
            inventory_by_center: Self::inventory_by_center(&snapshot),
            inventory_by_category: breakdown(group_totals(
                &snapshot,
                |i| i.category.clone(),
                |i| i.value,
            )),
            inventory_trend: Self::inventory_trend(inventory),
            receivable_status: breakdown(group_totals(
                receivables,
                |r| r.status.clone(),
                |r| r.balance,
            )),
            overdue_by_region: Self::overdue_by_region(&overdue),
            overdue_aging: Self::overdue_aging(&overdue),
        }
    }

    fn monthly_trend(sales: &[SaleRecord]) -> MonthlyTrendChart {
        let mut groups: OrderedGroups<(Decimal, Decimal)> = OrderedGroups::new();
        for sale in sales {
            let slot = groups.entry(&sale.month_key());
            slot.0 += sale.revenue;
            slot.1 += sale.margin;
        }

        let mut pairs = groups.into_pairs();
        // `YYYY-MM` keys sort lexicographically in chronological order.
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut chart = MonthlyTrendChart::default();
        for (month, (revenue, margin)) in pairs {
            chart.months.push(month);
            chart.revenue.push(revenue);
            chart.margin.push(margin);
        }
        chart
    }

    fn monthly_by_category(sales: &[SaleRecord]) -> MonthlyCategoryChart {
        let mut months: Vec<String> = sales.iter().map(SaleRecord::month_key).collect();
        months.sort();
        months.dedup();

        let mut by_category: OrderedGroups<BTreeMap<String, Decimal>> = OrderedGroups::new();
        for sale in sales {
            *by_category
                .entry(&sale.category)
                .entry(sale.month_key())
                .or_default() += sale.revenue;
        }

        let series = by_category
            .into_pairs()
            .into_iter()
            .map(|(category, totals)| CategorySeries {
                category,
                revenue: months
                    .iter()
                    .map(|m| totals.get(m).copied().unwrap_or_default())
                    .collect(),
            })
            .collect();

        MonthlyCategoryChart { months, series }
    }

    fn margin_by_category(sales: &[SaleRecord]) -> Vec<CategoryMargin> {
        let mut groups: OrderedGroups<(Decimal, Decimal)> = OrderedGroups::new();
        for sale in sales {
            let slot = groups.entry(&sale.category);
            slot.0 += sale.revenue;
            slot.1 += sale.margin;
        }

        groups
            .into_pairs()
            .into_iter()
            .map(|(category, (revenue, margin))| CategoryMargin {
                category,
                revenue,
                margin,
                margin_percent: ratio_percent(margin, revenue),
            })
            .collect()
    }

    fn top_products(sales: &[SaleRecord]) -> Vec<ProductRanking> {
        let mut units: OrderedGroups<i64> = OrderedGroups::new();
        for sale in sales {
            *units.entry(&sale.subcategory) += sale.quantity;
        }
        let units: BTreeMap<String, i64> = units.into_pairs().into_iter().collect();

        top_n(
            group_totals(sales, |s| s.subcategory.clone(), |s| s.revenue),
            TOP_PRODUCTS,
        )
        .into_iter()
        .map(|g| ProductRanking {
            units: units.get(&g.label).copied().unwrap_or_default(),
            product: g.label,
            revenue: g.total,
        })
        .collect()
    }

    fn top_clients(sales: &[SaleRecord]) -> Vec<ClientRanking> {
        top_n(
            group_totals(
                sales,
                |s| {
                    s.client_name
                        .clone()
                        .unwrap_or_else(|| s.client_id.to_string())
                },
                |s| s.revenue,
            ),
            TOP_CLIENTS,
        )
        .into_iter()
        .map(|g| ClientRanking {
            client: g.label,
            revenue: g.total,
        })
        .collect()
    }

    fn top_executives(sales: &[SaleRecord]) -> Vec<ExecutivePerformance> {
        let mut groups: OrderedGroups<(Decimal, Decimal, usize)> = OrderedGroups::new();
        for sale in sales {
            let slot = groups.entry(&sale.executive);
            slot.0 += sale.revenue;
            slot.1 += sale.margin;
            slot.2 += 1;
        }

        let mut performance: Vec<ExecutivePerformance> = groups
            .into_pairs()
            .into_iter()
            .map(|(executive, (revenue, margin, sales_count))| ExecutivePerformance {
                executive,
                revenue,
                margin,
                sales_count,
                margin_percent: ratio_percent(margin, revenue),
            })
            .collect();

        performance.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        performance.truncate(TOP_EXECUTIVES);
        performance
    }

    fn current_snapshot(inventory: &[InventoryRecord]) -> Vec<InventoryRecord> {
        let Some(latest) = inventory.iter().map(|i| i.as_of).max() else {
            return Vec::new();
        };
        inventory
            .iter()
            .filter(|i| i.as_of == latest)
            .cloned()
            .collect()
    }

    fn inventory_by_center(snapshot: &[InventoryRecord]) -> Vec<CenterInventory> {
        let mut groups: OrderedGroups<(Decimal, i64)> = OrderedGroups::new();
        for row in snapshot {
            let slot = groups.entry(&row.center);
            slot.0 += row.value;
            slot.1 += row.units;
        }

        groups
            .into_pairs()
            .into_iter()
            .map(|(center, (value, units))| CenterInventory {
                center,
                value,
                units,
            })
            .collect()
    }

    fn inventory_trend(inventory: &[InventoryRecord]) -> InventoryTrendChart {
        let mut by_date: BTreeMap<chrono::NaiveDate, Decimal> = BTreeMap::new();
        for row in inventory {
            *by_date.entry(row.as_of).or_default() += row.value;
        }

        let mut chart = InventoryTrendChart::default();
        for (date, value) in by_date {
            chart.dates.push(date);
            chart.value.push(value);
        }
        chart
    }

    fn overdue_by_region(overdue: &[&ReceivableRecord]) -> Vec<RegionOverdue> {
        sorted_desc(group_totals(
            overdue,
            |r| r.region.clone(),
            |r| r.balance,
        ))
        .into_iter()
        .map(|g| RegionOverdue {
            region: g.label,
            balance: g.total,
        })
        .collect()
    }

    fn overdue_aging(overdue: &[&ReceivableRecord]) -> Vec<AgingBucket> {
        let mut buckets = [
            ("1-30", Decimal::ZERO, 0usize),
            ("31-60", Decimal::ZERO, 0usize),
            ("61-90", Decimal::ZERO, 0usize),
            ("90+", Decimal::ZERO, 0usize),
        ];

        for doc in overdue {
            let idx = match doc.days_overdue {
                ..=30 => 0,
                31..=60 => 1,
                61..=90 => 2,
                _ => 3,
            };
            buckets[idx].1 += doc.balance;
            buckets[idx].2 += 1;
        }

        buckets
            .into_iter()
            .map(|(label, balance, documents)| AgingBucket {
                label: label.to_string(),
                balance,
                documents,
            })
            .collect()
    }
}
