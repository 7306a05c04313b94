//! View payload types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::BreakdownSlice;

/// The managerial view: overall revenue, margin, and receivable health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerialView {
    /// Headline KPIs.
    pub kpis: ManagerialKpis,
    /// Monthly revenue and margin trend.
    pub monthly_trend: MonthlyTrendChart,
    /// Revenue distribution across regions.
    pub revenue_by_region: Vec<BreakdownSlice>,
    /// Top 10 products by revenue.
    pub top_products: Vec<ProductRanking>,
    /// Margin percentage per category.
    pub margin_by_category: Vec<CategoryMargin>,
}

/// Managerial KPI scalars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerialKpis {
    /// Total revenue over the filtered sales.
    pub total_revenue: Decimal,
    /// Number of active clients (full clients table, not filtered).
    pub active_clients: usize,
    /// Total margin over the filtered sales.
    pub total_margin: Decimal,
    /// Outstanding balance of overdue receivables.
    pub overdue_balance: Decimal,
}

/// Monthly revenue and margin series, chronological.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyTrendChart {
    /// Month labels (`YYYY-MM`).
    pub months: Vec<String>,
    /// Revenue per month.
    pub revenue: Vec<Decimal>,
    /// Margin per month.
    pub margin: Vec<Decimal>,
}

/// One row of the product ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRanking {
    /// Product (subcategory) label.
    pub product: String,
    /// Revenue attributed to the product.
    pub revenue: Decimal,
    /// Units sold.
    pub units: i64,
}

/// Margin performance of one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMargin {
    /// Category label.
    pub category: String,
    /// Revenue in the category.
    pub revenue: Decimal,
    /// Margin in the category.
    pub margin: Decimal,
    /// Margin as a percentage of revenue.
    pub margin_percent: Decimal,
}

/// The commercial view: sales, margin, and client performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommercialView {
    /// Headline KPIs.
    pub kpis: CommercialKpis,
    /// Revenue vs margin per category.
    pub category_performance: Vec<CategoryMargin>,
    /// Monthly revenue evolution per category.
    pub monthly_by_category: MonthlyCategoryChart,
    /// Revenue distribution across client segments.
    pub revenue_by_segment: Vec<BreakdownSlice>,
    /// Top 15 clients by revenue.
    pub top_clients: Vec<ClientRanking>,
    /// Top 10 executives by revenue.
    pub top_executives: Vec<ExecutivePerformance>,
}

/// Commercial KPI scalars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommercialKpis {
    /// Total revenue over the filtered sales.
    pub total_revenue: Decimal,
    /// Mean per-sale margin percentage.
    pub average_margin_percent: Decimal,
    /// Mean revenue per sale.
    pub average_ticket: Decimal,
    /// Mean discount percentage per sale.
    pub average_discount_percent: Decimal,
}

/// Monthly revenue series per category, on a shared month axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyCategoryChart {
    /// Month labels (`YYYY-MM`), chronological and shared by every series.
    pub months: Vec<String>,
    /// One revenue series per category, aligned with `months` (zero where a
    /// category had no sales that month).
    pub series: Vec<CategorySeries>,
}

/// One category's aligned monthly revenue series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySeries {
    /// Category label.
    pub category: String,
    /// Revenue per month, aligned with the chart's month axis.
    pub revenue: Vec<Decimal>,
}

/// One row of the client ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRanking {
    /// Client display name (falls back to the client id when the sale
    /// referenced an unknown client).
    pub client: String,
    /// Revenue attributed to the client.
    pub revenue: Decimal,
}

/// Sales performance of one executive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutivePerformance {
    /// Executive name.
    pub executive: String,
    /// Revenue closed.
    pub revenue: Decimal,
    /// Margin closed.
    pub margin: Decimal,
    /// Number of sales.
    pub sales_count: usize,
    /// Margin as a percentage of revenue.
    pub margin_percent: Decimal,
}

/// The operational view: inventory and receivable health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalView {
    /// Headline KPIs.
    pub kpis: OperationalKpis,
    /// Stock value and units per logistics center (current snapshot).
    pub inventory_by_center: Vec<CenterInventory>,
    /// Stock value distribution across categories (current snapshot).
    pub inventory_by_category: Vec<BreakdownSlice>,
    /// Stock value per snapshot cut-off date, chronological.
    pub inventory_trend: InventoryTrendChart,
    /// Receivable balance per collection state.
    pub receivable_status: Vec<BreakdownSlice>,
    /// Overdue balance per region, descending.
    pub overdue_by_region: Vec<RegionOverdue>,
    /// Overdue balance and document count per aging bucket.
    pub overdue_aging: Vec<AgingBucket>,
}

/// Operational KPI scalars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalKpis {
    /// Stock value in the current snapshot.
    pub inventory_value: Decimal,
    /// Units on hand in the current snapshot.
    pub stock_units: i64,
    /// Total outstanding receivable balance.
    pub receivables_balance: Decimal,
    /// Overdue balance as a percentage of the total balance.
    pub overdue_percent: Decimal,
}

/// Stock position of one logistics center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterInventory {
    /// Logistics center label.
    pub center: String,
    /// Stock value.
    pub value: Decimal,
    /// Units on hand.
    pub units: i64,
}

/// Stock value over snapshot cut-off dates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryTrendChart {
    /// Snapshot cut-off dates, chronological.
    pub dates: Vec<NaiveDate>,
    /// Stock value per cut-off date.
    pub value: Vec<Decimal>,
}

/// Overdue balance of one region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionOverdue {
    /// Region label.
    pub region: String,
    /// Overdue balance.
    pub balance: Decimal,
}

/// One overdue aging bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgingBucket {
    /// Bucket label (`1-30`, `31-60`, `61-90`, `90+`).
    pub label: String,
    /// Overdue balance in the bucket.
    pub balance: Decimal,
    /// Number of overdue documents in the bucket.
    pub documents: usize,
}
