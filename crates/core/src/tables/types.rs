//! Record types for the six dataset tables.

use andina_shared::types::{ClientId, ImportId, ProductId, SaleId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single sales transaction line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Unique sale identifier.
    pub id: SaleId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Product category.
    pub category: String,
    /// Product subcategory (the product-level grouping for rankings).
    pub subcategory: String,
    /// Sales region.
    pub region: String,
    /// Client segment.
    pub segment: String,
    /// Client that bought.
    pub client_id: ClientId,
    /// Client display name, joined from the clients table at load.
    /// `None` when the sale references an unknown client.
    pub client_name: Option<String>,
    /// Sales executive who closed the sale.
    pub executive: String,
    /// Units sold.
    pub quantity: i64,
    /// Revenue in COP (`subtotal_cop`).
    pub revenue: Decimal,
    /// Margin in COP (`margen_total_cop`).
    pub margin: Decimal,
    /// Discount applied, in percent.
    pub discount_percent: Decimal,
}

impl SaleRecord {
    /// Margin as a percentage of revenue, rounded to 2 decimals.
    ///
    /// Returns zero for zero-revenue rows rather than dividing by zero.
    #[must_use]
    pub fn margin_percent(&self) -> Decimal {
        if self.revenue.is_zero() {
            Decimal::ZERO
        } else {
            (self.margin / self.revenue * Decimal::ONE_HUNDRED).round_dp(2)
        }
    }

    /// Calendar-month grouping key, `YYYY-MM`.
    ///
    /// Keys sort lexicographically in chronological order.
    #[must_use]
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// A client master record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Unique client identifier.
    pub id: ClientId,
    /// Client display name.
    pub name: String,
    /// Client size bracket.
    pub size: String,
    /// Client segment.
    pub segment: String,
    /// Home region.
    pub region: String,
    /// Account status (`Activo` / `Inactivo`).
    pub status: String,
    /// Date the client was signed up.
    pub signup_date: NaiveDate,
}

impl ClientRecord {
    /// Returns true if the client account is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "Activo"
    }
}

/// A stock position in one logistics center at one cut-off date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Logistics center holding the stock.
    pub center: String,
    /// Product category.
    pub category: String,
    /// Product subcategory.
    pub subcategory: String,
    /// Units on hand.
    pub units: i64,
    /// Stock value in COP.
    pub value: Decimal,
    /// Snapshot cut-off date. Not a filter dimension: inventory is never
    /// date-filtered, the latest cut-off defines the current snapshot.
    pub as_of: NaiveDate,
}

/// An open receivable document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivableRecord {
    /// Invoice date (the date the range filter applies to).
    pub invoice_date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Region of the invoiced client.
    pub region: String,
    /// Invoiced client.
    pub client_id: ClientId,
    /// Outstanding balance in COP.
    pub balance: Decimal,
    /// Days past due. Zero or negative means current.
    pub days_overdue: i32,
    /// Collection state as exported (`Al día`, `Vencida`, ...), used for the
    /// status breakdown.
    pub status: String,
}

impl ReceivableRecord {
    /// Returns true if the document is past due.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.days_overdue > 0
    }
}

/// A product catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product display name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Product subcategory.
    pub subcategory: String,
}

/// An import purchase order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRecord {
    /// Unique import order identifier.
    pub id: ImportId,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Date the goods arrived, when known.
    pub arrival_date: Option<NaiveDate>,
    /// Supplier name.
    pub supplier: String,
    /// Product category ordered.
    pub category: String,
    /// Order value in COP.
    pub value: Decimal,
}
