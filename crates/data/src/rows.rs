//! Raw CSV row structs.
//!
//! The exports use Spanish column headers; these structs map them onto the
//! core record fields. Conversions never fail: anything serde could not
//! parse was already rejected row-by-row in the loader.

use andina_core::tables::types::{
    ClientRecord, ImportRecord, InventoryRecord, ProductRecord, ReceivableRecord, SaleRecord,
};
use andina_shared::types::{ClientId, ImportId, ProductId, SaleId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One row of `ventas_andina.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRow {
    /// `venta_id` column.
    #[serde(rename = "venta_id")]
    pub id: String,
    /// `fecha` column.
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// `categoria` column.
    #[serde(rename = "categoria")]
    pub category: String,
    /// `subcategoria` column.
    #[serde(rename = "subcategoria")]
    pub subcategory: String,
    /// `region` column.
    pub region: String,
    /// `segmento` column.
    #[serde(rename = "segmento")]
    pub segment: String,
    /// `cliente_id` column.
    #[serde(rename = "cliente_id")]
    pub client_id: String,
    /// `ejecutivo` column.
    #[serde(rename = "ejecutivo")]
    pub executive: String,
    /// `cantidad` column.
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    /// `subtotal_cop` column.
    #[serde(rename = "subtotal_cop")]
    pub revenue: Decimal,
    /// `margen_total_cop` column.
    #[serde(rename = "margen_total_cop")]
    pub margin: Decimal,
    /// `descuento_pct` column.
    #[serde(rename = "descuento_pct")]
    pub discount_percent: Decimal,
}

impl SaleRow {
    /// Converts the row, attaching the client name resolved from the
    /// clients table.
    #[must_use]
    pub fn into_record(self, client_name: Option<String>) -> SaleRecord {
        SaleRecord {
            id: SaleId::new(self.id),
            date: self.date,
            category: self.category,
            subcategory: self.subcategory,
            region: self.region,
            segment: self.segment,
            client_id: ClientId::new(self.client_id),
            client_name,
            executive: self.executive,
            quantity: self.quantity,
            revenue: self.revenue,
            margin: self.margin,
            discount_percent: self.discount_percent,
        }
    }
}

/// One row of `clientes_andina.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientRow {
    /// `cliente_id` column.
    #[serde(rename = "cliente_id")]
    pub id: String,
    /// `nombre_cliente` column.
    #[serde(rename = "nombre_cliente")]
    pub name: String,
    /// `tamano_cliente` column.
    #[serde(rename = "tamano_cliente")]
    pub size: String,
    /// `segmento` column.
    #[serde(rename = "segmento")]
    pub segment: String,
    /// `region` column.
    pub region: String,
    /// `estado` column.
    #[serde(rename = "estado")]
    pub status: String,
    /// `fecha_alta` column.
    #[serde(rename = "fecha_alta")]
    pub signup_date: NaiveDate,
}

impl From<ClientRow> for ClientRecord {
    fn from(row: ClientRow) -> Self {
        Self {
            id: ClientId::new(row.id),
            name: row.name,
            size: row.size,
            segment: row.segment,
            region: row.region,
            status: row.status,
            signup_date: row.signup_date,
        }
    }
}

/// One row of `inventario_andina.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryRow {
    /// `centro_logistico` column.
    #[serde(rename = "centro_logistico")]
    pub center: String,
    /// `categoria` column.
    #[serde(rename = "categoria")]
    pub category: String,
    /// `subcategoria` column.
    #[serde(rename = "subcategoria")]
    pub subcategory: String,
    /// `stock_unidades` column.
    #[serde(rename = "stock_unidades")]
    pub units: i64,
    /// `valor_inventario_cop` column.
    #[serde(rename = "valor_inventario_cop")]
    pub value: Decimal,
    /// `fecha_corte` column.
    #[serde(rename = "fecha_corte")]
    pub as_of: NaiveDate,
}

impl From<InventoryRow> for InventoryRecord {
    fn from(row: InventoryRow) -> Self {
        Self {
            center: row.center,
            category: row.category,
            subcategory: row.subcategory,
            units: row.units,
            value: row.value,
            as_of: row.as_of,
        }
    }
}

/// One row of `cartera_andina.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceivableRow {
    /// `fecha_factura` column.
    #[serde(rename = "fecha_factura")]
    pub invoice_date: NaiveDate,
    /// `fecha_vencimiento` column.
    #[serde(rename = "fecha_vencimiento")]
    pub due_date: NaiveDate,
    /// `region` column.
    pub region: String,
    /// `cliente_id` column.
    #[serde(rename = "cliente_id")]
    pub client_id: String,
    /// `saldo_cop` column.
    #[serde(rename = "saldo_cop")]
    pub balance: Decimal,
    /// `dias_mora` column.
    #[serde(rename = "dias_mora")]
    pub days_overdue: i32,
    /// `estado` column.
    #[serde(rename = "estado")]
    pub status: String,
}

impl From<ReceivableRow> for ReceivableRecord {
    fn from(row: ReceivableRow) -> Self {
        Self {
            invoice_date: row.invoice_date,
            due_date: row.due_date,
            region: row.region,
            client_id: ClientId::new(row.client_id),
            balance: row.balance,
            days_overdue: row.days_overdue,
            status: row.status,
        }
    }
}

/// One row of `productos_andina.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    /// `producto_id` column.
    #[serde(rename = "producto_id")]
    pub id: String,
    /// `nombre_producto` column.
    #[serde(rename = "nombre_producto")]
    pub name: String,
    /// `categoria` column.
    #[serde(rename = "categoria")]
    pub category: String,
    /// `subcategoria` column.
    #[serde(rename = "subcategoria")]
    pub subcategory: String,
}

impl From<ProductRow> for ProductRecord {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            category: row.category,
            subcategory: row.subcategory,
        }
    }
}

/// One row of `importaciones_andina.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRow {
    /// `importacion_id` column.
    #[serde(rename = "importacion_id")]
    pub id: String,
    /// `fecha_orden` column.
    #[serde(rename = "fecha_orden")]
    pub order_date: NaiveDate,
    /// `fecha_llegada` column; empty while the order is in transit.
    #[serde(rename = "fecha_llegada")]
    pub arrival_date: Option<NaiveDate>,
    /// `proveedor` column.
    #[serde(rename = "proveedor")]
    pub supplier: String,
    /// `categoria` column.
    #[serde(rename = "categoria")]
    pub category: String,
    /// `valor_cop` column.
    #[serde(rename = "valor_cop")]
    pub value: Decimal,
}

impl From<ImportRow> for ImportRecord {
    fn from(row: ImportRow) -> Self {
        Self {
            id: ImportId::new(row.id),
            order_date: row.order_date,
            arrival_date: row.arrival_date,
            supplier: row.supplier,
            category: row.category,
            value: row.value,
        }
    }
}
