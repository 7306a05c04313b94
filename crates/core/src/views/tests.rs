//! Tests for view assembly.

use andina_shared::types::{ClientId, SaleId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::ViewService;
use crate::tables::types::{ClientRecord, InventoryRecord, ReceivableRecord, SaleRecord};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct SaleSpec {
    date: NaiveDate,
    category: &'static str,
    subcategory: &'static str,
    client: &'static str,
    executive: &'static str,
    revenue: Decimal,
    margin: Decimal,
}

fn sale(spec: &SaleSpec) -> SaleRecord {
    SaleRecord {
        id: SaleId::from("VEN-000001"),
        date: spec.date,
        category: spec.category.to_string(),
        subcategory: spec.subcategory.to_string(),
        region: "Caribe".to_string(),
        segment: "Corporativo".to_string(),
        client_id: ClientId::from("CL-0001"),
        client_name: Some(spec.client.to_string()),
        executive: spec.executive.to_string(),
        quantity: 1,
        revenue: spec.revenue,
        margin: spec.margin,
        discount_percent: dec!(10),
    }
}

fn receivable(region: &str, balance: Decimal, days_overdue: i32, status: &str) -> ReceivableRecord {
    ReceivableRecord {
        invoice_date: date(2024, 2, 1),
        due_date: date(2024, 3, 2),
        region: region.to_string(),
        client_id: ClientId::from("CL-0001"),
        balance,
        days_overdue,
        status: status.to_string(),
    }
}

fn stock(center: &str, category: &str, units: i64, value: Decimal, as_of: NaiveDate) -> InventoryRecord {
    InventoryRecord {
        center: center.to_string(),
        category: category.to_string(),
        subcategory: "Laptops".to_string(),
        units,
        value,
        as_of,
    }
}

fn client(id: &str, status: &str) -> ClientRecord {
    ClientRecord {
        id: ClientId::from(id),
        name: format!("Cliente {id}"),
        size: "Mediana".to_string(),
        segment: "Corporativo".to_string(),
        region: "Caribe".to_string(),
        status: status.to_string(),
        signup_date: date(2022, 7, 1),
    }
}

fn sample_sales() -> Vec<SaleRecord> {
    [
        SaleSpec {
            date: date(2024, 1, 10),
            category: "Tech",
            subcategory: "Laptops",
            client: "Norte SA",
            executive: "A. Rojas",
            revenue: dec!(100),
            margin: dec!(40),
        },
        SaleSpec {
            date: date(2024, 1, 20),
            category: "Tools",
            subcategory: "Taladros",
            client: "Sur SA",
            executive: "B. Mora",
            revenue: dec!(200),
            margin: dec!(20),
        },
        SaleSpec {
            date: date(2024, 2, 5),
            category: "Tech",
            subcategory: "Monitores",
            client: "Norte SA",
            executive: "A. Rojas",
            revenue: dec!(300),
            margin: dec!(60),
        },
    ]
    .iter()
    .map(sale)
    .collect()
}

#[test]
fn test_managerial_kpis() {
    let receivables = vec![
        receivable("Caribe", dec!(500), 15, "Vencida"),
        receivable("Andina", dec!(300), 0, "Al día"),
    ];
    let clients = vec![
        client("CL-0001", "Activo"),
        client("CL-0002", "Inactivo"),
        client("CL-0003", "Activo"),
    ];

    let view = ViewService::managerial(&sample_sales(), &receivables, &clients);

    assert_eq!(view.kpis.total_revenue, dec!(600));
    assert_eq!(view.kpis.total_margin, dec!(120));
    assert_eq!(view.kpis.active_clients, 2);
    assert_eq!(view.kpis.overdue_balance, dec!(500));
}

#[test]
fn test_managerial_monthly_trend_is_chronological() {
    let view = ViewService::managerial(&sample_sales(), &[], &[]);

    assert_eq!(view.monthly_trend.months, vec!["2024-01", "2024-02"]);
    assert_eq!(view.monthly_trend.revenue, vec![dec!(300), dec!(300)]);
    assert_eq!(view.monthly_trend.margin, vec![dec!(60), dec!(60)]);
}

#[test]
fn test_managerial_top_products_ranked_by_revenue() {
    let view = ViewService::managerial(&sample_sales(), &[], &[]);

    let products: Vec<&str> = view
        .top_products
        .iter()
        .map(|p| p.product.as_str())
        .collect();
    assert_eq!(products, vec!["Monitores", "Taladros", "Laptops"]);
    assert_eq!(view.top_products[0].revenue, dec!(300));
    assert_eq!(view.top_products[0].units, 1);
}

#[test]
fn test_commercial_kpis() {
    let view = ViewService::commercial(&sample_sales());

    assert_eq!(view.kpis.total_revenue, dec!(600));
    assert_eq!(view.kpis.average_ticket, dec!(200));
    assert_eq!(view.kpis.average_discount_percent, dec!(10));
    // Per-sale margins: 40%, 10%, 20%.
    assert_eq!(view.kpis.average_margin_percent, dec!(23.33));
}

#[test]
fn test_commercial_category_performance() {
    let view = ViewService::commercial(&sample_sales());

    let tech = view
        .category_performance
        .iter()
        .find(|c| c.category == "Tech")
        .unwrap();
    assert_eq!(tech.revenue, dec!(400));
    assert_eq!(tech.margin, dec!(100));
    assert_eq!(tech.margin_percent, dec!(25));
}

#[test]
fn test_commercial_monthly_by_category_aligns_series() {
    let view = ViewService::commercial(&sample_sales());
    let chart = &view.monthly_by_category;

    assert_eq!(chart.months, vec!["2024-01", "2024-02"]);
    let tools = chart.series.iter().find(|s| s.category == "Tools").unwrap();
    // Tools sold in January only; February is zero-filled.
    assert_eq!(tools.revenue, vec![dec!(200), Decimal::ZERO]);
}

#[test]
fn test_commercial_rankings() {
    let view = ViewService::commercial(&sample_sales());

    assert_eq!(view.top_clients[0].client, "Norte SA");
    assert_eq!(view.top_clients[0].revenue, dec!(400));

    assert_eq!(view.top_executives[0].executive, "A. Rojas");
    assert_eq!(view.top_executives[0].sales_count, 2);
    assert_eq!(view.top_executives[0].margin_percent, dec!(25));
}

#[test]
fn test_operational_uses_latest_snapshot() {
    let inventory = vec![
        stock("Bogotá", "Tech", 10, dec!(1000), date(2024, 5, 31)),
        stock("Bogotá", "Tech", 12, dec!(1200), date(2024, 6, 30)),
        stock("Cali", "Tools", 5, dec!(500), date(2024, 6, 30)),
    ];

    let view = ViewService::operational(&inventory, &[]);

    // Only the 2024-06-30 snapshot counts for stock KPIs.
    assert_eq!(view.kpis.inventory_value, dec!(1700));
    assert_eq!(view.kpis.stock_units, 17);
    assert_eq!(view.inventory_by_center.len(), 2);

    // The trend still covers both cut-off dates.
    assert_eq!(
        view.inventory_trend.dates,
        vec![date(2024, 5, 31), date(2024, 6, 30)]
    );
    assert_eq!(view.inventory_trend.value, vec![dec!(1000), dec!(1700)]);
}

#[test]
fn test_operational_receivable_health() {
    let receivables = vec![
        receivable("Caribe", dec!(400), 45, "Vencida"),
        receivable("Caribe", dec!(100), 10, "Vencida"),
        receivable("Andina", dec!(500), 0, "Al día"),
    ];

    let view = ViewService::operational(&[], &receivables);

    assert_eq!(view.kpis.receivables_balance, dec!(1000));
    assert_eq!(view.kpis.overdue_percent, dec!(50));

    assert_eq!(view.overdue_by_region.len(), 1);
    assert_eq!(view.overdue_by_region[0].region, "Caribe");
    assert_eq!(view.overdue_by_region[0].balance, dec!(500));

    let by_label: Vec<(&str, Decimal, usize)> = view
        .overdue_aging
        .iter()
        .map(|b| (b.label.as_str(), b.balance, b.documents))
        .collect();
    assert_eq!(
        by_label,
        vec![
            ("1-30", dec!(100), 1),
            ("31-60", dec!(400), 1),
            ("61-90", Decimal::ZERO, 0),
            ("90+", Decimal::ZERO, 0),
        ]
    );
}

#[test]
fn test_empty_input_yields_zero_kpis_and_empty_series() {
    let managerial = ViewService::managerial(&[], &[], &[]);
    assert_eq!(managerial.kpis.total_revenue, Decimal::ZERO);
    assert_eq!(managerial.kpis.active_clients, 0);
    assert!(managerial.monthly_trend.months.is_empty());
    assert!(managerial.top_products.is_empty());
    assert!(managerial.revenue_by_region.is_empty());

    let commercial = ViewService::commercial(&[]);
    assert_eq!(commercial.kpis.average_ticket, Decimal::ZERO);
    assert_eq!(commercial.kpis.average_margin_percent, Decimal::ZERO);
    assert!(commercial.top_clients.is_empty());
    assert!(commercial.monthly_by_category.months.is_empty());

    let operational = ViewService::operational(&[], &[]);
    assert_eq!(operational.kpis.inventory_value, Decimal::ZERO);
    assert_eq!(operational.kpis.stock_units, 0);
    assert_eq!(operational.kpis.overdue_percent, Decimal::ZERO);
    assert!(operational.inventory_by_center.is_empty());
    assert!(operational.inventory_trend.dates.is_empty());
}
