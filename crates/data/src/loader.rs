//! CSV table loading.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use andina_core::tables::Dataset;
use andina_shared::config::DataConfig;
use andina_shared::types::ClientId;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::rows::{ClientRow, ImportRow, InventoryRow, ProductRow, ReceivableRow, SaleRow};

/// Reads all well-formed rows from a CSV reader.
///
/// Malformed rows are skipped with a warning; they never abort the load.
pub fn read_rows<T: DeserializeOwned, R: Read>(reader: R, table: &str) -> Vec<T> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!(table, error = %err, "skipping malformed row");
            }
        }
    }
    rows
}

/// Reads all well-formed rows from a CSV file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be opened. This is the one
/// fatal load condition: a dashboard without its input tables cannot start.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let table = path
        .file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_rows(file, &table))
}

/// Loads the six CSV tables into an immutable [`Dataset`].
///
/// Client names are joined onto sales by client id, mirroring the dashboard's
/// client enrichment; sales referencing an unknown client keep
/// `client_name = None`.
///
/// # Errors
///
/// Returns an error when any of the six files cannot be read.
pub fn load_dataset(config: &DataConfig) -> Result<Dataset, LoadError> {
    let sale_rows: Vec<SaleRow> = read_table(&config.sales_path())?;
    let client_rows: Vec<ClientRow> = read_table(&config.clients_path())?;
    let inventory_rows: Vec<InventoryRow> = read_table(&config.inventory_path())?;
    let receivable_rows: Vec<ReceivableRow> = read_table(&config.receivables_path())?;
    let product_rows: Vec<ProductRow> = read_table(&config.products_path())?;
    let import_rows: Vec<ImportRow> = read_table(&config.imports_path())?;

    let names_by_client: HashMap<ClientId, String> = client_rows
        .iter()
        .map(|c| (ClientId::new(c.id.clone()), c.name.clone()))
        .collect();

    let dataset = Dataset {
        sales: sale_rows
            .into_iter()
            .map(|row| {
                let name = names_by_client.get(&ClientId::new(row.client_id.clone())).cloned();
                row.into_record(name)
            })
            .collect(),
        clients: client_rows.into_iter().map(Into::into).collect(),
        inventory: inventory_rows.into_iter().map(Into::into).collect(),
        receivables: receivable_rows.into_iter().map(Into::into).collect(),
        products: product_rows.into_iter().map(Into::into).collect(),
        imports: import_rows.into_iter().map(Into::into).collect(),
    };

    let summary = dataset.summary();
    info!(
        sales = summary.sales,
        clients = summary.clients,
        inventory = summary.inventory,
        receivables = summary.receivables,
        products = summary.products,
        imports = summary.imports,
        "dataset loaded"
    );
    if let Some(bounds) = dataset.date_bounds() {
        info!(start = %bounds.start, end = %bounds.end, "sales date range");
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SALES_CSV: &str = "\
venta_id,fecha,categoria,subcategoria,region,segmento,cliente_id,ejecutivo,cantidad,subtotal_cop,margen_total_cop,descuento_pct
VEN-1,2024-01-10,Tech,Laptops,Caribe,Corporativo,CL-0001,A. Rojas,2,100,40,5
VEN-2,2023-05-01,Tools,Taladros,Pacifico,Pyme,CL-0002,B. Mora,1,50,10,0
";

    #[test]
    fn test_read_rows_parses_spanish_headers() {
        let rows: Vec<SaleRow> = read_rows(SALES_CSV.as_bytes(), "ventas");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "VEN-1");
        assert_eq!(rows[0].category, "Tech");
        assert_eq!(rows[0].revenue, dec!(100));
        assert_eq!(rows[1].discount_percent, dec!(0));
    }

    #[test]
    fn test_read_rows_skips_malformed_rows() {
        let csv = "\
venta_id,fecha,categoria,subcategoria,region,segmento,cliente_id,ejecutivo,cantidad,subtotal_cop,margen_total_cop,descuento_pct
VEN-1,2024-01-10,Tech,Laptops,Caribe,Corporativo,CL-0001,A. Rojas,2,100,40,5
VEN-2,not-a-date,Tools,Taladros,Pacifico,Pyme,CL-0002,B. Mora,1,50,10,0
VEN-3,2024-02-01,Tech,Monitores,Andina,Gobierno,CL-0003,C. Paz,una,300,60,0
VEN-4,2024-03-01,Hogar,Neveras,Caribe,Pyme,CL-0001,A. Rojas,1,900,90,2
";
        let rows: Vec<SaleRow> = read_rows(csv.as_bytes(), "ventas");

        // The bad date and the non-numeric quantity rows are dropped.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "VEN-1");
        assert_eq!(rows[1].id, "VEN-4");
    }

    #[test]
    fn test_import_arrival_date_may_be_empty() {
        let csv = "\
importacion_id,fecha_orden,fecha_llegada,proveedor,categoria,valor_cop
IMP-1,2024-01-05,2024-02-20,Shenzhen Electronics,Tech,50000
IMP-2,2024-03-01,,Shenzhen Electronics,Tech,30000
";
        let rows: Vec<ImportRow> = read_rows(csv.as_bytes(), "importaciones");

        assert_eq!(rows.len(), 2);
        assert!(rows[0].arrival_date.is_some());
        assert!(rows[1].arrival_date.is_none());
    }

    #[test]
    fn test_client_join_fills_names() {
        let clients: Vec<ClientRow> = read_rows(
            "\
cliente_id,nombre_cliente,tamano_cliente,segmento,region,estado,fecha_alta
CL-0001,Comercial del Norte,Mediana,Corporativo,Caribe,Activo,2022-03-01
"
            .as_bytes(),
            "clientes",
        );
        let sales: Vec<SaleRow> = read_rows(SALES_CSV.as_bytes(), "ventas");

        let names: HashMap<ClientId, String> = clients
            .iter()
            .map(|c| (ClientId::new(c.id.clone()), c.name.clone()))
            .collect();

        let records: Vec<_> = sales
            .into_iter()
            .map(|row| {
                let name = names.get(&ClientId::new(row.client_id.clone())).cloned();
                row.into_record(name)
            })
            .collect();

        assert_eq!(
            records[0].client_name.as_deref(),
            Some("Comercial del Norte")
        );
        // CL-0002 is not in the clients table.
        assert!(records[1].client_name.is_none());
    }
}
