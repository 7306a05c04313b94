//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Input data configuration.
    #[serde(default)]
    pub data: DataConfig,
}

/// Input data configuration.
///
/// Points at the directory holding the six CSV tables. File names default to
/// the canonical Andina exports and can be overridden per environment.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory containing the CSV tables.
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Sales table file name.
    #[serde(default = "default_sales_file")]
    pub sales_file: String,
    /// Clients table file name.
    #[serde(default = "default_clients_file")]
    pub clients_file: String,
    /// Inventory table file name.
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,
    /// Receivables table file name.
    #[serde(default = "default_receivables_file")]
    pub receivables_file: String,
    /// Products table file name.
    #[serde(default = "default_products_file")]
    pub products_file: String,
    /// Imports table file name.
    #[serde(default = "default_imports_file")]
    pub imports_file: String,
}

fn default_dir() -> String {
    "tablas".to_string()
}

fn default_sales_file() -> String {
    "ventas_andina.csv".to_string()
}

fn default_clients_file() -> String {
    "clientes_andina.csv".to_string()
}

fn default_inventory_file() -> String {
    "inventario_andina.csv".to_string()
}

fn default_receivables_file() -> String {
    "cartera_andina.csv".to_string()
}

fn default_products_file() -> String {
    "productos_andina.csv".to_string()
}

fn default_imports_file() -> String {
    "importaciones_andina.csv".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            sales_file: default_sales_file(),
            clients_file: default_clients_file(),
            inventory_file: default_inventory_file(),
            receivables_file: default_receivables_file(),
            products_file: default_products_file(),
            imports_file: default_imports_file(),
        }
    }
}

impl DataConfig {
    /// Full path to the sales table.
    #[must_use]
    pub fn sales_path(&self) -> PathBuf {
        self.join(&self.sales_file)
    }

    /// Full path to the clients table.
    #[must_use]
    pub fn clients_path(&self) -> PathBuf {
        self.join(&self.clients_file)
    }

    /// Full path to the inventory table.
    #[must_use]
    pub fn inventory_path(&self) -> PathBuf {
        self.join(&self.inventory_file)
    }

    /// Full path to the receivables table.
    #[must_use]
    pub fn receivables_path(&self) -> PathBuf {
        self.join(&self.receivables_file)
    }

    /// Full path to the products table.
    #[must_use]
    pub fn products_path(&self) -> PathBuf {
        self.join(&self.products_file)
    }

    /// Full path to the imports table.
    #[must_use]
    pub fn imports_path(&self) -> PathBuf {
        self.join(&self.imports_file)
    }

    fn join(&self, file: &str) -> PathBuf {
        PathBuf::from(&self.dir).join(file)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ANDINA").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
