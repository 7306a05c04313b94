//! Andina dashboard snapshot tool
//!
//! Loads the six CSV tables, computes the three dashboard views for the full
//! date range with no dimension restrictions, and prints the snapshot as
//! JSON. Rendering layers consume the same structures through the library
//! crates.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use andina_core::dashboard::DashboardService;
use andina_core::filter::FilterSelection;
use andina_data::load_dataset;
use andina_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "andina=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Load the dataset once; it stays read-only from here on
    let dataset = load_dataset(&config.data)?;

    let bounds = dataset
        .date_bounds()
        .context("sales table has no rows, nothing to render")?;
    info!(
        categories = dataset.categories().len(),
        regions = dataset.regions().len(),
        segments = dataset.segments().len(),
        centers = dataset.centers().len(),
        "filter options ready"
    );

    let selection = FilterSelection::new(bounds);
    let snapshot = DashboardService::snapshot(&dataset, &selection);

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
