//! Operational entrypoint for the market backend.
//!
//! Connects to the database, ensures the schema exists, seeds the catalog
//! from `config.toml` when present, and dumps the current popularity
//! report. The HTTP surface lives outside this crate and calls into
//! [`marketplace::core`] through the same functions used here.

use dotenvy::dotenv;
use marketplace::{config, core, errors::Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Env vars can also be set externally, so a missing .env is fine
    dotenv().ok();

    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    match config::catalog::load_default_config() {
        Ok(catalog) => {
            config::database::seed_initial_catalog(&db, &catalog).await?;
            info!("Catalog seeded from config.toml.");
        }
        Err(e) => warn!("Skipping catalog seeding: {e}"),
    }

    let report = core::report::get_popular_items_report(&db).await?;
    if report.is_empty() {
        info!("Ledger is empty; nothing to report.");
    } else {
        for row in &report {
            info!(
                year = row.year,
                item = %row.item_name,
                popularity = row.purchase_count,
                "popular item"
            );
        }
    }

    Ok(())
}
