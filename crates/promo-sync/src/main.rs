//! Promo sync entry point
//!
//! Run with:
//! ```bash
//! cargo run -p promo-sync
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.
//! The sync report is printed to stdout as JSON.

use promo_common::{
    try_init_tracing_with_config, AppConfig, AppError, AppResult, Environment, TracingConfig,
};
use promo_db::{connect_pool, PgPromoRepository};
use promo_sync::{source_for, SyncService};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // APP_ENV picks the log format, and tracing must be up before
    // AppConfig::from_env logs. Its own .env load then keeps these values.
    let _ = dotenvy::dotenv();

    let tracing_config = std::env::var("APP_ENV")
        .ok()
        .and_then(|env| Environment::parse(&env).ok())
        .map_or_else(TracingConfig::default, TracingConfig::for_environment);

    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(code = e.error_code(), error = %e, "Promo sync failed");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> AppResult<()> {
    info!("Starting promo sync...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        database = %config.database.redacted_url(),
        source = ?config.database.source,
        transport = %config.database.transport_security,
        "Configuration loaded"
    );

    let pool = connect_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let service = SyncService::new(source_for(&config.sync), PgPromoRepository::new(pool.clone()));
    let result = service.run(chrono::Local::now().date_naive()).await;
    pool.close().await;
    let report = result?;

    info!(
        promos = report.promos,
        etapes = report.etapes,
        sous_etapes = report.sous_etapes,
        closed_promos = report.closed_promos,
        "Promo sync finished"
    );

    let json = serde_json::to_string_pretty(&report).map_err(AppError::internal)?;
    println!("{json}");

    Ok(())
}
