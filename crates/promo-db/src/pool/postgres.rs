//! PostgreSQL connection pool management

use std::str::FromStr;

use promo_common::{DatabaseConfig, TransportSecurity};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::info;

/// SSL mode enforcing a transport security policy
///
/// `Require` negotiates TLS but accepts any server certificate.
pub fn ssl_mode(security: TransportSecurity) -> PgSslMode {
    match security {
        TransportSecurity::Disabled => PgSslMode::Disable,
        TransportSecurity::EncryptedUnverified => PgSslMode::Require,
    }
}

/// Connection options for `config`
///
/// The configured transport security replaces any `sslmode` given in the URL.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.url)?;
    Ok(options.ssl_mode(ssl_mode(config.transport_security)))
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
}

/// Create a new PostgreSQL connection pool without connecting
///
/// Connections are opened on first use, so unreachable hosts and rejected
/// credentials surface from the first query. Must be called within a Tokio
/// runtime.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;

    info!(
        url = %config.redacted_url(),
        transport_security = %config.transport_security,
        max_connections = config.max_connections,
        "Database pool configured"
    );

    Ok(pool_options(config).connect_lazy_with(options))
}

/// Create a connection pool and open its first connection
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    let pool = pool_options(config).connect_with(options).await?;

    info!(
        url = %config.redacted_url(),
        transport_security = %config.transport_security,
        "Connected to database"
    );

    Ok(pool)
}

/// Create a connection pool from the DATABASE_URL environment variable
pub fn create_pool_from_env() -> Result<PgPool, sqlx::Error> {
    let config = DatabaseConfig::from_env();
    create_pool(&config)
}
