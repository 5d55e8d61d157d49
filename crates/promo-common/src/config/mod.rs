//! Configuration structs

mod app_config;
mod database;

pub use app_config::{AppConfig, AppSettings, ConfigError, Environment, SyncConfig};
pub use database::{ConnectionSource, DatabaseConfig, TransportSecurity, FALLBACK_DATABASE_URL};
