//! Database connection pool management

mod postgres;

pub use postgres::{connect_options, connect_pool, create_pool, create_pool_from_env, ssl_mode};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
