//! # promo-db
//!
//! Database layer implementing the promo repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool construction from a resolved [`DatabaseConfig`]
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - The transactional rebuild of the promo workflow tables
//!
//! ## Usage
//!
//! ```rust,ignore
//! use promo_common::DatabaseConfig;
//! use promo_db::{create_pool, PgPromoRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config)?;
//!     let repo = PgPromoRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```
//!
//! [`DatabaseConfig`]: promo_common::DatabaseConfig

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{connect_options, connect_pool, create_pool, create_pool_from_env, ssl_mode, PgPool};
pub use repositories::PgPromoRepository;
