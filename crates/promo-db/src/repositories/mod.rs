//! Repository implementations

mod error;
mod promo;

pub use promo::PgPromoRepository;
