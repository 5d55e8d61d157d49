//! Database models

mod promo;

pub use promo::PromoModel;
