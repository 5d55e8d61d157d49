//! Promo database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for promos table
#[derive(Debug, Clone, FromRow)]
pub struct PromoModel {
    pub id: i32,
    pub title: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub promo_code: String,
    pub date_cloture_game: NaiveDate,
}
