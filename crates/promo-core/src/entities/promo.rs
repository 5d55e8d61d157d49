//! Promo entity - one promotional operation from the retroplanning sheet

use chrono::NaiveDate;
use serde::Serialize;

/// Lifecycle status of a promo, stored verbatim in `promos.status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromoStatus {
    Upcoming,
    InProgress,
    Done,
}

impl PromoStatus {
    /// Derive the status of a promo running from `start` to `end` as seen on `today`.
    ///
    /// A promo whose end date has passed is done even if its start date is
    /// (inconsistently) in the future.
    pub fn from_dates(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if end < today {
            Self::Done
        } else if start > today {
            Self::Upcoming
        } else {
            Self::InProgress
        }
    }

    /// Database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "à venir",
            Self::InProgress => "en cours",
            Self::Done => "Terminé",
        }
    }

    /// Parse the database representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "à venir" => Some(Self::Upcoming),
            "en cours" => Some(Self::InProgress),
            "Terminé" => Some(Self::Done),
            _ => None,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl std::fmt::Display for PromoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Promo entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promo {
    pub title: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PromoStatus,
    /// `"{year}-{BCP number}"`
    pub promo_code: String,
    pub date_cloture_game: NaiveDate,
}

impl Promo {
    /// Create a promo, deriving its status relative to `today`
    pub fn new(
        title: Option<String>,
        promo_code: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        date_cloture_game: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        Self {
            title,
            start_date,
            end_date,
            status: PromoStatus::from_dates(start_date, end_date, today),
            promo_code,
            date_cloture_game,
        }
    }

    /// Build the promo code from the sheet's year and BCP columns
    pub fn compose_code(year: &str, bcp: &str) -> String {
        format!("{year}-{bcp}")
    }
}

/// Row counts produced by a full rebuild of the workflow tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub promos: u64,
    pub etapes: u64,
    pub sous_etapes: u64,
    pub closed_promos: u64,
    pub closed_etapes: u64,
    pub closed_sous_etapes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_from_dates() {
        let today = date(2025, 6, 15);

        assert_eq!(
            PromoStatus::from_dates(date(2025, 6, 1), date(2025, 6, 14), today),
            PromoStatus::Done
        );
        assert_eq!(
            PromoStatus::from_dates(date(2025, 6, 16), date(2025, 6, 30), today),
            PromoStatus::Upcoming
        );
        assert_eq!(
            PromoStatus::from_dates(date(2025, 6, 1), date(2025, 6, 30), today),
            PromoStatus::InProgress
        );
    }

    #[test]
    fn test_status_boundaries_are_in_progress() {
        let today = date(2025, 6, 15);

        // Starting today and ending today both count as running
        assert_eq!(
            PromoStatus::from_dates(today, date(2025, 6, 30), today),
            PromoStatus::InProgress
        );
        assert_eq!(
            PromoStatus::from_dates(date(2025, 6, 1), today, today),
            PromoStatus::InProgress
        );
    }

    #[test]
    fn test_past_end_wins_over_future_start() {
        let today = date(2025, 6, 15);
        let status = PromoStatus::from_dates(date(2025, 7, 1), date(2025, 6, 1), today);
        assert!(status.is_done());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(PromoStatus::Upcoming.as_str(), "à venir");
        assert_eq!(PromoStatus::InProgress.as_str(), "en cours");
        assert_eq!(PromoStatus::Done.to_string(), "Terminé");

        for status in [PromoStatus::Upcoming, PromoStatus::InProgress, PromoStatus::Done] {
            assert_eq!(PromoStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PromoStatus::parse("terminé"), None);
    }

    #[test]
    fn test_new_promo_derives_status() {
        let promo = Promo::new(
            Some("Catalogue été".to_string()),
            Promo::compose_code("2025", "12"),
            date(2025, 7, 1),
            date(2025, 7, 14),
            date(2025, 5, 20),
            date(2025, 6, 15),
        );

        assert_eq!(promo.promo_code, "2025-12");
        assert_eq!(promo.status, PromoStatus::Upcoming);
    }
}
