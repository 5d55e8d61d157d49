//! Promo model -> entity mapper

use promo_core::entities::{Promo, PromoStatus};
use promo_core::error::DomainError;

use crate::models::PromoModel;

/// Convert PromoModel to Promo entity
///
/// Fails on a status the workflow does not know about.
impl TryFrom<PromoModel> for Promo {
    type Error = DomainError;

    fn try_from(model: PromoModel) -> Result<Self, Self::Error> {
        let status = PromoStatus::parse(&model.status).ok_or_else(|| {
            DomainError::InvalidPromo(format!(
                "promo {} has unknown status {:?}",
                model.id, model.status
            ))
        })?;

        Ok(Promo {
            title: model.title,
            start_date: model.start_date,
            end_date: model.end_date,
            status,
            promo_code: model.promo_code,
            date_cloture_game: model.date_cloture_game,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn model(status: &str) -> PromoModel {
        PromoModel {
            id: 7,
            title: Some("Rentrée".to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            status: status.to_string(),
            promo_code: "2025-31".to_string(),
            date_cloture_game: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let promo = Promo::try_from(model("en cours")).unwrap();
        assert_eq!(promo.status, PromoStatus::InProgress);
        assert_eq!(promo.promo_code, "2025-31");
        assert_eq!(promo.title.as_deref(), Some("Rentrée"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = Promo::try_from(model("annulé")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPromo(_)));
        assert!(err.to_string().contains("promo 7"));
    }
}
