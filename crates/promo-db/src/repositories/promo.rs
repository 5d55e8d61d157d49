//! PostgreSQL implementation of PromoRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{error, info, instrument, warn};

use promo_core::entities::{Promo, PromoStatus, StepStatus, StepTemplate, SyncReport};
use promo_core::traits::{PromoRepository, RepoResult};

use crate::models::PromoModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PromoRepository
#[derive(Clone)]
pub struct PgPromoRepository {
    pool: PgPool,
}

impl PgPromoRepository {
    /// Create a new PgPromoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn rebuild(
        tx: &mut Transaction<'_, Postgres>,
        promos: &[Promo],
        plan: &[StepTemplate],
    ) -> RepoResult<SyncReport> {
        let mut report = SyncReport::default();

        // 1. Promos
        sqlx::query("TRUNCATE TABLE promos RESTART IDENTITY CASCADE")
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        for promo in promos {
            sqlx::query(
                r#"
                INSERT INTO promos (title, start_date, end_date, status, promo_code, date_cloture_game)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(promo.title.as_deref())
            .bind(promo.start_date)
            .bind(promo.end_date)
            .bind(promo.status.as_str())
            .bind(&promo.promo_code)
            .bind(promo.date_cloture_game)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;
            report.promos += 1;
        }

        // 2. Etapes: every step of the plan for every promo
        sqlx::query("TRUNCATE TABLE etapes RESTART IDENTITY CASCADE")
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        let (step_names, intervenants) = step_columns(plan);
        report.etapes = sqlx::query(
            r#"
            INSERT INTO etapes (name, status, promo_id, intervenant_id)
            SELECT s.name, $3, p.id, s.intervenant_id
            FROM promos p
            CROSS JOIN UNNEST($1::text[], $2::int4[]) WITH ORDINALITY AS s(name, intervenant_id, ord)
            ORDER BY p.id, s.ord
            "#,
        )
        .bind(step_names)
        .bind(intervenants)
        .bind(StepStatus::ToDo.as_str())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        // 3. Sous-etapes, attached to their step by name
        sqlx::query("TRUNCATE TABLE sous_etapes RESTART IDENTITY CASCADE")
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        let (parents, sub_names, ordres) = sub_step_columns(plan);
        report.sous_etapes = sqlx::query(
            r#"
            INSERT INTO sous_etapes (name, status, etape_id, promo_id, ordre)
            SELECT ss.name, $4, e.id, e.promo_id, ss.ordre
            FROM etapes e
            JOIN UNNEST($1::text[], $2::text[], $3::int4[]) AS ss(etape_name, name, ordre)
              ON e.name = ss.etape_name
            ORDER BY e.id, ss.ordre
            "#,
        )
        .bind(parents)
        .bind(sub_names)
        .bind(ordres)
        .bind(StepStatus::ToDo.as_str())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        // 4. Close the workflow of finished promos
        report.closed_promos =
            sqlx::query("UPDATE promos SET status = $1 WHERE end_date < CURRENT_DATE")
                .bind(PromoStatus::Done.as_str())
                .execute(&mut **tx)
                .await
                .map_err(map_db_error)?
                .rows_affected();

        report.closed_etapes = sqlx::query(
            r#"
            UPDATE etapes e SET status = $1
            FROM promos p
            WHERE e.promo_id = p.id AND p.status = $2
            "#,
        )
        .bind(StepStatus::Done.as_str())
        .bind(PromoStatus::Done.as_str())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        report.closed_sous_etapes = sqlx::query(
            r#"
            UPDATE sous_etapes se SET status = $1
            FROM etapes e
            WHERE se.etape_id = e.id AND e.status = $1
            "#,
        )
        .bind(StepStatus::Done.as_str())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        Ok(report)
    }
}

/// Step names and intervenants as parallel arrays for `UNNEST`
fn step_columns(plan: &[StepTemplate]) -> (Vec<&'static str>, Vec<i32>) {
    plan.iter().map(|step| (step.name, step.intervenant_id)).unzip()
}

/// Sub-steps flattened into (parent step name, name, ordre) arrays
fn sub_step_columns(plan: &[StepTemplate]) -> (Vec<&'static str>, Vec<&'static str>, Vec<i32>) {
    let total = StepTemplate::sub_step_count(plan);
    let mut parents = Vec::with_capacity(total);
    let mut names = Vec::with_capacity(total);
    let mut ordres = Vec::with_capacity(total);

    for step in plan {
        for sub in step.sub_steps {
            parents.push(step.name);
            names.push(sub.name);
            ordres.push(sub.ordre);
        }
    }

    (parents, names, ordres)
}

#[async_trait]
impl PromoRepository for PgPromoRepository {
    #[instrument(skip(self, promos, plan), fields(promos = promos.len(), steps = plan.len()))]
    async fn replace_all(
        &self,
        promos: &[Promo],
        plan: &[StepTemplate],
    ) -> RepoResult<SyncReport> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        match Self::rebuild(&mut tx, promos, plan).await {
            Ok(report) => {
                tx.commit().await.map_err(map_db_error)?;
                info!(?report, "Promo workflow tables rebuilt");
                Ok(report)
            }
            Err(e) => {
                error!(error = %e, "Rebuild failed, rolling back");
                if let Err(rollback) = tx.rollback().await {
                    warn!(error = %rollback, "Rollback failed");
                }
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Promo>> {
        let results = sqlx::query_as::<_, PromoModel>(
            r#"
            SELECT id, title, start_date, end_date, status, promo_code, date_cloture_game
            FROM promos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Promo::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM promos")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_core::STEP_PLAN;

    #[test]
    fn test_step_columns_follow_plan_order() {
        let (names, intervenants) = step_columns(STEP_PLAN);
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "Reception MAD");
        assert_eq!(names[7], "Transfert réseau");
        assert_eq!(intervenants, vec![5, 5, 5, 5, 5, 5, 2, 2]);
    }

    #[test]
    fn test_sub_step_columns_are_parallel() {
        let (parents, names, ordres) = sub_step_columns(STEP_PLAN);
        assert_eq!(parents.len(), 25);
        assert_eq!(names.len(), 25);
        assert_eq!(ordres.len(), 25);

        let idx = names.iter().position(|n| *n == "Forçage des prévisions").unwrap();
        assert_eq!(parents[idx], "Analyse OP");
        assert_eq!(ordres[idx], 3);
    }

    #[test]
    fn test_empty_plan() {
        let (names, intervenants) = step_columns(&[]);
        assert!(names.is_empty() && intervenants.is_empty());
        let (parents, _, _) = sub_step_columns(&[]);
        assert!(parents.is_empty());
    }
}
