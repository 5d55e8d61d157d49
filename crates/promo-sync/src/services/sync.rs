//! Sync service
//!
//! Fetches the sheet, turns it into promos and rebuilds the workflow tables.

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use promo_common::AppResult;
use promo_core::{DomainError, PromoRepository, StepTemplate, SyncReport, STEP_PLAN};

use crate::sheet::{build_promos, decode_sheet, SheetFormat};
use crate::source::SheetSource;

// Promos logged before the rebuild
const PREVIEW_ROWS: usize = 5;

/// End-to-end promo sync
pub struct SyncService<R> {
    source: Box<dyn SheetSource>,
    repo: R,
    plan: &'static [StepTemplate],
}

impl<R: PromoRepository> SyncService<R> {
    /// Create a new SyncService using the standard step plan
    pub fn new(source: Box<dyn SheetSource>, repo: R) -> Self {
        Self {
            source,
            repo,
            plan: STEP_PLAN,
        }
    }

    /// Replace the step plan
    pub fn with_plan(mut self, plan: &'static [StepTemplate]) -> Self {
        self.plan = plan;
        self
    }

    /// Run one sync with statuses computed as of `today`
    ///
    /// The database is left untouched when the sheet cannot be fetched or
    /// holds no usable row.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn run(&self, today: NaiveDate) -> AppResult<SyncReport> {
        let path = self.source.fetch().await?;
        let bytes = tokio::fs::read(&path).await?;

        let rows = decode_sheet(&bytes, SheetFormat::from_path(&path))?;
        let total = rows.len();
        let batch = build_promos(rows, today);

        if batch.skipped > 0 {
            warn!(skipped = batch.skipped, total, "Rows without valid dates were skipped");
        }
        if batch.promos.is_empty() {
            return Err(DomainError::EmptySheet.into());
        }

        info!(promos = batch.promos.len(), "Sheet decoded");
        for promo in batch.promos.iter().take(PREVIEW_ROWS) {
            info!(
                code = %promo.promo_code,
                title = promo.title.as_deref().unwrap_or(""),
                start = %promo.start_date,
                end = %promo.end_date,
                status = %promo.status,
                "Preview"
            );
        }

        let report = self.repo.replace_all(&batch.promos, self.plan).await?;
        Ok(report)
    }
}
