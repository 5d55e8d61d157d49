//! Sheet already present on disk

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use promo_common::AppResult;

use super::SheetSource;

/// A sheet read from a fixed local path
#[derive(Debug, Clone)]
pub struct LocalSheet {
    path: PathBuf,
}

impl LocalSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SheetSource for LocalSheet {
    async fn fetch(&self) -> AppResult<PathBuf> {
        tokio::fs::metadata(&self.path).await?;
        info!(path = %self.path.display(), "Using local sheet");
        Ok(self.path.clone())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
