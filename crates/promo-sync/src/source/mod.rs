//! Sheet sources
//!
//! A source makes the exported sheet available as a local file.

mod local;
mod rclone;

use std::path::PathBuf;

use async_trait::async_trait;

use promo_common::{AppResult, SyncConfig};

pub use local::LocalSheet;
pub use rclone::RcloneSource;

#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Make the sheet available locally and return its path
    async fn fetch(&self) -> AppResult<PathBuf>;

    /// Human readable origin, for logs
    fn describe(&self) -> String;
}

/// The source selected by configuration: a local file when `sheet_path` is
/// set, the rclone remote otherwise
pub fn source_for(config: &SyncConfig) -> Box<dyn SheetSource> {
    match &config.sheet_path {
        Some(path) => Box::new(LocalSheet::new(path.clone())),
        None => Box::new(RcloneSource::from_config(config)),
    }
}
