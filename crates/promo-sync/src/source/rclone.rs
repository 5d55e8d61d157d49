//! Download through rclone
//!
//! Runs `rclone [--config <file>] copyto <remote>:<path> <local file>`.

use std::ffi::OsString;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{error, info, instrument};

use promo_common::{AppError, AppResult, SyncConfig};

use super::SheetSource;

/// Sheet copied from an rclone remote
#[derive(Debug, Clone)]
pub struct RcloneSource {
    rclone_path: PathBuf,
    config_path: Option<PathBuf>,
    remote: String,
    local_file: PathBuf,
}

impl RcloneSource {
    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            rclone_path: config.rclone_path.clone(),
            config_path: config.rclone_config.clone(),
            remote: config.remote_spec(),
            local_file: config.local_file(),
        }
    }

    fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(5);
        if let Some(config) = &self.config_path {
            args.push(OsString::from("--config"));
            args.push(config.clone().into_os_string());
        }
        args.push(OsString::from("copyto"));
        args.push(OsString::from(&self.remote));
        args.push(self.local_file.clone().into_os_string());
        args
    }
}

#[async_trait]
impl SheetSource for RcloneSource {
    #[instrument(skip(self), fields(remote = %self.remote, local = %self.local_file.display()))]
    async fn fetch(&self) -> AppResult<PathBuf> {
        if let Some(dir) = self.local_file.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        info!("Downloading sheet");

        let output = Command::new(&self.rclone_path)
            .args(self.args())
            .output()
            .await
            .map_err(|e| {
                AppError::external(format!(
                    "failed to run {}: {e}",
                    self.rclone_path.display()
                ))
            })?;

        if !output.status.success() {
            error!(
                status = %output.status,
                stdout = %String::from_utf8_lossy(&output.stdout),
                stderr = %String::from_utf8_lossy(&output.stderr),
                "rclone failed"
            );
            return Err(AppError::external(format!(
                "rclone copyto {} failed with {}",
                self.remote, output.status
            )));
        }

        if !tokio::fs::try_exists(&self.local_file).await? {
            return Err(AppError::external(format!(
                "rclone reported success but {} was not written",
                self.local_file.display()
            )));
        }

        info!("Sheet downloaded");
        Ok(self.local_file.clone())
    }

    fn describe(&self) -> String {
        format!("rclone {}", self.remote)
    }
}
