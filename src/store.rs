use crate::error::{TrawlError, TrawlResult};
use crate::models::{ListingRecord, Snapshot};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// JSON file holding the latest full snapshot of listings
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored snapshot. A missing file is an empty baseline.
    pub async fn load(&self) -> TrawlResult<Snapshot> {
        debug!("Loading old results from {}", self.path.display());

        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Old results file doesn't exist");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(TrawlError::SnapshotRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| TrawlError::StoreCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the stored snapshot with `records`.
    ///
    /// Written to a sibling temp file first and renamed into place, so an
    /// interrupted write leaves the previous snapshot intact.
    pub async fn save(&self, records: &[ListingRecord]) -> TrawlResult<()> {
        let json = serde_json::to_vec_pretty(records).map_err(|e| self.persist_error(e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| self.persist_error(e))?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, &json).await.map_err(|e| self.persist_error(e))?;

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.persist_error(e));
        }

        info!("Saved {} listings to {}", records.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persist_error(&self, e: impl std::fmt::Display) -> TrawlError {
        TrawlError::Persist {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}
