// src/services/seed_store.rs
// DOCUMENTATION: Local fallback snapshot reader
// PURPOSE: Last-resort source of raw lodging records when the remote source fails

use crate::errors::LodgingsError;
use crate::models::RawPage;
use std::path::{Path, PathBuf};

/// Reads the static JSON snapshot (`{ "total"?: n, "items": [...] }`)
#[derive(Debug, Clone)]
pub struct SeedStore {
    path: PathBuf,
}

impl SeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot
    /// DOCUMENTATION: A missing or malformed file is fatal for the
    /// request since there is nothing left to fall back to
    pub async fn read(&self) -> Result<RawPage, LodgingsError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            log::error!("Cannot read snapshot {}: {}", self.path.display(), e);
            LodgingsError::SnapshotUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let page: RawPage = serde_json::from_str(&raw).map_err(|e| {
            log::error!("Malformed snapshot {}: {}", self.path.display(), e);
            LodgingsError::SnapshotUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        log::debug!(
            "Read {} records from snapshot {}",
            page.items.len(),
            self.path.display()
        );

        Ok(page)
    }
}
