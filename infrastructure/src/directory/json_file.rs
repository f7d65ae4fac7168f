//! Directory store persisted as a JSON snapshot file.
//!
//! The whole snapshot is rewritten on every location update: written to a
//! sibling temp file, then renamed over the original so a crash mid-write
//! never leaves a truncated directory behind.

use super::snapshot::DirectorySnapshot;
use async_trait::async_trait;
use sos_application::{Directory, DirectoryError};
use sos_domain::{Coordinate, PartyId, ReportingParty, Responder, ResponderId};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// File-backed directory
pub struct JsonFileDirectory {
    path: PathBuf,
    inner: RwLock<DirectorySnapshot>,
}

impl JsonFileDirectory {
    /// Open the directory at `path`, starting empty if the file does not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref().to_path_buf();

        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                DirectoryError::Storage(format!("{} is not a valid directory: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No directory at {}, starting empty", path.display());
                DirectorySnapshot::default()
            }
            Err(e) => {
                return Err(DirectoryError::Storage(format!(
                    "Could not read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        debug!(
            "Loaded {} parties and {} responders from {}",
            snapshot.parties.len(),
            snapshot.responders.len(),
            path.display()
        );

        Ok(Self {
            path,
            inner: RwLock::new(snapshot),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, snapshot: &DirectorySnapshot) -> Result<(), DirectoryError> {
        let storage = |e: std::io::Error| {
            DirectoryError::Storage(format!("Could not write {}: {}", self.path.display(), e))
        };

        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| DirectoryError::Storage(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(storage)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(storage)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(storage)
    }

    /// Apply `change` to a copy, persist it, and only then make it visible.
    async fn write_through<F>(&self, change: F) -> Result<(), DirectoryError>
    where
        F: FnOnce(&mut DirectorySnapshot) -> Result<(), DirectoryError> + Send,
    {
        let mut guard = self.inner.write().await;
        let mut next = guard.clone();
        change(&mut next)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }
}

#[async_trait]
impl Directory for JsonFileDirectory {
    async fn get_party(&self, id: PartyId) -> Result<ReportingParty, DirectoryError> {
        self.inner.read().await.party(id).cloned()
    }

    async fn list_parties(&self) -> Result<Vec<ReportingParty>, DirectoryError> {
        Ok(self.inner.read().await.parties.clone())
    }

    async fn get_active_responders(&self) -> Result<Vec<Responder>, DirectoryError> {
        Ok(self.inner.read().await.active_responders())
    }

    async fn update_location(
        &self,
        id: PartyId,
        location: Coordinate,
    ) -> Result<(), DirectoryError> {
        self.write_through(|s| s.set_party_location(id, location))
            .await
    }

    async fn update_responder_location(
        &self,
        id: ResponderId,
        location: Coordinate,
    ) -> Result<(), DirectoryError> {
        self.write_through(|s| s.set_responder_location(id, location))
            .await
    }
}
