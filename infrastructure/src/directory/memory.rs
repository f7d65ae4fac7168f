//! In-memory directory store.

use super::snapshot::DirectorySnapshot;
use async_trait::async_trait;
use sos_application::{Directory, DirectoryError};
use sos_domain::{Coordinate, PartyId, ReportingParty, Responder, ResponderId};
use tokio::sync::RwLock;

/// Directory held entirely in memory. Location writes are last-write-wins.
#[derive(Default)]
pub struct InMemoryDirectory {
    inner: RwLock<DirectorySnapshot>,
}

impl InMemoryDirectory {
    pub fn new(snapshot: DirectorySnapshot) -> Self {
        Self {
            inner: RwLock::new(snapshot),
        }
    }

    pub fn with_records(parties: Vec<ReportingParty>, responders: Vec<Responder>) -> Self {
        Self::new(DirectorySnapshot {
            parties,
            responders,
        })
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> DirectorySnapshot {
        self.inner.read().await.clone()
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
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
        self.inner.write().await.set_party_location(id, location)
    }

    async fn update_responder_location(
        &self,
        id: ResponderId,
        location: Coordinate,
    ) -> Result<(), DirectoryError> {
        self.inner
            .write()
            .await
            .set_responder_location(id, location)
    }
}
