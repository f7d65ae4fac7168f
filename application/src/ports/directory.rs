//! Directory port
//!
//! Defines the interface to the store that owns party and responder records.

use async_trait::async_trait;
use sos_domain::{Coordinate, PartyId, ReportingParty, Responder, ResponderId};
use thiserror::Error;

/// Errors that can occur during directory operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    #[error("Party not found: {0}")]
    PartyNotFound(PartyId),

    #[error("Responder not found: {0}")]
    ResponderNotFound(ResponderId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DirectoryError::PartyNotFound(_) | DirectoryError::ResponderNotFound(_)
        )
    }
}

/// Store of reporting parties and responders
///
/// The directory is the only owner of persisted positions. Location writes
/// are last-write-wins per record.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Look up a reporting party
    async fn get_party(&self, id: PartyId) -> Result<ReportingParty, DirectoryError>;

    /// All parties, in directory order
    async fn list_parties(&self) -> Result<Vec<ReportingParty>, DirectoryError>;

    /// Responders with the active flag set, in directory order
    async fn get_active_responders(&self) -> Result<Vec<Responder>, DirectoryError>;

    /// Persist a party's reported position
    async fn update_location(
        &self,
        id: PartyId,
        location: Coordinate,
    ) -> Result<(), DirectoryError>;

    /// Persist a responder's self-reported position
    async fn update_responder_location(
        &self,
        id: ResponderId,
        location: Coordinate,
    ) -> Result<(), DirectoryError>;
}
