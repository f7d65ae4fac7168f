//! Serializable contents of a directory store.

use serde::{Deserialize, Serialize};
use sos_application::DirectoryError;
use sos_domain::{Coordinate, PartyId, ReportingParty, Responder, ResponderId};

/// Every party and responder, in registration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySnapshot {
    pub parties: Vec<ReportingParty>,
    pub responders: Vec<Responder>,
}

impl DirectorySnapshot {
    pub fn party(&self, id: PartyId) -> Result<&ReportingParty, DirectoryError> {
        self.parties
            .iter()
            .find(|p| p.id == id)
            .ok_or(DirectoryError::PartyNotFound(id))
    }

    pub fn active_responders(&self) -> Vec<Responder> {
        self.responders.iter().filter(|r| r.active).cloned().collect()
    }

    pub fn set_party_location(
        &mut self,
        id: PartyId,
        location: Coordinate,
    ) -> Result<(), DirectoryError> {
        let party = self
            .parties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DirectoryError::PartyNotFound(id))?;
        party.location = Some(location);
        Ok(())
    }

    pub fn set_responder_location(
        &mut self,
        id: ResponderId,
        location: Coordinate,
    ) -> Result<(), DirectoryError> {
        let responder = self
            .responders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DirectoryError::ResponderNotFound(id))?;
        responder.location = Some(location);
        Ok(())
    }
}
