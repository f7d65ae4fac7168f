//! Update Responder Location use case
//!
//! Responders periodically self-report their position so matching uses a
//! fresh one.

use crate::ports::directory::{Directory, DirectoryError};
use sos_domain::{Coordinate, LocationReport, ResponderId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while updating a responder's position
#[derive(Error, Debug)]
pub enum UpdateLocationError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Use case for recording a responder's reported position
pub struct UpdateResponderLocationUseCase<D: Directory + 'static> {
    directory: Arc<D>,
}

impl<D: Directory + 'static> UpdateResponderLocationUseCase<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub async fn execute(
        &self,
        id: ResponderId,
        report: &LocationReport,
    ) -> Result<Coordinate, UpdateLocationError> {
        let location = report.validate().map_err(|e| {
            warn!("Rejected location update from {}: {}", id, e);
            UpdateLocationError::InvalidLocation(e.to_string())
        })?;

        self.directory
            .update_responder_location(id, location)
            .await?;
        info!("{} now at {}", id, location);
        Ok(location)
    }
}
