//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),
}

impl DomainError {
    /// Check if this error rejects a reported location
    pub fn is_invalid_location(&self) -> bool {
        matches!(self, DomainError::InvalidLocation(_))
    }
}
