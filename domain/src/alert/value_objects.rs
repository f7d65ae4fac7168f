//! Alert value objects - the transient records produced while one alert runs.
//!
//! - [`AlertEvent`] - the unit of work: who raised it, where, when
//! - [`DispatchOutcome`] - result of one send to one recipient
//! - [`AlertSummary`] - everything the caller gets back
//! - [`NearbyResponder`] / [`AlertOrigin`] - read-only views for map displays

use crate::geo::coordinate::Coordinate;
use crate::party::entities::PartyId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which audience a dispatch batch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientGroup {
    TrustedContacts,
    Responders,
}

impl RecipientGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientGroup::TrustedContacts => "trusted_contacts",
            RecipientGroup::Responders => "responders",
        }
    }
}

impl std::fmt::Display for RecipientGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alert invocation. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub party_id: PartyId,
    pub location: Coordinate,
    pub raised_at: DateTime<Utc>,
}

impl AlertEvent {
    pub fn new(party_id: PartyId, location: Coordinate) -> Self {
        Self {
            party_id,
            location,
            raised_at: Utc::now(),
        }
    }
}

/// Result of sending one notification to one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub address: String,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchOutcome {
    pub fn success(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            succeeded: true,
            error: None,
        }
    }

    pub fn failure(address: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            succeeded: false,
            error: Some(error.into()),
        }
    }
}

/// Result of one alert run.
///
/// `success` means the alert was raised; whether every message arrived is a
/// separate question answered by [`AlertSummary::all_delivered`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub success: bool,
    pub message: String,
    pub event: AlertEvent,
    /// Addresses attempted, in dispatch order
    pub contacts_notified: Vec<String>,
    pub responders_notified: Vec<String>,
    pub contact_outcomes: Vec<DispatchOutcome>,
    pub responder_outcomes: Vec<DispatchOutcome>,
    /// False when the directory rejected the location write
    pub location_persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_error: Option<String>,
    /// Set when active responders could not be loaded; no responder was notified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responder_lookup_error: Option<String>,
}

impl AlertSummary {
    /// Every attempted send succeeded (vacuously true for zero recipients).
    pub fn all_delivered(&self) -> bool {
        self.contact_outcomes
            .iter()
            .chain(&self.responder_outcomes)
            .all(|o| o.succeeded)
    }

    pub fn delivered_count(&self) -> usize {
        self.contact_outcomes
            .iter()
            .chain(&self.responder_outcomes)
            .filter(|o| o.succeeded)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.attempted_count() - self.delivered_count()
    }

    pub fn attempted_count(&self) -> usize {
        self.contact_outcomes.len() + self.responder_outcomes.len()
    }
}

/// A matched responder as shown to a reporting party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyResponder {
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
    /// Rounded to two decimals for display
    pub distance_km: f64,
}

/// The last known position of a reporting party, as shown to responders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertOrigin {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub coordinate: Coordinate,
}
