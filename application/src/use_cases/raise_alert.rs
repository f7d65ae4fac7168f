//! Raise Alert use case
//!
//! Orchestrates one alert: validate the reported location, persist it, notify
//! the party's trusted contacts, then notify every responder in range.
//!
//! Only an invalid location (or, when raising by id, an unknown party) aborts
//! the run. A failed location write, a failed responder lookup and failed
//! sends all degrade into the returned [`AlertSummary`].

use crate::config::DispatchConfig;
use crate::ports::directory::{Directory, DirectoryError};
use crate::ports::journal::{AlertJournal, JournalEvent, NoAlertJournal};
use crate::ports::notifier::Notifier;
use crate::ports::progress::{DispatchProgress, NoDispatchProgress};
use crate::use_cases::fanout::{Notification, NotificationFanout};
use serde_json::json;
use sos_domain::{
    AlertEvent, AlertSummary, AlertTemplate, DispatchOutcome, LocationReport, PartyId,
    ProximityMatcher, RecipientGroup, ReportingParty, Responder,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort an alert before anything is dispatched
#[derive(Error, Debug)]
pub enum RaiseAlertError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Unknown party: {0}")]
    UnknownParty(PartyId),

    #[error("Directory error: {0}")]
    Directory(DirectoryError),
}

impl RaiseAlertError {
    pub fn is_invalid_location(&self) -> bool {
        matches!(self, RaiseAlertError::InvalidLocation(_))
    }
}

/// Input for the RaiseAlert use case
#[derive(Debug, Clone)]
pub struct RaiseAlertInput {
    /// The party raising the alert, as currently stored
    pub party: ReportingParty,
    /// The location exactly as reported
    pub location: LocationReport,
}

impl RaiseAlertInput {
    pub fn new(party: ReportingParty, location: impl Into<LocationReport>) -> Self {
        Self {
            party,
            location: location.into(),
        }
    }
}

/// Use case for raising an alert
pub struct RaiseAlertUseCase<D: Directory + 'static, N: Notifier + 'static> {
    directory: Arc<D>,
    fanout: NotificationFanout<N>,
    matcher: ProximityMatcher,
    journal: Arc<dyn AlertJournal>,
}

impl<D: Directory + 'static, N: Notifier + 'static> RaiseAlertUseCase<D, N> {
    pub fn new(directory: Arc<D>, notifier: Arc<N>, config: &DispatchConfig) -> Self {
        Self {
            directory,
            fanout: NotificationFanout::new(notifier, config),
            matcher: ProximityMatcher::with_default_radius(config.default_service_radius_km),
            journal: Arc::new(NoAlertJournal),
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn AlertJournal>) -> Self {
        self.journal = journal;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RaiseAlertInput) -> Result<AlertSummary, RaiseAlertError> {
        self.execute_with_progress(input, &NoDispatchProgress).await
    }

    /// Resolve the party through the directory, then raise the alert
    pub async fn execute_for(
        &self,
        party_id: PartyId,
        location: LocationReport,
        progress: &dyn DispatchProgress,
    ) -> Result<AlertSummary, RaiseAlertError> {
        // Reject bad input before touching the directory
        location
            .validate()
            .map_err(|e| RaiseAlertError::InvalidLocation(e.to_string()))?;

        let party = self
            .directory
            .get_party(party_id)
            .await
            .map_err(|e| match e {
                DirectoryError::PartyNotFound(id) => RaiseAlertError::UnknownParty(id),
                other => RaiseAlertError::Directory(other),
            })?;

        self.execute_with_progress(RaiseAlertInput { party, location }, progress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RaiseAlertInput,
        progress: &dyn DispatchProgress,
    ) -> Result<AlertSummary, RaiseAlertError> {
        let RaiseAlertInput { party, location } = input;

        let location = location.validate().map_err(|e| {
            warn!("Rejected alert from {}: {}", party.id, e);
            RaiseAlertError::InvalidLocation(e.to_string())
        })?;

        let event = AlertEvent::new(party.id, location);
        info!("Alert raised by {} at {}", party.id, location);
        self.journal.record(JournalEvent::new(
            "alert_raised",
            json!({
                "party_id": party.id,
                "latitude": location.latitude(),
                "longitude": location.longitude(),
            }),
        ));

        // Step 1: persist the location; the alert goes out either way
        let location_error = match self.directory.update_location(party.id, location).await {
            Ok(()) => None,
            Err(e) => {
                warn!("Could not persist location for {}: {}", party.id, e);
                self.journal.record(JournalEvent::new(
                    "location_update_failed",
                    json!({ "party_id": party.id, "error": e.to_string() }),
                ));
                Some(e.to_string())
            }
        };

        // Step 2: trusted contacts
        let contacts = party.trusted_contacts.addresses();
        let contact_outcomes = if contacts.is_empty() {
            debug!("{} has no trusted contacts", party.id);
            Vec::new()
        } else {
            let message = AlertTemplate::trusted_contact_alert(&party, &location);
            let outcomes = self
                .fanout
                .dispatch_batch(
                    RecipientGroup::TrustedContacts,
                    Notification::uniform(&message, &contacts),
                    progress,
                )
                .await;
            self.record_batch(RecipientGroup::TrustedContacts, &outcomes);
            outcomes
        };

        // Step 3: responders in range
        let (matched, responder_lookup_error) = self.matched_responders(&event).await;
        let responder_outcomes = if matched.is_empty() {
            debug!("No responders in range of {}", location);
            Vec::new()
        } else {
            let outcomes = self
                .fanout
                .dispatch_batch(
                    RecipientGroup::Responders,
                    Notification::templated(
                        |r| AlertTemplate::responder_alert(r, &location),
                        &matched,
                    ),
                    progress,
                )
                .await;
            self.record_batch(RecipientGroup::Responders, &outcomes);
            outcomes
        };

        let summary = AlertSummary {
            success: true,
            message: AlertTemplate::raised_status().to_string(),
            event,
            contacts_notified: contacts,
            responders_notified: matched.into_iter().map(|r| r.address).collect(),
            contact_outcomes,
            responder_outcomes,
            location_persisted: location_error.is_none(),
            location_error,
            responder_lookup_error,
        };

        info!(
            "Alert for {} complete: {}/{} notifications delivered",
            party.id,
            summary.delivered_count(),
            summary.attempted_count()
        );
        self.journal.record(JournalEvent::new(
            "alert_summary",
            json!({
                "party_id": party.id,
                "contacts_notified": summary.contacts_notified,
                "responders_notified": summary.responders_notified,
                "delivered": summary.delivered_count(),
                "failed": summary.failed_count(),
                "location_persisted": summary.location_persisted,
            }),
        ));

        Ok(summary)
    }

    /// Active responders whose radius covers the alert, in directory order
    async fn matched_responders(&self, event: &AlertEvent) -> (Vec<Responder>, Option<String>) {
        let candidates = match self.directory.get_active_responders().await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("Could not load responders: {}", e);
                return (Vec::new(), Some(e.to_string()));
            }
        };

        let matched: Vec<Responder> = self
            .matcher
            .find_within_radius(Some(&event.location), &candidates)
            .into_iter()
            .map(|m| {
                debug!(
                    "Responder {} is {:.2} km away (radius {:.2} km)",
                    m.responder.id,
                    m.distance_km,
                    m.responder.radius_or(self.matcher.default_radius_km())
                );
                m.responder
            })
            .collect();

        info!(
            "{} of {} active responders in range",
            matched.len(),
            candidates.len()
        );
        (matched, None)
    }

    fn record_batch(&self, group: RecipientGroup, outcomes: &[DispatchOutcome]) {
        self.journal.record(JournalEvent::new(
            "dispatch_completed",
            json!({
                "group": group,
                "outcomes": outcomes,
            }),
        ));
    }
}
