//! Test doubles shared by the use-case tests.

use crate::ports::directory::{Directory, DirectoryError};
use crate::ports::notifier::{Notifier, NotifyError};
use crate::ports::progress::DispatchProgress;
use async_trait::async_trait;
use sos_domain::{
    Coordinate, DispatchOutcome, PartyId, RecipientGroup, ReportingParty, Responder, ResponderId,
};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

// ==================== Notifier ====================

/// Records every send; fails or stalls on configured addresses.
#[derive(Default)]
pub struct MockNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    failing: HashSet<String>,
    stalling: HashSet<String>,
    panicking: HashSet<String>,
    delay: Option<Duration>,
    in_flight: Mutex<(usize, usize)>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, address: &str) -> Self {
        self.failing.insert(address.to_string());
        self
    }

    pub fn stalling_on(mut self, address: &str) -> Self {
        self.stalling.insert(address.to_string());
        self
    }

    pub fn panicking_on(mut self, address: &str) -> Self {
        self.panicking.insert(address.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn sent_addresses(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(a, _)| a.clone())
            .collect()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Highest number of sends observed in flight at once
    pub fn peak_in_flight(&self) -> usize {
        self.in_flight.lock().unwrap().1
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, address: &str, body: &str) -> Result<(), NotifyError> {
        if self.panicking.contains(address) {
            panic!("notifier crashed on {}", address);
        }
        self.sent
            .lock()
            .unwrap()
            .push((address.to_string(), body.to_string()));
        {
            let mut guard = self.in_flight.lock().unwrap();
            guard.0 += 1;
            guard.1 = guard.1.max(guard.0);
        }

        if self.stalling.contains(address) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        } else if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.lock().unwrap().0 -= 1;

        if self.failing.contains(address) {
            return Err(NotifyError::DeliveryFailed(format!(
                "carrier rejected {}",
                address
            )));
        }
        Ok(())
    }
}

// ==================== Directory ====================

/// In-memory directory with optional failure injection.
#[derive(Default)]
pub struct MockDirectory {
    pub parties: Mutex<Vec<ReportingParty>>,
    pub responders: Mutex<Vec<Responder>>,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl MockDirectory {
    pub fn new(parties: Vec<ReportingParty>, responders: Vec<Responder>) -> Self {
        Self {
            parties: Mutex::new(parties),
            responders: Mutex::new(responders),
            fail_writes: false,
            fail_reads: false,
        }
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn party_location(&self, id: PartyId) -> Option<Coordinate> {
        self.parties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.location)
    }

    pub fn responder_location(&self, id: ResponderId) -> Option<Coordinate> {
        self.responders
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .and_then(|r| r.location)
    }
}

#[async_trait]
impl Directory for MockDirectory {
    async fn get_party(&self, id: PartyId) -> Result<ReportingParty, DirectoryError> {
        self.parties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DirectoryError::PartyNotFound(id))
    }

    async fn list_parties(&self) -> Result<Vec<ReportingParty>, DirectoryError> {
        if self.fail_reads {
            return Err(DirectoryError::Storage("read failed".to_string()));
        }
        Ok(self.parties.lock().unwrap().clone())
    }

    async fn get_active_responders(&self) -> Result<Vec<Responder>, DirectoryError> {
        if self.fail_reads {
            return Err(DirectoryError::Storage("read failed".to_string()));
        }
        Ok(self
            .responders
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.active)
            .cloned()
            .collect())
    }

    async fn update_location(
        &self,
        id: PartyId,
        location: Coordinate,
    ) -> Result<(), DirectoryError> {
        if self.fail_writes {
            return Err(DirectoryError::Storage("disk full".to_string()));
        }
        let mut parties = self.parties.lock().unwrap();
        let party = parties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DirectoryError::PartyNotFound(id))?;
        party.location = Some(location);
        Ok(())
    }

    async fn update_responder_location(
        &self,
        id: ResponderId,
        location: Coordinate,
    ) -> Result<(), DirectoryError> {
        if self.fail_writes {
            return Err(DirectoryError::Storage("disk full".to_string()));
        }
        let mut responders = self.responders.lock().unwrap();
        let responder = responders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DirectoryError::ResponderNotFound(id))?;
        responder.location = Some(location);
        Ok(())
    }
}

// ==================== Progress ====================

/// Captures progress callbacks as strings.
#[derive(Default)]
pub struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl DispatchProgress for RecordingProgress {
    fn on_batch_start(&self, group: RecipientGroup, total: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {} {}", group, total));
    }

    fn on_outcome(&self, group: RecipientGroup, outcome: &DispatchOutcome) {
        self.events
            .lock()
            .unwrap()
            .push(format!("outcome {} {}", group, outcome.address));
    }

    fn on_batch_complete(&self, group: RecipientGroup, outcomes: &[DispatchOutcome]) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete {} {}", group, outcomes.len()));
    }
}

// ==================== Fixtures ====================

pub fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

pub fn responder_at(id: u64, address: &str, lat: f64, lon: f64) -> Responder {
    Responder::new(ResponderId(id), format!("Responder {id}"), address).with_location(coord(lat, lon))
}
