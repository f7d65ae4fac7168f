//! Port for the structured alert journal.
//!
//! Defines the [`AlertJournal`] trait for recording what happened during an
//! alert (raised, location write failed, batches dispatched, final summary).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while the journal captures a machine-readable
//! record (JSONL) that can be audited after the fact.

use serde_json::Value;

/// A structured journal entry.
pub struct JournalEvent {
    /// Event type identifier (e.g., "alert_raised", "dispatch_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl JournalEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording alert events.
///
/// `record` is synchronous and infallible so a broken journal never delays
/// or aborts an alert; implementations swallow their own I/O errors.
pub trait AlertJournal: Send + Sync {
    fn record(&self, event: JournalEvent);
}

/// No-op implementation for tests and when journaling is disabled.
pub struct NoAlertJournal;

impl AlertJournal for NoAlertJournal {
    fn record(&self, _event: JournalEvent) {}
}
