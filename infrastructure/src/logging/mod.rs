//! Logging infrastructure — structured alert journaling.
//!
//! Provides [`JsonlAlertJournal`], a JSONL file writer that implements
//! the [`AlertJournal`](sos_application::AlertJournal) port.

mod jsonl_journal;

pub use jsonl_journal::JsonlAlertJournal;
