//! Application layer for sos-dispatch
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DispatchConfig;
pub use ports::{
    directory::{Directory, DirectoryError},
    journal::{AlertJournal, JournalEvent, NoAlertJournal},
    notifier::{Notifier, NotifyError},
    progress::{DispatchProgress, NoDispatchProgress},
};
pub use use_cases::fanout::{Notification, NotificationFanout};
pub use use_cases::nearby::{ListAlertOriginsUseCase, ListNearbyRespondersUseCase};
pub use use_cases::raise_alert::{RaiseAlertError, RaiseAlertInput, RaiseAlertUseCase};
pub use use_cases::responder_location::{UpdateLocationError, UpdateResponderLocationUseCase};
