//! Infrastructure layer for sos-dispatch
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod directory;
pub mod logging;
pub mod notifier;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDirectoryConfig, FileDispatchConfig,
    FileJournalConfig, FileNotifierConfig, FileOutputConfig, NotifierKind,
};
pub use directory::{DirectorySnapshot, InMemoryDirectory, JsonFileDirectory};
pub use logging::JsonlAlertJournal;
pub use notifier::{ConfiguredNotifier, LogNotifier, OutboxNotifier};
