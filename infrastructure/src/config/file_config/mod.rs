//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod directory;
mod dispatch;
mod journal;
mod notifier;
mod output;

pub use directory::FileDirectoryConfig;
pub use dispatch::FileDispatchConfig;
pub use journal::FileJournalConfig;
pub use notifier::{FileNotifierConfig, NotifierKind};
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("dispatch.max_concurrency cannot be 0")]
    ZeroConcurrency,

    #[error("dispatch.send_timeout_ms cannot be 0")]
    ZeroTimeout,

    #[error("dispatch.default_service_radius_km must be a positive number, got {0}")]
    InvalidDefaultRadius(f64),

    #[error("directory.path cannot be empty")]
    EmptyDirectoryPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Fanout settings
    pub dispatch: FileDispatchConfig,
    /// Where parties and responders are stored
    pub directory: FileDirectoryConfig,
    /// Delivery channel
    pub notifier: FileNotifierConfig,
    /// Structured alert journal
    pub journal: FileJournalConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dispatch.max_concurrency == 0 {
            return Err(ConfigValidationError::ZeroConcurrency);
        }
        if self.dispatch.send_timeout_ms == 0 {
            return Err(ConfigValidationError::ZeroTimeout);
        }
        let radius = self.dispatch.default_service_radius_km;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigValidationError::InvalidDefaultRadius(radius));
        }
        if self.directory.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyDirectoryPath);
        }
        Ok(())
    }
}
