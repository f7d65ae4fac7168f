//! Notifier configuration from TOML (`[notifier]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which notifier adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// Record sends in the operation log only
    #[default]
    Log,
    /// Append each message to a JSONL outbox file
    Outbox,
}

/// Raw notifier configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotifierConfig {
    pub kind: NotifierKind,
    /// Outbox file, used when `kind = "outbox"`
    pub outbox_path: PathBuf,
}

impl Default for FileNotifierConfig {
    fn default() -> Self {
        Self {
            kind: NotifierKind::Log,
            outbox_path: PathBuf::from("sos-outbox.jsonl"),
        }
    }
}
