//! Directory configuration from TOML (`[directory]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw directory configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDirectoryConfig {
    /// JSON snapshot holding parties and responders
    pub path: PathBuf,
}

impl Default for FileDirectoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("sos-directory.json"),
        }
    }
}
