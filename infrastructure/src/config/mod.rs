//! Configuration file loading for sos-dispatch
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SOS_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./sos-dispatch.toml` or `./.sos-dispatch.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sos-dispatch/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDirectoryConfig, FileDispatchConfig,
    FileJournalConfig, FileNotifierConfig, FileOutputConfig, NotifierKind,
};
pub use loader::ConfigLoader;
