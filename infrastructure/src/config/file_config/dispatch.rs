//! Dispatch configuration from TOML (`[dispatch]` section)

use serde::{Deserialize, Serialize};
use sos_application::DispatchConfig;
use sos_application::config::{DEFAULT_MAX_CONCURRENCY, DEFAULT_SEND_TIMEOUT};
use sos_domain::DEFAULT_SERVICE_RADIUS_KM;
use std::time::Duration;

/// Raw dispatch configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatchConfig {
    /// Maximum concurrent sends
    pub max_concurrency: usize,
    /// Per-send timeout in milliseconds
    pub send_timeout_ms: u64,
    /// Radius for responders registered without one
    pub default_service_radius_km: f64,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            send_timeout_ms: DEFAULT_SEND_TIMEOUT.as_millis() as u64,
            default_service_radius_km: DEFAULT_SERVICE_RADIUS_KM,
        }
    }
}

impl FileDispatchConfig {
    /// Convert to the application-layer config
    pub fn to_dispatch_config(&self) -> DispatchConfig {
        DispatchConfig::default()
            .with_max_concurrency(self.max_concurrency)
            .with_send_timeout(Duration::from_millis(self.send_timeout_ms))
            .with_default_service_radius_km(self.default_service_radius_km)
    }
}
