//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the fanout concurrency limit and per-send timeout.

use sos_domain::DEFAULT_SERVICE_RADIUS_KM;
use std::time::Duration;

/// Default number of sends allowed in flight at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Default bound on a single send.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Dispatch behavior configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchConfig {
    /// Maximum concurrent sends across a fanout. Zero is treated as one.
    pub max_concurrency: usize,
    /// Bound on each individual send; a send that exceeds it fails.
    pub send_timeout: Duration,
    /// Radius used for responders without a usable one.
    pub default_service_radius_km: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            send_timeout: DEFAULT_SEND_TIMEOUT,
            default_service_radius_km: DEFAULT_SERVICE_RADIUS_KM,
        }
    }
}

impl DispatchConfig {
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn with_send_timeout(mut self, send_timeout: Duration) -> Self {
        self.send_timeout = send_timeout;
        self
    }

    /// Creates a DispatchConfig with the send timeout specified in milliseconds.
    pub fn with_send_timeout_millis(self, millis: u64) -> Self {
        self.with_send_timeout(Duration::from_millis(millis))
    }

    pub fn with_default_service_radius_km(mut self, radius_km: f64) -> Self {
        self.default_service_radius_km = radius_km;
        self
    }

    /// Concurrency limit actually applied.
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DispatchConfig::default();
        assert_eq!(config.max_concurrency, 8);
        assert_eq!(config.send_timeout, Duration::from_secs(10));
        assert_eq!(config.default_service_radius_km, 5.0);
    }

    #[test]
    fn test_zero_concurrency_clamped() {
        let config = DispatchConfig::default().with_max_concurrency(0);
        assert_eq!(config.effective_concurrency(), 1);
    }
}
