//! Notifier port
//!
//! Defines the interface for delivering one message to one address.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when sending a notification
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotifyError {
    #[error("Address rejected: {0}")]
    InvalidAddress(String),

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Send timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Delivery channel for a single notification
///
/// Retry and backoff, if any, belong to the implementation; callers treat an
/// `Err` as final for that send.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `body` to `address`
    async fn send(&self, address: &str, body: &str) -> Result<(), NotifyError>;
}
