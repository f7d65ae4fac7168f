//! Notifier that only logs.

use super::checked_address;
use async_trait::async_trait;
use sos_application::{Notifier, NotifyError};
use tracing::info;

/// Records every notification through `tracing` and reports success.
///
/// Useful for dry runs and for deployments where delivery is handled by a
/// log shipper downstream.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, address: &str, body: &str) -> Result<(), NotifyError> {
        let address = checked_address(address)?;
        info!(target: "sos_dispatch::notify", to = address, "{}", body);
        Ok(())
    }
}
