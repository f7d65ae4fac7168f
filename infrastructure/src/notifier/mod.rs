//! Notifier adapters implementing the [`Notifier`](sos_application::Notifier) port.
//!
//! - [`LogNotifier`] records each send in the operation log
//! - [`OutboxNotifier`] appends each message to a JSONL outbox file
//! - [`ConfiguredNotifier`] selects one of them from configuration

mod configured;
mod log_notifier;
mod outbox;

pub use configured::ConfiguredNotifier;
pub use log_notifier::LogNotifier;
pub use outbox::OutboxNotifier;

use sos_application::NotifyError;

/// Trim an address, rejecting blank ones.
pub(crate) fn checked_address(address: &str) -> Result<&str, NotifyError> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(NotifyError::InvalidAddress(
            "address is blank".to_string(),
        ));
    }
    Ok(trimmed)
}
