//! Notifier selected at startup from configuration.

use super::{LogNotifier, OutboxNotifier};
use crate::config::{FileNotifierConfig, NotifierKind};
use async_trait::async_trait;
use sos_application::{Notifier, NotifyError};

/// One of the built-in notifiers, chosen by `[notifier] kind`
pub enum ConfiguredNotifier {
    Log(LogNotifier),
    Outbox(OutboxNotifier),
}

impl ConfiguredNotifier {
    pub fn from_config(config: &FileNotifierConfig) -> std::io::Result<Self> {
        Ok(match config.kind {
            NotifierKind::Log => Self::Log(LogNotifier::new()),
            NotifierKind::Outbox => Self::Outbox(OutboxNotifier::open(&config.outbox_path)?),
        })
    }

    pub fn kind(&self) -> NotifierKind {
        match self {
            Self::Log(_) => NotifierKind::Log,
            Self::Outbox(_) => NotifierKind::Outbox,
        }
    }
}

#[async_trait]
impl Notifier for ConfiguredNotifier {
    async fn send(&self, address: &str, body: &str) -> Result<(), NotifyError> {
        match self {
            Self::Log(n) => n.send(address, body).await,
            Self::Outbox(n) => n.send(address, body).await,
        }
    }
}
