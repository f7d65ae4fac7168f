//! Notification fanout
//!
//! Sends one notification per recipient concurrently and collects one
//! [`DispatchOutcome`] per recipient, in recipient order.

use crate::config::DispatchConfig;
use crate::ports::notifier::{Notifier, NotifyError};
use crate::ports::progress::DispatchProgress;
use sos_domain::{DispatchOutcome, RecipientGroup, Responder};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// One message bound for one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub address: String,
    pub body: String,
}

impl Notification {
    pub fn new(address: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            body: body.into(),
        }
    }

    /// The same message to every address
    pub fn uniform(message: &str, recipients: &[String]) -> Vec<Self> {
        recipients
            .iter()
            .map(|address| Self::new(address.clone(), message))
            .collect()
    }

    /// A message rendered per responder
    pub fn templated<F>(template: F, recipients: &[Responder]) -> Vec<Self>
    where
        F: Fn(&Responder) -> String,
    {
        recipients
            .iter()
            .map(|r| Self::new(r.address.clone(), template(r)))
            .collect()
    }
}

/// Concurrent, failure-isolated dispatcher
///
/// Every send runs in its own task. A shared semaphore bounds how many are
/// in flight, and each send is bounded by the configured timeout once it
/// holds a permit. No error escapes: a failed, timed-out or panicked send
/// becomes a failed outcome for that recipient only.
pub struct NotificationFanout<N: Notifier + 'static> {
    notifier: Arc<N>,
    limit: Arc<Semaphore>,
    send_timeout: Duration,
}

impl<N: Notifier + 'static> NotificationFanout<N> {
    pub fn new(notifier: Arc<N>, config: &DispatchConfig) -> Self {
        Self {
            notifier,
            limit: Arc::new(Semaphore::new(config.effective_concurrency())),
            send_timeout: config.send_timeout,
        }
    }

    /// Send `message` to each address.
    ///
    /// Returns exactly one outcome per recipient, in input order. Duplicate
    /// addresses are sent to once per occurrence.
    pub async fn dispatch(&self, message: &str, recipients: &[String]) -> Vec<DispatchOutcome> {
        self.run(Notification::uniform(message, recipients), None)
            .await
    }

    /// Send a per-responder message to each responder's address.
    pub async fn dispatch_with<F>(&self, template: F, recipients: &[Responder]) -> Vec<DispatchOutcome>
    where
        F: Fn(&Responder) -> String,
    {
        self.run(Notification::templated(template, recipients), None)
            .await
    }

    /// Send a prepared batch, reporting progress for `group`.
    pub async fn dispatch_batch(
        &self,
        group: RecipientGroup,
        batch: Vec<Notification>,
        progress: &dyn DispatchProgress,
    ) -> Vec<DispatchOutcome> {
        self.run(batch, Some((group, progress))).await
    }

    async fn run(
        &self,
        batch: Vec<Notification>,
        observer: Option<(RecipientGroup, &dyn DispatchProgress)>,
    ) -> Vec<DispatchOutcome> {
        if let Some((group, progress)) = observer {
            progress.on_batch_start(group, batch.len());
        }

        // Pre-filled so a task lost to a panic still leaves its slot failed
        let mut outcomes: Vec<DispatchOutcome> = batch
            .iter()
            .map(|n| DispatchOutcome::failure(&n.address, "send task did not complete"))
            .collect();

        let mut join_set = JoinSet::new();

        for (index, notification) in batch.into_iter().enumerate() {
            let notifier = Arc::clone(&self.notifier);
            let limit = Arc::clone(&self.limit);
            let send_timeout = self.send_timeout;

            join_set.spawn(async move {
                let outcome = Self::send_one(&notifier, &limit, send_timeout, notification).await;
                (index, outcome)
            });
        }

        let mut reported = vec![false; outcomes.len()];

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, outcome)) => {
                    if outcome.succeeded {
                        debug!("Notified {}", outcome.address);
                    } else {
                        warn!(
                            "Failed to notify {}: {}",
                            outcome.address,
                            outcome.error.as_deref().unwrap_or("unknown error")
                        );
                    }
                    if let Some((group, progress)) = observer {
                        progress.on_outcome(group, &outcome);
                    }
                    outcomes[index] = outcome;
                    reported[index] = true;
                }
                Err(e) => {
                    warn!("Send task join error: {}", e);
                }
            }
        }

        // Slots whose task panicked keep their pre-filled failure
        for (outcome, _) in outcomes.iter().zip(&reported).filter(|(_, done)| !**done) {
            warn!("Failed to notify {}: send task did not complete", outcome.address);
            if let Some((group, progress)) = observer {
                progress.on_outcome(group, outcome);
            }
        }

        if let Some((group, progress)) = observer {
            progress.on_batch_complete(group, &outcomes);
        }
        outcomes
    }

    async fn send_one(
        notifier: &N,
        limit: &Semaphore,
        send_timeout: Duration,
        notification: Notification,
    ) -> DispatchOutcome {
        let Ok(_permit) = limit.acquire().await else {
            return DispatchOutcome::failure(notification.address, "dispatch limiter closed");
        };

        let send = notifier.send(&notification.address, &notification.body);
        match tokio::time::timeout(send_timeout, send).await {
            Ok(Ok(())) => DispatchOutcome::success(notification.address),
            Ok(Err(e)) => DispatchOutcome::failure(notification.address, e.to_string()),
            Err(_) => DispatchOutcome::failure(
                notification.address,
                NotifyError::Timeout(send_timeout).to_string(),
            ),
        }
    }
}
