//! Progress notification port
//!
//! Defines the interface for reporting dispatch progress during an alert.

use sos_domain::{DispatchOutcome, RecipientGroup};

/// Callback for progress updates while notifications go out
///
/// Implementations live in the presentation layer. Outcomes arrive in
/// completion order, not recipient order.
pub trait DispatchProgress: Send + Sync {
    /// Called before a batch is dispatched
    fn on_batch_start(&self, group: RecipientGroup, total: usize);

    /// Called as each send completes or fails
    fn on_outcome(&self, group: RecipientGroup, outcome: &DispatchOutcome);

    /// Called once every send in the batch has finished
    fn on_batch_complete(&self, _group: RecipientGroup, _outcomes: &[DispatchOutcome]) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoDispatchProgress;

impl DispatchProgress for NoDispatchProgress {
    fn on_batch_start(&self, _group: RecipientGroup, _total: usize) {}
    fn on_outcome(&self, _group: RecipientGroup, _outcome: &DispatchOutcome) {}
}
