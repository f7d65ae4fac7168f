//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod directory;
pub mod journal;
pub mod notifier;
pub mod progress;
