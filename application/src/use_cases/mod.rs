//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fanout;
pub mod nearby;
pub mod raise_alert;
pub mod responder_location;

#[cfg(test)]
pub(crate) mod test_support;
