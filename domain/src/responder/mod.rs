//! Responders and proximity matching.

pub mod entities;
pub mod matching;
