//! Reporting parties: the users who raise alerts.

pub mod entities;
