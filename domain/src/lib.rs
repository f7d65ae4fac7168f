//! Domain layer for sos-dispatch
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Alert
//!
//! A reporting party in distress reports a location. The alert notifies the
//! party's trusted contacts and every active responder whose service radius
//! covers that location.
//!
//! ## Unknown positions
//!
//! Entities hold `Option<Coordinate>`. An unknown position is never treated
//! as (0, 0): it simply never matches.

pub mod alert;
pub mod config;
pub mod core;
pub mod geo;
pub mod party;
pub mod responder;

// Re-export commonly used types
pub use alert::{
    template::AlertTemplate,
    value_objects::{
        AlertEvent, AlertOrigin, AlertSummary, DispatchOutcome, NearbyResponder, RecipientGroup,
    },
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use geo::{
    coordinate::{AxisValue, Coordinate, LocationReport},
    distance::{EARTH_RADIUS_KM, distance_km},
    map_link,
};
pub use party::entities::{PartyId, ReportingParty, TrustedContacts};
pub use responder::{
    entities::{DEFAULT_SERVICE_RADIUS_KM, Responder, ResponderId},
    matching::{ProximityMatcher, ResponderMatch},
};
