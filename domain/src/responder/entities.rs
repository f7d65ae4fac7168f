//! Responder entity

use crate::geo::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Service radius used when a responder has none, or a non-positive one.
pub const DEFAULT_SERVICE_RADIUS_KM: f64 = 5.0;

/// Identifier of a responder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponderId(pub u64);

impl std::fmt::Display for ResponderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "responder-{}", self.0)
    }
}

/// A volunteer who can be notified of alerts within their service radius (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responder {
    pub id: ResponderId,
    pub name: String,
    /// Address notifications are sent to (e.g. a phone number)
    pub address: String,
    /// Last self-reported position; `None` until the first update
    #[serde(default)]
    pub location: Option<Coordinate>,
    /// Radius in km; see [`Responder::radius_or`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_radius_km: Option<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Responder {
    pub fn new(id: ResponderId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            location: None,
            service_radius_km: None,
            active: true,
        }
    }

    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.service_radius_km = Some(radius_km);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Radius used for matching, falling back to `default_km` when unset,
    /// non-positive or non-finite.
    pub fn radius_or(&self, default_km: f64) -> f64 {
        match self.service_radius_km {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => default_km,
        }
    }

    /// Active and with a known position.
    pub fn is_matchable(&self) -> bool {
        self.active && self.location.is_some()
    }
}
