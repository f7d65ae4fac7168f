//! Geographic primitives.
//!
//! - [`coordinate::Coordinate`] — a validated latitude/longitude pair
//! - [`coordinate::LocationReport`] — unvalidated input from the boundary
//! - [`distance::distance_km`] — haversine great-circle distance
//! - [`map_link`] — shareable map URL for a coordinate

pub mod coordinate;
pub mod distance;

use coordinate::Coordinate;

/// Build a map link for a coordinate.
///
/// The comma is percent-encoded so SMS clients keep the whole URL clickable.
pub fn map_link(coordinate: &Coordinate) -> String {
    format!(
        "https://maps.google.com/?q={}%2C{}",
        coordinate.latitude(),
        coordinate.longitude()
    )
}
