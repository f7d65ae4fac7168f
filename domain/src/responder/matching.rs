//! Proximity matching of responders against an alert origin.

use super::entities::{DEFAULT_SERVICE_RADIUS_KM, Responder};
use crate::geo::coordinate::Coordinate;
use crate::geo::distance::distance_km;

/// A responder within range, with its distance to the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponderMatch {
    pub responder: Responder,
    pub distance_km: f64,
}

/// Selects responders whose service radius covers an origin.
#[derive(Debug, Clone, Copy)]
pub struct ProximityMatcher {
    default_radius_km: f64,
}

impl Default for ProximityMatcher {
    fn default() -> Self {
        Self {
            default_radius_km: DEFAULT_SERVICE_RADIUS_KM,
        }
    }
}

impl ProximityMatcher {
    /// Create a matcher with a custom fallback radius.
    ///
    /// A non-positive or non-finite value falls back to 5 km.
    pub fn with_default_radius(default_radius_km: f64) -> Self {
        if default_radius_km.is_finite() && default_radius_km > 0.0 {
            Self { default_radius_km }
        } else {
            Self::default()
        }
    }

    pub fn default_radius_km(&self) -> f64 {
        self.default_radius_km
    }

    /// Responders in range of `origin`, in input order.
    ///
    /// An unknown origin yields no matches. Inactive responders and those
    /// without a known position are skipped before any distance is computed.
    pub fn find_within_radius<'a, I>(
        &self,
        origin: Option<&Coordinate>,
        candidates: I,
    ) -> Vec<ResponderMatch>
    where
        I: IntoIterator<Item = &'a Responder>,
    {
        let Some(origin) = origin else {
            return Vec::new();
        };

        candidates
            .into_iter()
            .filter(|r| r.is_matchable())
            .filter_map(|r| {
                let location = r.location.as_ref()?;
                let distance = distance_km(origin, location);
                (distance <= r.radius_or(self.default_radius_km)).then(|| ResponderMatch {
                    responder: r.clone(),
                    distance_km: distance,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::entities::ResponderId;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn responder_at(id: u64, lat: f64, lon: f64) -> Responder {
        Responder::new(ResponderId(id), format!("r{id}"), format!("+1555000{id}"))
            .with_location(coord(lat, lon))
    }

    #[test]
    fn test_radius_boundary_five_km() {
        let origin = coord(0.0, 0.0);
        let matcher = ProximityMatcher::default();

        let within = [responder_at(1, 0.0, 0.0449).with_radius(5.0)];
        assert_eq!(matcher.find_within_radius(Some(&origin), &within).len(), 1);

        let outside = [responder_at(1, 0.0, 0.0449).with_radius(4.9)];
        assert!(matcher.find_within_radius(Some(&origin), &outside).is_empty());
    }

    #[test]
    fn test_inclusion_iff_distance_within_radius() {
        let origin = coord(10.0, 10.0);
        let matcher = ProximityMatcher::default();
        for (lat, lon, radius) in [
            (10.0, 10.01, 1.0),
            (10.0, 10.02, 2.0),
            (10.05, 10.0, 5.0),
            (10.1, 10.1, 3.0),
            (11.0, 10.0, 150.0),
        ] {
            let r = responder_at(1, lat, lon).with_radius(radius);
            let expected = distance_km(&origin, &coord(lat, lon)) <= radius;
            let found = !matcher.find_within_radius(Some(&origin), [&r]).is_empty();
            assert_eq!(found, expected, "({lat}, {lon}) radius {radius}");
        }
    }

    #[test]
    fn test_excludes_inactive_and_unknown_location() {
        let origin = coord(0.0, 0.0);
        let candidates = vec![
            responder_at(1, 0.0, 0.0).inactive(),
            Responder::new(ResponderId(2), "nowhere", "+2").with_radius(20_000.0),
            responder_at(3, 0.0, 0.0),
        ];
        let matches = ProximityMatcher::default().find_within_radius(Some(&origin), &candidates);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].responder.id, ResponderId(3));
    }

    #[test]
    fn test_unknown_origin_is_empty() {
        let candidates = vec![responder_at(1, 0.0, 0.0)];
        assert!(
            ProximityMatcher::default()
                .find_within_radius(None, &candidates)
                .is_empty()
        );
    }

    #[test]
    fn test_non_positive_radius_uses_default() {
        let origin = coord(0.0, 0.0);
        // ~3.3 km away: inside the 5 km default
        let candidates = vec![responder_at(1, 0.0, 0.03).with_radius(0.0)];
        let matches = ProximityMatcher::default().find_within_radius(Some(&origin), &candidates);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_preserves_input_order() {
        let origin = coord(0.0, 0.0);
        let candidates = vec![
            responder_at(3, 0.0, 0.03),
            responder_at(1, 0.0, 0.01),
            responder_at(2, 0.0, 0.02),
        ];
        let ids: Vec<_> = ProximityMatcher::default()
            .find_within_radius(Some(&origin), &candidates)
            .into_iter()
            .map(|m| m.responder.id.0)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_custom_default_radius() {
        let origin = coord(0.0, 0.0);
        let candidates = vec![responder_at(1, 0.0, 0.06)];
        assert!(
            ProximityMatcher::default()
                .find_within_radius(Some(&origin), &candidates)
                .is_empty()
        );
        let wide = ProximityMatcher::with_default_radius(10.0);
        assert_eq!(wide.find_within_radius(Some(&origin), &candidates).len(), 1);
        assert_eq!(ProximityMatcher::with_default_radius(-1.0).default_radius_km(), 5.0);
    }
}
