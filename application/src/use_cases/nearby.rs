//! Read-only map queries
//!
//! - [`ListNearbyRespondersUseCase`] - responders covering a party's position
//! - [`ListAlertOriginsUseCase`] - last known position of every party

use crate::config::DispatchConfig;
use crate::ports::directory::{Directory, DirectoryError};
use sos_domain::{AlertOrigin, Coordinate, NearbyResponder, PartyId, ProximityMatcher};
use std::sync::Arc;
use tracing::debug;

/// Round a distance for display
fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Use case listing responders in range of a position
pub struct ListNearbyRespondersUseCase<D: Directory + 'static> {
    directory: Arc<D>,
    matcher: ProximityMatcher,
}

impl<D: Directory + 'static> ListNearbyRespondersUseCase<D> {
    pub fn new(directory: Arc<D>, config: &DispatchConfig) -> Self {
        Self {
            directory,
            matcher: ProximityMatcher::with_default_radius(config.default_service_radius_km),
        }
    }

    /// Responders whose radius covers `origin`, in directory order.
    ///
    /// An unknown origin yields an empty list.
    pub async fn execute(
        &self,
        origin: Option<Coordinate>,
    ) -> Result<Vec<NearbyResponder>, DirectoryError> {
        let Some(origin) = origin else {
            debug!("Origin unknown, no nearby responders");
            return Ok(Vec::new());
        };

        let candidates = self.directory.get_active_responders().await?;
        Ok(self
            .matcher
            .find_within_radius(Some(&origin), &candidates)
            .into_iter()
            .filter_map(|m| {
                Some(NearbyResponder {
                    coordinate: m.responder.location?,
                    name: m.responder.name,
                    address: m.responder.address,
                    distance_km: round_km(m.distance_km),
                })
            })
            .collect())
    }

    /// Responders near a party's last reported position
    pub async fn execute_for_party(
        &self,
        party_id: PartyId,
    ) -> Result<Vec<NearbyResponder>, DirectoryError> {
        let party = self.directory.get_party(party_id).await?;
        self.execute(party.location).await
    }
}

/// Use case listing every party with a known position
pub struct ListAlertOriginsUseCase<D: Directory + 'static> {
    directory: Arc<D>,
}

impl<D: Directory + 'static> ListAlertOriginsUseCase<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub async fn execute(&self) -> Result<Vec<AlertOrigin>, DirectoryError> {
        let parties = self.directory.list_parties().await?;
        Ok(parties
            .into_iter()
            .filter_map(|p| {
                let coordinate = p.location?;
                Some(AlertOrigin {
                    name: p.display_name().to_string(),
                    address: p.phone,
                    coordinate,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockDirectory, coord, responder_at};
    use sos_domain::ReportingParty;

    #[tokio::test]
    async fn test_nearby_rounds_and_filters() {
        let directory = Arc::new(MockDirectory::new(
            vec![],
            vec![
                responder_at(1, "+1", 0.0, 0.0449),
                responder_at(2, "+2", 0.0, 0.5),
                responder_at(3, "+3", 0.0, 0.0).inactive(),
            ],
        ));
        let use_case = ListNearbyRespondersUseCase::new(directory, &DispatchConfig::default());

        let nearby = use_case.execute(Some(coord(0.0, 0.0))).await.unwrap();

        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].address, "+1");
        assert_eq!(nearby[0].distance_km, 4.99);
        assert_eq!(nearby[0].coordinate, coord(0.0, 0.0449));
    }

    #[tokio::test]
    async fn test_nearby_unknown_origin_is_empty() {
        let directory = Arc::new(MockDirectory::new(vec![], vec![responder_at(1, "+1", 0.0, 0.0)]));
        let use_case = ListNearbyRespondersUseCase::new(directory, &DispatchConfig::default());
        assert!(use_case.execute(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_nearby_for_party_uses_stored_location() {
        let located = ReportingParty::new(PartyId(1), "a").with_location(coord(0.0, 0.0));
        let unlocated = ReportingParty::new(PartyId(2), "b");
        let directory = Arc::new(MockDirectory::new(
            vec![located, unlocated],
            vec![responder_at(1, "+1", 0.0, 0.01)],
        ));
        let use_case = ListNearbyRespondersUseCase::new(directory, &DispatchConfig::default());

        assert_eq!(use_case.execute_for_party(PartyId(1)).await.unwrap().len(), 1);
        assert!(use_case.execute_for_party(PartyId(2)).await.unwrap().is_empty());
        assert!(
            use_case
                .execute_for_party(PartyId(3))
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_origins_only_located_parties() {
        let parties = vec![
            ReportingParty::new(PartyId(1), "asha")
                .with_full_name("Asha Rao")
                .with_phone("+1555")
                .with_location(coord(12.0, 77.0)),
            ReportingParty::new(PartyId(2), "bo"),
            ReportingParty::new(PartyId(3), "cy").with_location(coord(-1.0, 2.0)),
        ];
        let directory = Arc::new(MockDirectory::new(parties, vec![]));

        let origins = ListAlertOriginsUseCase::new(directory).execute().await.unwrap();

        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0].name, "Asha Rao");
        assert_eq!(origins[0].address.as_deref(), Some("+1555"));
        assert_eq!(origins[1].name, "cy");
        assert!(origins[1].address.is_none());
    }

    #[tokio::test]
    async fn test_origins_propagates_read_failure() {
        let directory = Arc::new(MockDirectory::default().failing_reads());
        assert!(ListAlertOriginsUseCase::new(directory).execute().await.is_err());
    }
}
