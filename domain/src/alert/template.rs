//! Message templates for alert notifications

use crate::geo::coordinate::Coordinate;
use crate::geo::map_link;
use crate::party::entities::ReportingParty;
use crate::responder::entities::Responder;

/// Templates for the two alert audiences
pub struct AlertTemplate;

impl AlertTemplate {
    /// Message sent to a party's trusted contacts
    pub fn trusted_contact_alert(party: &ReportingParty, location: &Coordinate) -> String {
        format!(
            "🚨 SOS Alert! {} may be in danger.\nLocation: {}",
            party.display_name(),
            map_link(location)
        )
    }

    /// Message sent to a responder in range.
    ///
    /// Carries no party-identifying detail. The responder argument is unused
    /// today but lets the fanout customise per recipient.
    pub fn responder_alert(_responder: &Responder, location: &Coordinate) -> String {
        format!(
            "⚠️ Responder Alert! A nearby user needs help.\nLocation: {}",
            map_link(location)
        )
    }

    /// Status line reported to the caller once an alert has been raised
    pub fn raised_status() -> &'static str {
        "SOS sent successfully!"
    }
}
