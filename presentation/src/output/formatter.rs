//! Output formatter trait

use sos_domain::{AlertOrigin, AlertSummary, NearbyResponder};

/// Trait for formatting dispatch results
pub trait OutputFormatter {
    /// Format the outcome of a raised alert
    fn format_summary(&self, summary: &AlertSummary) -> String;

    /// Format responders covering a position
    fn format_nearby(&self, responders: &[NearbyResponder]) -> String;

    /// Format the known alert origins
    fn format_origins(&self, origins: &[AlertOrigin]) -> String;
}
