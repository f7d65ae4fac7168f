//! Console output formatter for dispatch results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use serde::Serialize;
use sos_domain::{AlertOrigin, AlertSummary, DispatchOutcome, NearbyResponder, map_link};

/// Formats dispatch results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the outcome of a raised alert
    pub fn format_summary(summary: &AlertSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("SOS Alert"));
        output.push('\n');

        let status = if summary.success {
            summary.message.green().bold()
        } else {
            summary.message.red().bold()
        };
        output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), status));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Location:".cyan().bold(),
            summary.event.location,
            map_link(&summary.event.location)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Raised at:".cyan().bold(),
            summary.event.raised_at.to_rfc3339()
        ));

        if let Some(error) = &summary.location_error {
            output.push_str(&format!(
                "{} location was not saved: {}\n",
                "Warning:".yellow().bold(),
                error
            ));
        }

        output.push_str(&Self::section_header("Trusted Contacts"));
        output.push_str(&Self::outcomes(&summary.contact_outcomes));

        output.push_str(&Self::section_header("Nearby Responders"));
        if let Some(error) = &summary.responder_lookup_error {
            output.push_str(&format!(
                "  {} responders could not be looked up: {}\n",
                "!".yellow(),
                error
            ));
        }
        output.push_str(&Self::outcomes(&summary.responder_outcomes));

        output.push_str(&format!(
            "\n{} {}/{} delivered",
            "Total:".bold(),
            summary.delivered_count(),
            summary.attempted_count()
        ));
        if summary.failed_count() > 0 {
            output.push_str(&format!(", {}", format!("{} failed", summary.failed_count()).red()));
        }
        output.push('\n');

        output.push_str(&Self::footer());

        output
    }

    /// Format responders covering a position
    pub fn format_nearby(responders: &[NearbyResponder]) -> String {
        if responders.is_empty() {
            return format!("{}\n", "No responders nearby.".dimmed());
        }

        let mut output = format!("{}\n", "Nearby responders:".cyan().bold());
        for responder in responders {
            output.push_str(&format!(
                "  {} {:>7.2} km  {} ({})\n",
                "*".green(),
                responder.distance_km,
                responder.name.bold(),
                responder.address
            ));
        }
        output
    }

    /// Format the known alert origins
    pub fn format_origins(origins: &[AlertOrigin]) -> String {
        if origins.is_empty() {
            return format!("{}\n", "No known alert origins.".dimmed());
        }

        let mut output = format!("{}\n", "Alert origins:".cyan().bold());
        for origin in origins {
            output.push_str(&format!("  {} {}", "*".yellow(), origin.name.bold()));
            if let Some(address) = &origin.address {
                output.push_str(&format!(" ({})", address));
            }
            output.push_str(&format!("\n    {}\n", map_link(&origin.coordinate).dimmed()));
        }
        output
    }

    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn outcomes(outcomes: &[DispatchOutcome]) -> String {
        if outcomes.is_empty() {
            return format!("  {}\n", "(none)".dimmed());
        }

        outcomes
            .iter()
            .map(|outcome| {
                if outcome.succeeded {
                    format!("  {} {}\n", "v".green(), outcome.address)
                } else {
                    format!(
                        "  {} {} ({})\n",
                        "x".red(),
                        outcome.address,
                        outcome.error.as_deref().unwrap_or("Unknown")
                    )
                }
            })
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, summary: &AlertSummary) -> String {
        Self::format_summary(summary)
    }

    fn format_nearby(&self, responders: &[NearbyResponder]) -> String {
        Self::format_nearby(responders)
    }

    fn format_origins(&self, origins: &[AlertOrigin]) -> String {
        Self::format_origins(origins)
    }
}

/// Formats every result as pretty JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, summary: &AlertSummary) -> String {
        ConsoleFormatter::format_json(summary)
    }

    fn format_nearby(&self, responders: &[NearbyResponder]) -> String {
        ConsoleFormatter::format_json(responders)
    }

    fn format_origins(&self, origins: &[AlertOrigin]) -> String {
        ConsoleFormatter::format_json(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sos_domain::{AlertEvent, Coordinate, PartyId};

    fn summary() -> AlertSummary {
        let contact_outcomes = vec![
            DispatchOutcome::success("+1555"),
            DispatchOutcome::failure("+1666", "Send timed out after 250ms"),
        ];
        AlertSummary {
            success: true,
            message: "SOS sent successfully!".to_string(),
            event: AlertEvent::new(PartyId(1), Coordinate::new(12.5, 77.25).unwrap()),
            contacts_notified: vec!["+1555".to_string(), "+1666".to_string()],
            responders_notified: vec![],
            contact_outcomes,
            responder_outcomes: vec![],
            location_persisted: true,
            location_error: None,
            responder_lookup_error: None,
        }
    }

    #[test]
    fn test_summary_lists_failures_with_reason() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_summary(&summary());
        assert!(output.contains("SOS sent successfully!"));
        assert!(output.contains("v +1555"));
        assert!(output.contains("x +1666 (Send timed out after 250ms)"));
        assert!(output.contains("1/2 delivered"));
        assert!(output.contains("(none)"));
    }

    #[test]
    fn test_empty_lists() {
        colored::control::set_override(false);
        assert_eq!(ConsoleFormatter::format_nearby(&[]), "No responders nearby.\n");
        assert_eq!(ConsoleFormatter::format_origins(&[]), "No known alert origins.\n");
    }

    #[test]
    fn test_nearby_shows_distance() {
        colored::control::set_override(false);
        let responders = vec![NearbyResponder {
            name: "Ravi".to_string(),
            address: "+91".to_string(),
            coordinate: Coordinate::new(12.5, 77.25).unwrap(),
            distance_km: 1.25,
        }];
        let output = ConsoleFormatter::format_nearby(&responders);
        assert!(output.contains("1.25 km"));
        assert!(output.contains("Ravi (+91)"));
    }

    #[test]
    fn test_json_summary_is_parseable() {
        let json = JsonFormatter.format_summary(&summary());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["contact_outcomes"][1]["succeeded"], false);
    }
}
