//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Full,
    /// JSON output
    Json,
}

impl From<sos_domain::OutputFormat> for OutputFormat {
    fn from(format: sos_domain::OutputFormat) -> Self {
        match format {
            sos_domain::OutputFormat::Full => Self::Full,
            sos_domain::OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for sos-dispatch
#[derive(Parser, Debug)]
#[command(name = "sos-dispatch")]
#[command(author, version, about = "Emergency alert dispatcher for trusted contacts and nearby responders")]
#[command(long_about = r#"
sos-dispatch raises an SOS alert for a registered party and fans it out
to the party's trusted contacts and to every active responder whose
service radius covers the reported location.

Configuration files are loaded from (in priority order):
1. SOS_* environment variables
2. --config <path>          Explicit config file
3. ./sos-dispatch.toml      Project-level config
4. ~/.config/sos-dispatch/config.toml   Global config

Example:
  sos-dispatch alert --party 1 --lat 12.9716 --lon 77.5946
  sos-dispatch nearby --lat 12.97 --lon 77.59
  sos-dispatch --output json origins
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format, then `full`)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Raise an SOS alert for a registered party
    Alert {
        /// Party raising the alert
        #[arg(long, value_name = "ID")]
        party: u64,

        #[command(flatten)]
        position: PositionArgs,
    },

    /// List active responders whose service area covers a position
    Nearby {
        /// Use the stored location of this party
        #[arg(long, value_name = "ID", conflicts_with_all = ["lat", "lon"])]
        party: Option<u64>,

        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,
    },

    /// List every party with a known location
    Origins,

    /// Record a responder's current position
    ResponderLocation {
        /// Responder reporting its position
        #[arg(long, value_name = "ID")]
        responder: u64,

        #[command(flatten)]
        position: PositionArgs,
    },
}

/// A reported position, kept as text so malformed values reach validation
#[derive(Args, Debug, Clone)]
pub struct PositionArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: String,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_alert_with_negative_longitude() {
        let cli = Cli::parse_from([
            "sos-dispatch",
            "alert",
            "--party",
            "3",
            "--lat",
            "40.7",
            "--lon",
            "-74.0",
        ]);
        match cli.command {
            Some(Command::Alert { party, position }) => {
                assert_eq!(party, 3);
                assert_eq!(position.lat, "40.7");
                assert_eq!(position.lon, "-74.0");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_alert_keeps_malformed_coordinates_as_text() {
        let cli = Cli::parse_from([
            "sos-dispatch", "alert", "--party", "1", "--lat", "north", "--lon", "1",
        ]);
        let Some(Command::Alert { position, .. }) = cli.command else {
            panic!("expected alert");
        };
        assert_eq!(position.lat, "north");
    }

    #[test]
    fn test_global_output_flag_after_subcommand() {
        let cli = Cli::parse_from(["sos-dispatch", "origins", "--output", "json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Some(Command::Origins)));
    }

    #[test]
    fn test_nearby_rejects_party_with_coordinates() {
        let result = Cli::try_parse_from([
            "sos-dispatch", "nearby", "--party", "1", "--lat", "1", "--lon", "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_from_domain() {
        assert_eq!(
            OutputFormat::from(sos_domain::OutputFormat::Json),
            OutputFormat::Json
        );
    }
}
