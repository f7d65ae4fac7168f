//! CLI entrypoint for sos-dispatch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use sos_application::{
    AlertJournal, DispatchProgress, ListAlertOriginsUseCase, ListNearbyRespondersUseCase,
    NoAlertJournal, NoDispatchProgress, RaiseAlertError, RaiseAlertUseCase,
    UpdateResponderLocationUseCase,
};
use sos_domain::{Coordinate, LocationReport, PartyId, ResponderId};
use sos_infrastructure::{ConfigLoader, ConfiguredNotifier, FileConfig, JsonFileDirectory, JsonlAlertJournal};
use sos_presentation::{
    Cli, Command, ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter, ProgressReporter,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .unwrap_or_else(|| OutputFormat::from(config.output.format_or_default()));
    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Full => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    let Some(command) = cli.command else {
        bail!("A command is required. Run with --help to see the available commands.");
    };

    info!("Starting sos-dispatch");

    // === Dependency Injection ===
    let dispatch_config = config.dispatch.to_dispatch_config();
    let directory = Arc::new(
        JsonFileDirectory::open(&config.directory.path)
            .await
            .with_context(|| format!("Failed to open directory {}", config.directory.path.display()))?,
    );

    match command {
        Command::Alert { party, position } => {
            let notifier = Arc::new(
                ConfiguredNotifier::from_config(&config.notifier)
                    .context("Failed to set up the notifier")?,
            );
            info!("Delivering through the {:?} notifier", notifier.kind());

            let use_case = RaiseAlertUseCase::new(directory, notifier, &dispatch_config)
                .with_journal(open_journal(&config));

            let show_progress =
                !cli.quiet && config.output.show_progress && format == OutputFormat::Full;
            let progress: Box<dyn DispatchProgress> = if show_progress {
                Box::new(ProgressReporter::new())
            } else {
                Box::new(NoDispatchProgress)
            };

            let report = LocationReport::new(position.lat.as_str(), position.lon.as_str());
            let summary = match use_case
                .execute_for(PartyId(party), report, progress.as_ref())
                .await
            {
                Ok(summary) => summary,
                Err(RaiseAlertError::InvalidLocation(reason)) => {
                    bail!("Invalid location: {}", reason)
                }
                Err(e) => return Err(e.into()),
            };

            println!("{}", formatter.format_summary(&summary));
        }

        Command::Nearby { party, lat, lon } => {
            let use_case = ListNearbyRespondersUseCase::new(directory, &dispatch_config);
            let responders = match (party, lat, lon) {
                (Some(id), _, _) => use_case.execute_for_party(PartyId(id)).await?,
                (None, Some(lat), Some(lon)) => {
                    let origin = Coordinate::new(lat, lon).context("Invalid location")?;
                    use_case.execute(Some(origin)).await?
                }
                _ => bail!("Either --party or both --lat and --lon are required"),
            };

            println!("{}", formatter.format_nearby(&responders));
        }

        Command::Origins => {
            let origins = ListAlertOriginsUseCase::new(directory).execute().await?;
            println!("{}", formatter.format_origins(&origins));
        }

        Command::ResponderLocation {
            responder,
            position,
        } => {
            let id = ResponderId(responder);
            let report = LocationReport::new(position.lat.as_str(), position.lon.as_str());
            let location = UpdateResponderLocationUseCase::new(directory)
                .execute(id, &report)
                .await?;

            match format {
                OutputFormat::Json => println!(
                    "{}",
                    ConsoleFormatter::format_json(&serde_json::json!({
                        "responder": id.0,
                        "location": location,
                    }))
                ),
                OutputFormat::Full => println!("{} location updated to {}", id, location),
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber, adding a daily log file when `log_dir` is set
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "sos-dispatch.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn open_journal(config: &FileConfig) -> Arc<dyn AlertJournal> {
    match &config.journal.path {
        Some(path) => match JsonlAlertJournal::open(path) {
            Some(journal) => Arc::new(journal),
            None => {
                warn!("Alert journal disabled");
                Arc::new(NoAlertJournal)
            }
        },
        None => Arc::new(NoAlertJournal),
    }
}
