//! Presentation layer for sos-dispatch
//!
//! This crate contains CLI definitions, output formatters,
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, PositionArgs};
pub use output::console::{ConsoleFormatter, JsonFormatter};
pub use output::formatter::OutputFormatter;
pub use progress::reporter::ProgressReporter;
