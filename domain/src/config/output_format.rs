//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for alert results
///
/// This is a domain concept representing how a summary should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console report (default)
    #[default]
    Full,
    /// JSON output
    Json,
}
