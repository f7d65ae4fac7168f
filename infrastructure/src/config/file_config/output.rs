//! `[output]` section: how command results are rendered

use serde::{Deserialize, Serialize};
use sos_domain::OutputFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Used when `--output` is not given
    pub format: Option<OutputFormat>,
    /// Colored terminal output
    pub color: bool,
    /// Progress bars while an alert is dispatched
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_progress: true,
        }
    }
}

impl FileOutputConfig {
    /// The configured format, falling back to the console report
    pub fn format_or_default(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_section() {
        let config: FileOutputConfig = toml::from_str(
            r#"
format = "json"
show_progress = false
"#,
        )
        .unwrap();
        assert_eq!(config.format_or_default(), OutputFormat::Json);
        assert!(config.color);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_missing_format_is_full() {
        assert_eq!(
            FileOutputConfig::default().format_or_default(),
            OutputFormat::Full
        );
    }
}
