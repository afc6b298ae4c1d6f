//! Settings file for CLI defaults.
//!
//! Format:
//! ```yaml
//! wrap_special: true
//! format: json
//! strict_ids: false
//! ```
//!
//! Every field is optional. Command-line flags take precedence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{CodecError, Result};

/// Name of the settings file looked up in the working directory
pub const CONFIG_FILENAME: &str = ".char-codec.yml";

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Defaults applied when a flag is not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bracket encoded output with the begin/end markers
    pub wrap_special: bool,
    /// Output rendering
    pub format: OutputFormat,
    /// Reject non-numeric entries in id lists instead of skipping them
    pub strict_ids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wrap_special: true,
            format: OutputFormat::Text,
            strict_ids: false,
        }
    }
}

/// Parses settings file content
pub fn parse_settings(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| CodecError::Config(format!("Invalid settings YAML: {}", e)))
}

/// Loads settings from `path`, falling back to defaults when it does not exist.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)?;
    let settings = parse_settings(&content)?;
    debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
