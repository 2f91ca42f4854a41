//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Feed endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Feed base URL; the `MM/DD` path segments are appended per request.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer token fallback. The OTD_API_TOKEN env var takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    otd_feed::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

/// Export output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output xlsx path. Overwritten on each run.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Worksheet name, also used for the table object.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_output_path() -> String {
    "TodayInHistory_nov.xlsx".to_string()
}

fn default_sheet_name() -> String {
    "TodayInHistory".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            sheet_name: default_sheet_name(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration, falling back to built-in defaults when the file
    /// does not exist.
    pub fn load(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            info!(config_path = %path, "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply_overrides(&mut self, output: Option<String>, sheet: Option<String>) {
        if let Some(output) = output {
            self.export.output_path = output;
        }
        if let Some(sheet) = sheet {
            self.export.sheet_name = sheet;
        }
    }
}
