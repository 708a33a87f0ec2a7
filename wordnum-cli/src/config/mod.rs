//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordnum_core::TrailingFragment;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// What to do with text after the last period
    pub trailing_fragment: TrailingFragment,

    /// Digitize sentences in parallel
    pub parallel: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl OutputConfig {
    /// Resolve the configured default format
    pub fn format(&self) -> Result<OutputFormat> {
        self.default_format.parse().map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.default_format
            ))
            .into()
        })
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        config.output.format()?;
        Ok(config)
    }

    /// Render the configuration as commented TOML
    pub fn to_toml_string(&self) -> Result<String> {
        let body = toml::to_string_pretty(self)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(format!(
            "# wordnum configuration\n\
             #\n\
             # processing.trailing_fragment: \"drop\" or \"keep\" text after the last period\n\
             # processing.parallel: digitize sentences on all cores\n\
             # output.default_format: \"text\" or \"json\"\n\n{body}"
        ))
    }
}
