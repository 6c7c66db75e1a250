//! Configuration system for quillpath.
//!
//! This module provides the configuration structure for the `quillpath` command
//! with sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use quillpath::config::{Config, OutputFormat};
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.output_format, OutputFormat::Json);
//! assert!(config.pretty);
//!
//! // Create custom configuration
//! let custom = Config {
//!     output_format: OutputFormat::Yaml,
//!     ..Config::default()
//! };
//! # let _ = custom;
//! ```

use serde::{Deserialize, Serialize};

/// How resolved values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Configuration for the quillpath command.
///
/// All fields have sensible defaults via `Config::default()`.
///
/// # Fields
///
/// * `output_format` - Format used to print resolved values (default: json)
/// * `pretty` - Pretty-print JSON output (default: true)
/// * `preserve_numbers` - Keep numbers as their literal text when loading (default: false)
/// * `null_when_not_found` - Print `null` and succeed when a path is absent (default: false)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Format used to print resolved values
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Keep numbers as their literal text when loading documents
    #[serde(default)]
    pub preserve_numbers: bool,

    /// Print `null` and exit successfully when a path is absent
    #[serde(default)]
    pub null_when_not_found: bool,
}

/// Returns the default for pretty printing.
fn default_pretty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            pretty: default_pretty(),
            preserve_numbers: false,
            null_when_not_found: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/quillpath/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("quillpath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("ignoring malformed config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("cannot read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path` as pretty TOML.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
