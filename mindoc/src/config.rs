use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

const DEFAULT_CONFIG_FILE: &str = "mindoc.toml";

// Serde needs functions for defaults that can't be expressed as literals,
// and reusing them keeps `Default` and the serde fallbacks in lockstep.
const fn default_watch_interval() -> u64 {
  1
}

fn default_toggle_label() -> String {
  "View code".to_string()
}

/// Configuration options for mindoc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Seconds to sleep between watch-mode re-renders
  #[serde(default = "default_watch_interval")]
  pub watch_interval_secs: u64,

  /// Label shown on the collapsible code-viewer toggle
  #[serde(default = "default_toggle_label")]
  pub toggle_label: String,

  /// Override for the fence language tag derived from the file extension
  #[serde(default)]
  pub language: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      watch_interval_secs: default_watch_interval(),
      toggle_label:        default_toggle_label(),
      language:            None,
    }
  }
}

impl Config {
  /// Create a new configuration from a TOML file.
  ///
  /// # Errors
  ///
  /// Returns an error when the file cannot be read or parsed.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).with_context(|| {
      format!("Failed to read config file: {}", path.display())
    })?;
    toml::from_str(&content).with_context(|| {
      format!("Failed to parse TOML config from {}", path.display())
    })
  }

  /// Resolve configuration for this invocation: an explicit `-c` path wins,
  /// then `mindoc.toml` in the working directory, then built-in defaults.
  ///
  /// # Errors
  ///
  /// Returns an error when a named config file is unreadable or invalid. A
  /// missing default file is not an error.
  pub fn load(cli: &Cli) -> Result<Self> {
    if let Some(path) = &cli.config_file {
      return Self::from_file(path);
    }
    if Path::new(DEFAULT_CONFIG_FILE).exists() {
      return Self::from_file(DEFAULT_CONFIG_FILE);
    }
    Ok(Self::default())
  }
}
