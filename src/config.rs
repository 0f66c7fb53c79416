//! Session configuration with optional TOML file.
//!
//! Resolution order, lowest to highest precedence: built-in defaults, the
//! config file, command-line flags. The file is looked up at the path given
//! on the command line, else `$TGRAPH_CONFIG`, else
//! `<config dir>/tinygraph/config.toml`. Only an explicitly named file is
//! required to exist.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphMode, GraphResult};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TGRAPH_CONFIG";

/// Complete session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Create the session graph as directed.
    pub directed: bool,

    /// Log level used when neither `RUST_LOG` nor `--verbose` is set.
    pub log_level: String,

    /// REPL settings.
    pub repl: ReplConfig,

    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Prompt text.
    pub prompt: String,

    /// Load and save line history.
    pub history: bool,

    /// History file; defaults to `~/.tgraph_history`.
    pub history_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format of command output.
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            directed: false,
            log_level: "warn".to_string(),
            repl: ReplConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "tgraph> ".to_string(),
            history: true,
            history_file: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

impl SessionConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> GraphResult<Self> {
        toml::from_str(text).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Read a config file.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GraphError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> GraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Load the config file, if any, and report where it came from.
    ///
    /// An explicit path (argument or environment) must exist; the default
    /// location is optional.
    pub fn load(explicit: Option<&Path>) -> GraphResult<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, ConfigSource::Flag(path.to_path_buf())));
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            let path = PathBuf::from(path);
            return Ok((Self::from_file(&path)?, ConfigSource::Env(path)));
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                Ok((Self::from_file(&path)?, ConfigSource::DefaultFile(path)))
            }
            searched => Ok((Self::default(), ConfigSource::Defaults { searched })),
        }
    }

    /// Graph mode to create the session with.
    pub fn mode(&self) -> GraphMode {
        GraphMode::from_directed(self.directed)
    }

    /// Effective history file.
    pub fn history_path(&self) -> PathBuf {
        if let Some(path) = &self.repl.history_file {
            return path.clone();
        }
        match dirs::home_dir() {
            Some(home) => home.join(".tgraph_history"),
            None => {
                log::warn!("no home directory; keeping history in ./.tgraph_history");
                PathBuf::from(".tgraph_history")
            }
        }
    }
}

/// Where a [`SessionConfig`] was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <path>`.
    Flag(PathBuf),
    /// `$TGRAPH_CONFIG`.
    Env(PathBuf),
    /// `<config dir>/tinygraph/config.toml`.
    DefaultFile(PathBuf),
    /// No file: built-in defaults. `searched` is the default location that
    /// was checked, or `None` when no config directory could be resolved.
    Defaults { searched: Option<PathBuf> },
}

impl ConfigSource {
    /// Log the outcome of config resolution. Call once logging is set up.
    pub fn log(&self) {
        match self {
            Self::Flag(path) | Self::Env(path) | Self::DefaultFile(path) => {
                log::debug!("config loaded from {}", path.display())
            }
            Self::Defaults {
                searched: Some(path),
            } => log::debug!("no config at {}, using defaults", path.display()),
            Self::Defaults { searched: None } => {
                log::warn!("cannot resolve a config directory, using built-in defaults")
            }
        }
    }
}

/// `<config dir>/tinygraph/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tinygraph").join("config.toml"))
}
