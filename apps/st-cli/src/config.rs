// config.rs — Tracker configuration.
//
// TrackerConfig decides where the goal collection and the event log live and
// how output is displayed. `for_root()` gives the defaults for a base
// directory; `discover()` layers an optional study-tracker.toml on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file looked up in the base directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "study-tracker.toml";

/// Errors loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Top-level configuration from study-tracker.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// JSON file holding every goal.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// JSONL event log. No log is written when unset.
    #[serde(default)]
    pub events_log: Option<PathBuf>,

    /// Display / output configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display / output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ANSI color in terminal output. Disabled anyway when stdout is not a terminal.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Cells in the progress bar.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            bar_width: default_bar_width(),
        }
    }
}

// Serde default functions
fn default_data_file() -> PathBuf {
    PathBuf::from("study-tracker.json")
}

fn default_color() -> bool {
    true
}

fn default_bar_width() -> usize {
    20
}

impl TrackerConfig {
    /// Default configuration with paths under `root`.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        Self {
            data_file: root.as_ref().join(default_data_file()),
            events_log: None,
            display: DisplayConfig::default(),
        }
    }

    /// Load a config file, resolving relative paths against `root`.
    pub fn load(path: &Path, root: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: TrackerConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        if config.display.bar_width == 0 {
            return Err(ConfigError::Invalid(
                "display.bar_width must be at least 1".to_string(),
            ));
        }
        Ok(config.rooted_at(root))
    }

    /// Use `explicit` when given (it must exist); otherwise read
    /// `<root>/study-tracker.toml` if present, else fall back to defaults.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path, root);
        }
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate, root)
        } else {
            Ok(Self::for_root(root))
        }
    }

    fn rooted_at(mut self, root: &Path) -> Self {
        if self.data_file.is_relative() {
            self.data_file = root.join(&self.data_file);
        }
        if let Some(log) = self.events_log.as_mut().filter(|p| p.is_relative()) {
            *log = root.join(&*log);
        }
        self
    }
}
