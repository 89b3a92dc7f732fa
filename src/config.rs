//! Optional TOML configuration for the terminal front end.
//!
//! ```toml
//! theme = "dark"
//! log_file = "coursedeck.log"
//! state_file = "session.json"
//!
//! [ui]
//! card_width_percent = 90
//! ```
//!
//! Every key is optional. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "coursedeck.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
    HighContrast,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Share of the terminal width a card occupies, 10 through 100.
    pub card_width_percent: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            card_width_percent: 90,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: ThemeChoice,
    pub log_file: Option<PathBuf>,
    /// Where the session snapshot is kept between runs. Unset means the
    /// session is discarded on exit.
    pub state_file: Option<PathBuf>,
    pub ui: UiConfig,
}

impl Config {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loading config");
                Self::from_toml(&text, path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.ui.card_width_percent;
        if !(10..=100).contains(&width) {
            return Err(ConfigError::Invalid {
                key: "ui.card_width_percent",
                message: format!("{width} is outside 10..=100"),
            });
        }
        Ok(())
    }

    /// Apply command-line values on top of the file. Unset overrides leave
    /// the file's value alone.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(state_file) = overrides.state_file {
            self.state_file = Some(state_file);
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = Some(log_file);
        }
        self
    }
}

/// Values given on the command line, which win over the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub theme: Option<ThemeChoice>,
    pub state_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}
