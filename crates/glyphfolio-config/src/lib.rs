//! User configuration for the glyphfolio page.
//!
//! The configuration lives in `config.toml` under the platform config
//! directory. A missing file means defaults; a broken file is reported and
//! also falls back to defaults so the page still opens.

mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use glyphfolio_core::ColorTheme;
use serde::{Deserialize, Serialize};

pub use error::{Error, Result};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Allowed range for the event poll interval, in milliseconds.
const POLL_INTERVAL_MS_RANGE: (u64, u64) = (10, 1_000);

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color theme for the page and background.
    pub color_theme: ColorTheme,
    /// Whether the background animator is mounted at start.
    pub background: bool,
    /// Event poll timeout, which also paces frames.
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            background: true,
            poll_interval_ms: 50,
        }
    }
}

impl Config {
    /// Project directories for glyphfolio, if the platform has a home.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "glyphfolio")
    }

    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(Error::NoConfigDir)
    }

    /// Load the configuration at `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the configuration at `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load config, using defaults");
            Self::default()
        })
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Event poll timeout, clamped to a sane range.
    pub fn poll_interval(&self) -> Duration {
        let (min, max) = POLL_INTERVAL_MS_RANGE;
        Duration::from_millis(self.poll_interval_ms.clamp(min, max))
    }
}
