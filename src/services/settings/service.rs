use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::Settings;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read-only access to the startup configuration file.
pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    /// Use the per-user config directory.
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        if let Some(dirs) = ProjectDirs::from("com", "FlipCountdown", "FlipCountdown") {
            Some(dirs.config_dir().join(CONFIG_FILE_NAME))
        } else {
            log::warn!("Unable to resolve project directory; using built-in settings");
            None
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load settings. A missing file is not an error and yields defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(Settings::default());
        };

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}; using defaults", path.display());
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(&text)
            .map(Settings::normalized)
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load settings, falling back to defaults on any error.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Settings::default()
            }
        }
    }

    pub fn parse(text: &str) -> Result<Settings, toml::de::Error> {
        toml::from_str(text)
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}
