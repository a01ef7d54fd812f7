// Configuration loading: defaults <- TOML file <- command-line / environment

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::{FileManagerError, Result};

/// File name looked up in the working directory when no `--config` is given
pub const LOCAL_CONFIG_FILE: &str = "file-manager.toml";

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory the folder is created under
    pub base_dir: PathBuf,
    /// Default tracing filter when neither `RUST_LOG` nor `-v` is set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            log_level: "warn".to_string(),
        }
    }
}

/// Values from the command line that override the file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit `config_path` must exist and parse. Otherwise the local
    /// `file-manager.toml` and then the user config file are tried, and
    /// defaults are used if neither is present.
    pub fn load(config_path: Option<&Path>, overrides: SettingsOverrides) -> Result<Self> {
        let mut settings = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        if let Some(base_dir) = overrides.base_dir {
            settings.base_dir = base_dir;
        }
        if let Some(log_level) = overrides.log_level {
            settings.log_level = log_level;
        }

        Ok(settings)
    }

    /// Parse settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FileManagerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content).map_err(|e| match e {
            FileManagerError::Config(msg) => {
                FileManagerError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| FileManagerError::Config(format!("Invalid TOML syntax: {e}")))
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        get_user_config_path().filter(|path| path.is_file())
    }
}

/// `<config_dir>/file-manager/config.toml`, if the platform has a config dir
pub fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("file-manager").join("config.toml"))
}
