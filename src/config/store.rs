//! Persisted settings file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::ConfigError;

use super::settings::{EnvOverrides, FileSettings, SettingKey, Settings};

/// File name of the settings file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".commit-msg-generator.json";

/// Location of the settings file under the user's home directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDir)
}

/// Settings store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default home-relative location.
    pub fn from_home() -> Result<Self, ConfigError> {
        default_config_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file contents, `Ok(None)` if the file does not exist yet.
    pub fn read_file(&self) -> Result<Option<FileSettings>, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ReadFailed {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::ParseFailed {
                path: self.path.clone(),
                source,
            })
    }

    /// Effective settings using the process environment.
    pub fn load(&self) -> Settings {
        self.load_with(&EnvOverrides::from_env())
    }

    /// Effective settings using the given overrides.
    ///
    /// Never fails: an unreadable or malformed file is reported and treated as
    /// absent.
    pub fn load_with(&self, env: &EnvOverrides) -> Settings {
        let file = match self.read_file() {
            Ok(file) => file,
            Err(e) => {
                warn!("Could not load config file: {e}");
                None
            }
        };
        Settings::resolve(file.as_ref(), env)
    }

    /// Validate and persist a single key, keeping every other current value.
    pub fn set(&self, key: &str, value: &str) -> Result<Settings, ConfigError> {
        let key: SettingKey = key.parse()?;
        let updated = self.load().with_value(key, value)?;
        self.save(&updated)?;
        debug!("Set {key} in {}", self.path.display());
        Ok(updated)
    }

    /// Overwrite the file with the built-in defaults.
    pub fn reset(&self) -> Result<Settings, ConfigError> {
        let defaults = Settings::default();
        self.save(&defaults)?;
        Ok(defaults)
    }

    /// Write the whole mapping, replacing the file atomically.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(settings).map_err(ConfigError::SerializeFailed)?;

        let write_err = |source| ConfigError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(json.as_bytes()).map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        Ok(())
    }
}
