//! JSON config file loading.
//!
//! Responsibilities:
//! - Resolve the default config file location via `directories`.
//! - Parse the JSON config file into a settings layer.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Writing config files.
//!
//! Invariants:
//! - A missing file at the *default* location is not an error.
//! - A missing file at an explicitly requested location is an error.
//! - File values have the lowest precedence (see builder.rs).

use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

use super::builder::Layer;
use super::error::ConfigError;
use crate::types::auth::opt_secret_string;

/// On-disk configuration shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FileConfig {
    pub service_name: Option<String>,
    pub endpoint: Option<String>,
    pub api_version: Option<String>,
    #[serde(with = "opt_secret_string")]
    pub admin_key: Option<SecretString>,
    #[serde(with = "opt_secret_string")]
    pub query_key: Option<SecretString>,
    pub timeout_seconds: Option<u64>,
    pub skip_verify: Option<bool>,
}

/// Returns the default path to the configuration file.
///
/// - Linux/macOS: `~/.config/azsearch/config.json`
/// - Windows: `%AppData%\azsearch\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "azsearch")
        .ok_or(ConfigError::ConfigDirUnavailable)?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(&content).map_err(|_| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
    })
}

impl FileConfig {
    pub(crate) fn into_layer(self) -> Layer {
        Layer {
            endpoint: self.endpoint,
            service_name: self.service_name,
            api_version: self.api_version,
            admin_key: self.admin_key,
            query_key: self.query_key,
            skip_verify: self.skip_verify,
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }
}

/// Load a config file into a settings layer.
///
/// `explicit` marks a path the caller asked for; only then is a missing file an error.
pub(crate) fn load_file_layer(path: &Path, explicit: bool) -> Result<Layer, ConfigError> {
    if !path.exists() {
        if explicit {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(path = %path.display(), "No config file at default location");
        return Ok(Layer::default());
    }

    let file = read_config_file(path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(file.into_layer())
}
