//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, JSON config files, and direct builder methods.
//! - Validate and normalize the merged values into a `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods > environment variables > config file values, regardless of call order.
//! - An explicit endpoint wins over a service name from the same or a lower layer.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::{config_path_from_env, read_env};
use super::error::ConfigError;
use super::file::{default_config_path, load_file_layer};
use crate::constants::{DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::service_base_url;
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// One source of configuration values. Unset values fall through to lower layers.
#[derive(Debug, Default, Clone)]
pub(crate) struct Layer {
    pub endpoint: Option<String>,
    pub service_name: Option<String>,
    pub api_version: Option<String>,
    pub admin_key: Option<SecretString>,
    pub query_key: Option<SecretString>,
    pub skip_verify: Option<bool>,
    pub timeout: Option<Duration>,
}

impl Layer {
    /// Fill every unset value from `lower`.
    fn or(self, lower: Layer) -> Layer {
        // An endpoint or service name in a higher layer shadows both in the lower one.
        let (endpoint, service_name) = if self.endpoint.is_some() || self.service_name.is_some() {
            (self.endpoint, self.service_name)
        } else {
            (lower.endpoint, lower.service_name)
        };

        Layer {
            endpoint,
            service_name,
            api_version: self.api_version.or(lower.api_version),
            admin_key: self.admin_key.or(lower.admin_key),
            query_key: self.query_key.or(lower.query_key),
            skip_verify: self.skip_verify.or(lower.skip_verify),
            timeout: self.timeout.or(lower.timeout),
        }
    }
}

/// Configuration loader that builds config from builder calls, environment
/// variables, and config files.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    explicit: Layer,
    env: Layer,
    file: Layer,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax or
    /// cannot be read. Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        self.env = read_env()?;
        Ok(self)
    }

    /// Read configuration from the JSON config file.
    ///
    /// The path is, in order: `with_config_path`, `AZSEARCH_CONFIG_PATH`, the
    /// platform default. Only the platform default may be absent.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let explicit = self.config_path.clone().or_else(config_path_from_env);
        self.file = match explicit {
            Some(path) => load_file_layer(&path, true)?,
            None => load_file_layer(&default_config_path()?, false)?,
        };
        Ok(self)
    }

    /// Set an explicit base URL.
    pub fn with_endpoint(mut self, url: String) -> Self {
        self.explicit.endpoint = Some(url);
        self
    }

    /// Set the service name (base URL becomes `https://{name}.search.windows.net`).
    pub fn with_service_name(mut self, name: String) -> Self {
        self.explicit.service_name = Some(name);
        self
    }

    /// Set the REST API version.
    pub fn with_api_version(mut self, version: String) -> Self {
        self.explicit.api_version = Some(version);
        self
    }

    /// Set the admin key.
    pub fn with_admin_key(mut self, key: String) -> Self {
        self.explicit.admin_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the query key.
    pub fn with_query_key(mut self, key: String) -> Self {
        self.explicit.query_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.explicit.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.explicit.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let merged = self.explicit.or(self.env).or(self.file);

        let base_url = match (merged.endpoint.as_deref(), merged.service_name.as_deref()) {
            (Some(endpoint), _) => validate_and_normalize_base_url(endpoint)?,
            (None, Some(name)) => {
                validate_service_name(name)?;
                service_base_url(name)
            }
            (None, None) => return Err(ConfigError::MissingEndpoint),
        };

        let admin_key = merged.admin_key.ok_or(ConfigError::MissingAdminKey)?;

        let timeout = merged
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        let api_version = merged
            .api_version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                api_version,
                skip_verify: merged.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig {
                admin_key,
                query_key: merged.query_key,
            },
        })
    }
}

/// Validates the request timeout is within `1..=MAX_TIMEOUT_SECS` seconds.
fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Service names are lowercase letters, digits and dashes.
fn validate_service_name(name: &str) -> Result<(), ConfigError> {
    let name = name.trim();
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            var: "service_name".into(),
            message: format!(
                "must contain only lowercase letters, digits and dashes, got: {name:?}"
            ),
        })
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slash
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingEndpoint);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "endpoint".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://contoso.search.windows.net): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "endpoint".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "endpoint".into(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
