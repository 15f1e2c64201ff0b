//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, API version, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `base_url` never carries a trailing slash once built by the loader.

use crate::constants::{DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECS, SERVICE_DOMAIN_SUFFIX};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the service (e.g., https://my-service.search.windows.net)
    pub base_url: String,
    /// REST API version sent with every request
    pub api_version: String,
    /// Whether to skip TLS verification (for local emulators and proxies)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Create connection settings for a base URL with default API version and timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Access keys
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for an explicit base URL and admin key.
    pub fn with_admin_key(base_url: String, admin_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig::new(admin_key),
        }
    }

    /// Create a config for a named service (`https://{name}.search.windows.net`).
    pub fn for_service(service_name: &str, admin_key: SecretString) -> Self {
        Self::with_admin_key(service_base_url(service_name), admin_key)
    }
}

/// Derive the base URL of a named service.
pub fn service_base_url(service_name: &str) -> String {
    format!("https://{}.{}", service_name.trim(), SERVICE_DOMAIN_SUFFIX)
}
