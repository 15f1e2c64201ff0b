//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `AZSEARCH_*` environment variables.
//! - Collect environment variable values into a settings layer.
//!
//! Does NOT handle:
//! - Loading from config files (see file.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::Layer;
use super::error::ConfigError;
use crate::constants::{
    ENV_ADMIN_KEY, ENV_API_VERSION, ENV_CONFIG_PATH, ENV_ENDPOINT, ENV_QUERY_KEY,
    ENV_SERVICE_NAME, ENV_SKIP_VERIFY, ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read the `AZSEARCH_*` environment variables into a settings layer.
pub(crate) fn read_env() -> Result<Layer, ConfigError> {
    let skip_verify = env_var_or_none(ENV_SKIP_VERIFY)
        .map(|skip| {
            skip.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            })
        })
        .transpose()?;

    let timeout = env_var_or_none(ENV_TIMEOUT)
        .map(|timeout| {
            timeout
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue {
                    var: ENV_TIMEOUT.to_string(),
                    message: "must be a number".to_string(),
                })
        })
        .transpose()?;

    Ok(Layer {
        endpoint: env_var_or_none(ENV_ENDPOINT),
        service_name: env_var_or_none(ENV_SERVICE_NAME),
        api_version: env_var_or_none(ENV_API_VERSION),
        admin_key: env_var_or_none(ENV_ADMIN_KEY).map(|k| SecretString::new(k.into())),
        query_key: env_var_or_none(ENV_QUERY_KEY).map(|k| SecretString::new(k.into())),
        skip_verify,
        timeout,
    })
}

/// Config file path from the environment, if set.
pub(crate) fn config_path_from_env() -> Option<std::path::PathBuf> {
    env_var_or_none(ENV_CONFIG_PATH).map(std::path::PathBuf::from)
}
