//! Service handle builder.
//!
//! This module provides a builder pattern for creating [`SearchService`]
//! instances with flexible configuration options.
//!
//! # What this module handles:
//! - Base URL resolution (explicit URL or service name) and normalization
//! - HTTP client construction (timeout, TLS verification)
//! - Conversion from `azsearch_config::Config`
//!
//! # What this module does NOT handle:
//! - Loading configuration from env or files (see `azsearch_config::ConfigLoader`)
//! - Request execution (see [`crate::endpoints`])

use std::time::Duration;

use azsearch_config::constants::{DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECS};
use azsearch_config::{AuthConfig, Config, service_base_url};
use secrecy::SecretString;
use url::Url;

use crate::client::SearchService;
use crate::error::{ClientError, ConfigurationError, Result};

/// Builder for creating a new [`SearchService`].
pub struct SearchServiceBuilder {
    base_url: Option<String>,
    service_name: Option<String>,
    api_version: String,
    admin_key: Option<SecretString>,
    query_key: Option<SecretString>,
    timeout: Duration,
    skip_verify: bool,
}

impl Default for SearchServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchServiceBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            service_name: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            admin_key: None,
            query_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            skip_verify: false,
        }
    }

    /// Set the base URL. Takes precedence over [`Self::service_name`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the service name; the base URL becomes `https://{name}.search.windows.net`.
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Set the REST API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the admin key (required).
    pub fn admin_key(mut self, key: SecretString) -> Self {
        self.admin_key = Some(key);
        self
    }

    /// Set the query key used for calls that do not need admin rights.
    pub fn query_key(mut self, key: SecretString) -> Self {
        self.query_key = Some(key);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set whether to skip TLS verification.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Pre-configure the builder from loaded configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use azsearch_client::SearchService;
    /// use azsearch_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let service = SearchService::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_version = config.connection.api_version.clone();
        self.admin_key = Some(config.auth.admin_key.clone());
        self.query_key = config.auth.query_key.clone();
        self.timeout = config.connection.timeout;
        self.skip_verify = config.connection.skip_verify;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://x.search.windows.net/"` -> `"https://x.search.windows.net"`
    /// - `"https://x.search.windows.net//"` -> `"https://x.search.windows.net"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`SearchService`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if neither a base URL nor a service
    /// name was provided, or if the URL does not parse.
    /// Returns a configuration error if no admin key was provided.
    /// Returns `ClientError::Http` if the HTTP client fails to build.
    pub fn build(self) -> Result<SearchService> {
        let base_url = match (self.base_url, self.service_name) {
            (Some(url), _) => Self::normalize_base_url(&url),
            (None, Some(name)) => service_base_url(&name),
            (None, None) => {
                return Err(ClientError::InvalidUrl(
                    "base_url or service_name is required".to_string(),
                ));
            }
        };
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let admin_key = self
            .admin_key
            .ok_or(ClientError::Configuration(ConfigurationError::MissingAdminKey))?;

        let mut http_builder = reqwest::blocking::Client::builder().timeout(self.timeout);

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SearchService {
            http,
            base_url,
            api_version: self.api_version,
            auth: AuthConfig {
                admin_key,
                query_key: self.query_key,
            },
        })
    }
}
