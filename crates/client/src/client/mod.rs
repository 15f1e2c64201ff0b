//! Handle to one search service.
//!
//! This module provides [`SearchService`], which owns the blocking HTTP
//! client, the normalized base URL, the REST API version and the access keys,
//! and hands out [`HttpEndpoint`]s bound to a resource collection.
//!
//! # Submodules
//! - [`builder`]: Service handle construction and configuration
//!
//! # What this module does NOT handle:
//! - Request execution (delegated to [`crate::endpoints`])
//! - Resource lifecycle semantics (see [`crate::resource::CrudResource`])
//!
//! # Invariants
//! - `base_url` never ends with a slash
//! - Cloning is cheap: the HTTP client is reference counted internally

pub mod builder;

use azsearch_config::{AuthConfig, Config};
use secrecy::SecretString;

use crate::endpoints::HttpEndpoint;
use crate::error::Result;
use crate::resource::{CrudResource, ResourceKind};

pub use builder::SearchServiceBuilder;

/// Connection to a search service.
#[derive(Debug, Clone)]
pub struct SearchService {
    http: reqwest::blocking::Client,
    base_url: String,
    api_version: String,
    auth: AuthConfig,
}

impl SearchService {
    /// Create a new service builder.
    pub fn builder() -> SearchServiceBuilder {
        SearchServiceBuilder::new()
    }

    /// Build a service handle from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        SearchServiceBuilder::new().from_config(config).build()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// REST API version sent with every request.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Check if a separate query key is configured.
    pub fn has_query_key(&self) -> bool {
        self.auth.query_key.is_some()
    }

    /// Endpoint for one resource collection.
    pub fn endpoint(&self, kind: ResourceKind) -> HttpEndpoint {
        HttpEndpoint::new(self.clone(), kind)
    }

    /// Endpoint for the collection of resource type `R`.
    pub fn endpoint_for<R: CrudResource>(&self) -> HttpEndpoint {
        self.endpoint(R::KIND)
    }

    pub(crate) fn http(&self) -> &reqwest::blocking::Client {
        &self.http
    }

    pub(crate) fn key_for(&self, needs_admin: bool) -> &SecretString {
        self.auth.key_for(needs_admin)
    }
}
