//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the search client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use mockito directly in tests)
//! - Test-specific assertions or test logic

use secrecy::SecretString;

// Re-export test utilities from azsearch-client
#[allow(unused_imports)]
pub use azsearch_client::testing::{MockEndpoint, load_fixture, response};

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use azsearch_client::{
    ClientError, ConfigurationError, CrudResource, Loadable, ResourceKind, SearchService,
    WireFormat,
};
#[allow(unused_imports)]
pub use mockito::{Matcher, Server};

pub const ADMIN_KEY: &str = "test-admin-key";
pub const QUERY_KEY: &str = "test-query-key";
pub const API_VERSION: &str = "2020-06-30";

/// Build a service handle pointed at a mock server.
#[allow(dead_code)]
pub fn service_for(server_url: &str) -> SearchService {
    SearchService::builder()
        .base_url(server_url)
        .admin_key(SecretString::new(ADMIN_KEY.to_string().into()))
        .query_key(SecretString::new(QUERY_KEY.to_string().into()))
        .build()
        .expect("Failed to build search service")
}

/// Query matcher for the configured API version.
#[allow(dead_code)]
pub fn api_version_query() -> Matcher {
    Matcher::UrlEncoded("api-version".into(), API_VERSION.into())
}

/// Route `tracing` output to the test harness. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
