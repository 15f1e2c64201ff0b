//! Centralized constants for the azsearch workspace.
//!
//! Default values shared by the config loader and the client builder.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// REST API version sent as the `api-version` query parameter.
pub const DEFAULT_API_VERSION: &str = "2020-06-30";

/// Domain suffix appended to a bare service name to form the base URL.
pub const SERVICE_DOMAIN_SUFFIX: &str = "search.windows.net";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_SERVICE_NAME: &str = "AZSEARCH_SERVICE_NAME";
pub const ENV_ENDPOINT: &str = "AZSEARCH_ENDPOINT";
pub const ENV_API_VERSION: &str = "AZSEARCH_API_VERSION";
pub const ENV_ADMIN_KEY: &str = "AZSEARCH_ADMIN_KEY";
pub const ENV_QUERY_KEY: &str = "AZSEARCH_QUERY_KEY";
pub const ENV_TIMEOUT: &str = "AZSEARCH_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "AZSEARCH_SKIP_VERIFY";
pub const ENV_CONFIG_PATH: &str = "AZSEARCH_CONFIG_PATH";
