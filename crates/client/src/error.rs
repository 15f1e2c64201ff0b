//! Error types for the search service client.
//!
//! Responsibilities:
//! - Separate pre-flight caller mistakes (`ConfigurationError`) from
//!   post-flight rejections by the remote service.
//! - Carry enough of the raw response (status, body) for diagnosis.
//!
//! Does NOT handle:
//! - Retrying. Every error propagates to the caller immediately.
//!
//! Invariants:
//! - A `Configuration` error is always raised before any network call.
//! - `Display` never prints more than a bounded prefix of a response body.

use thiserror::Error;

use crate::resource::{Operation, ResourceKind};

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Maximum number of body characters included in error messages.
const MAX_BODY_DISPLAY_CHARS: usize = 256;

/// Caller-side misconfiguration detected before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The resource has an empty name.
    #[error("{resource} name must not be empty")]
    MissingName { resource: ResourceKind },

    /// A skillset was built without any skills.
    #[error("A skillset must contain at least one skill")]
    EmptySkillset,

    /// No admin key was supplied to the service builder.
    #[error("An admin key is required")]
    MissingAdminKey,

    /// An element of a skillset's `skills` array is not a skill.
    #[error("Element {index} of skills is not a skill: {reason}")]
    InvalidSkill { index: usize, reason: String },
}

/// Errors that can occur during search service client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid caller-side configuration.
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The service answered with a status other than the expected one.
    #[error(
        "Error during {operation} of {resource}: HTTP {status}: {}",
        truncate_body(.body)
    )]
    RemoteOperation {
        resource: ResourceKind,
        operation: Operation,
        status: u16,
        body: String,
    },

    /// Fetch returned 404.
    #[error("{resource} '{name}' not found")]
    NotFound {
        resource: ResourceKind,
        name: String,
        body: String,
    },

    /// A skill payload has no `@odata.type` discriminator.
    #[error("Missing skill type: provide the @odata.type of the skill")]
    MissingSkillType,

    /// A skill payload names a type absent from the skill registry.
    #[error("Unknown skill type: {0}")]
    UnknownSkillType(String),

    /// A required key is absent from a payload being loaded.
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A payload being loaded is not valid JSON or not an object.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// JSON (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error was raised before any network call.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if the remote service answered with an unexpected status.
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, Self::RemoteOperation { .. } | Self::NotFound { .. })
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteOperation { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Shorten a response body for display, respecting char boundaries.
pub(crate) fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_DISPLAY_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
