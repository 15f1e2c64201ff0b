//! Errors raised while resolving a search service connection.
//!
//! Invariants:
//! - Variants name the variable or path involved, never its value.
//! - `.env` and config file failures carry no file contents (keys live there).

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a [`Config`](crate::Config) from env, `.env` or file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error(
        "Service endpoint is required. Set AZSEARCH_ENDPOINT or AZSEARCH_SERVICE_NAME, or configure a config file."
    )]
    MissingEndpoint,

    #[error("Admin key is required. Set AZSEARCH_ADMIN_KEY or configure a config file.")]
    MissingAdminKey,

    #[error("Unable to determine config directory")]
    ConfigDirUnavailable,

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse { path: PathBuf },

    #[error("Invalid request timeout: {message}")]
    InvalidTimeout { message: String },

    /// `.env` syntax error. Only the byte offset is kept.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Any other dotenvy failure.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
