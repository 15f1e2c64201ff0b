//! Configuration management for the search service client.
//!
//! This crate provides types and loaders for the service endpoint, API
//! version and access keys, sourced from builder calls, environment
//! variables, `.env` files and JSON config files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, service_base_url};
