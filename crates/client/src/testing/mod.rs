//! Testing utilities for search client tests.
//!
//! This module provides helper functions for loading test fixtures,
//! proptest strategies for the resource models, and the mock endpoint.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use azsearch_client::testing::{MockEndpoint, load_fixture};
//!
//! let fixture = load_fixture("skillsets/cognitive_skillset.json");
//! let mut endpoint = MockEndpoint::new();
//! ```

pub mod strategies;

use std::path::Path;

pub use crate::endpoints::MockEndpoint;
use crate::endpoints::EndpointResponse;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "indexers/hotels_indexer.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Canned response with the given status and body.
pub fn response(status: u16, body: impl Into<String>) -> EndpointResponse {
    EndpointResponse::new(status, body)
}
