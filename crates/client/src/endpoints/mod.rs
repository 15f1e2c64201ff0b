//! Transport seam between resources and the search service REST API.
//!
//! Responsibilities:
//! - Define the [`Endpoint`] trait every CRUD operation talks to.
//! - Provide [`HttpEndpoint`], the blocking HTTP implementation.
//!
//! Does NOT handle:
//! - Status interpretation. Endpoints hand back every status untouched,
//!   `crate::resource` decides what counts as success.
//!
//! Invariants:
//! - One trait call issues at most one HTTP request.

mod http;
pub mod url_encoding;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::wire::{Mapping, WirePayload};

pub use http::HttpEndpoint;

/// Raw status and body returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

impl EndpointResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_status(&self, status: u16) -> bool {
        self.status == status
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Hand the body to a `Loadable` model.
    pub fn into_payload(self) -> WirePayload {
        WirePayload::Text(self.body)
    }
}

/// A typed channel to one resource collection of the service.
///
/// `needs_admin` selects the admin key over the query key.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait Endpoint {
    /// Submit a new resource definition.
    fn post(&self, payload: &Mapping, needs_admin: bool) -> Result<EndpointResponse>;

    /// Retrieve a resource definition by name.
    fn get(&self, name: &str, needs_admin: bool) -> Result<EndpointResponse>;

    /// Remove a resource by name.
    fn delete(&self, name: &str, needs_admin: bool) -> Result<EndpointResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_response_json() {
        let response = EndpointResponse::new(200, r#"{"name": "idx"}"#);
        let value: Value = response.json().unwrap();
        assert_eq!(value["name"], "idx");
    }

    #[test]
    fn test_response_json_invalid() {
        let response = EndpointResponse::new(200, "<html>");
        assert!(response.json::<Value>().is_err());
    }

    #[test]
    fn test_into_payload_keeps_body_text() {
        let response = EndpointResponse::new(200, r#"{"name": "idx", "description": null}"#);

        let payload = response.into_payload();

        assert_eq!(
            payload,
            WirePayload::Text(r#"{"name": "idx", "description": null}"#.to_string())
        );
        let map = payload.into_object().unwrap();
        assert!(!map.contains_key("description"));
    }

    #[test]
    fn test_is_status() {
        let response = EndpointResponse::new(204, "");
        assert!(response.is_status(204));
        assert!(!response.is_status(200));
    }
}
