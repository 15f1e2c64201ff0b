//! Blocking HTTP implementation of [`Endpoint`].
//!
//! Responsibilities:
//! - Build collection and item URLs with the `api-version` query parameter.
//! - Attach the admin or query key as the `api-key` header.
//! - Return the raw status and body of every response.
//!
//! Does NOT handle:
//! - Status interpretation (see `crate::resource`).
//! - Retries or session management. The service authenticates per request.
//!
//! Invariants:
//! - Resource names are percent-encoded before being placed in a path.
//! - Keys are never logged.

use reqwest::Method;
use reqwest::blocking::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use secrecy::ExposeSecret;
use tracing::debug;
use url::Url;

use super::url_encoding::encode_path_segment;
use super::{Endpoint, EndpointResponse};
use crate::client::SearchService;
use crate::error::{ClientError, Result};
use crate::resource::ResourceKind;
use crate::wire::Mapping;

/// Header carrying the service key.
pub const API_KEY_HEADER: &str = "api-key";

/// Query parameter selecting the REST API version.
pub const API_VERSION_PARAM: &str = "api-version";

/// An [`Endpoint`] bound to one resource collection of a [`SearchService`].
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    service: SearchService,
    kind: ResourceKind,
}

impl HttpEndpoint {
    pub fn new(service: SearchService, kind: ResourceKind) -> Self {
        Self { service, kind }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// `{base}/{collection}?api-version={v}`
    pub fn collection_url(&self) -> Result<Url> {
        let raw = format!("{}/{}", self.service.base_url(), self.kind.collection());
        self.versioned(&raw)
    }

    /// `{base}/{collection}/{name}?api-version={v}`
    pub fn item_url(&self, name: &str) -> Result<Url> {
        let raw = format!(
            "{}/{}/{}",
            self.service.base_url(),
            self.kind.collection(),
            encode_path_segment(name)
        );
        self.versioned(&raw)
    }

    fn versioned(&self, raw: &str) -> Result<Url> {
        let mut url =
            Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
        url.query_pairs_mut()
            .append_pair(API_VERSION_PARAM, self.service.api_version());
        Ok(url)
    }

    fn send(
        &self,
        method: Method,
        url: Url,
        needs_admin: bool,
        body: Option<Vec<u8>>,
    ) -> Result<EndpointResponse> {
        debug!(%method, path = url.path(), needs_admin, "Sending request");

        let mut request: RequestBuilder = self
            .service
            .http()
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.service.key_for(needs_admin).expose_secret());
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, body_len = body.len(), "Received response");

        Ok(EndpointResponse { status, body })
    }
}

impl Endpoint for HttpEndpoint {
    fn post(&self, payload: &Mapping, needs_admin: bool) -> Result<EndpointResponse> {
        let body = serde_json::to_vec(payload)?;
        self.send(Method::POST, self.collection_url()?, needs_admin, Some(body))
    }

    fn get(&self, name: &str, needs_admin: bool) -> Result<EndpointResponse> {
        self.send(Method::GET, self.item_url(name)?, needs_admin, None)
    }

    fn delete(&self, name: &str, needs_admin: bool) -> Result<EndpointResponse> {
        self.send(Method::DELETE, self.item_url(name)?, needs_admin, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn endpoint(kind: ResourceKind) -> HttpEndpoint {
        SearchService::builder()
            .service_name("contoso")
            .admin_key(SecretString::new("admin".to_string().into()))
            .build()
            .unwrap()
            .endpoint(kind)
    }

    #[test]
    fn test_collection_url() {
        let url = endpoint(ResourceKind::Indexer).collection_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://contoso.search.windows.net/indexers?api-version=2020-06-30"
        );
    }

    #[test]
    fn test_item_url_encodes_name() {
        let url = endpoint(ResourceKind::DataSource)
            .item_url("blob/ds 1")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://contoso.search.windows.net/datasources/blob%2Fds%201?api-version=2020-06-30"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            endpoint(ResourceKind::Skillset).kind(),
            ResourceKind::Skillset
        );
    }
}
