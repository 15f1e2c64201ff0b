//! The CRUD lifecycle shared by every named service resource.
//!
//! Responsibilities:
//! - Define [`CrudResource`]: create, fetch, delete, update and verify against an
//!   injected [`Endpoint`].
//! - Map unexpected statuses to `ClientError::RemoteOperation` / `NotFound`.
//! - Re-ingest fetched definitions through [`fetch_resource`].
//!
//! Does NOT handle:
//! - URL construction or authentication headers (see `endpoints::http`).
//! - Retries, rollback or conflict detection.
//!
//! Invariants:
//! - An empty name fails with a configuration error before the endpoint is touched.
//! - Each operation issues exactly one endpoint call, `update` issues two (delete, then create).
//! - `update` never calls create when delete failed.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::endpoints::{Endpoint, EndpointResponse};
use crate::error::{ClientError, ConfigurationError, Result, truncate_body};
use crate::wire::{Loadable, WireFormat};

/// The service-side type of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Index,
    Indexer,
    Skillset,
    DataSource,
}

impl ResourceKind {
    /// Name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Indexer => "indexer",
            Self::Skillset => "skillset",
            Self::DataSource => "datasource",
        }
    }

    /// REST collection path segment.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Index => "indexes",
            Self::Indexer => "indexers",
            Self::Skillset => "skillsets",
            Self::DataSource => "datasources",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote lifecycle operation, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Fetch,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Fetch => "fetch",
            Self::Delete => "delete",
        }
    }

    /// Status that signals success for this operation.
    pub fn expected_status(&self) -> u16 {
        match self {
            Self::Create => 201,
            Self::Fetch => 200,
            Self::Delete => 204,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, independently creatable/retrievable/deletable service resource.
///
/// The transport is passed to every call, so the same resource value can be
/// sent to a real [`crate::HttpEndpoint`] or a test double.
pub trait CrudResource: WireFormat {
    /// Resource type, used for diagnostics and endpoint selection.
    const KIND: ResourceKind;

    /// Resource name, unique within its type.
    fn name(&self) -> &str;

    /// Create the resource. Succeeds only on 201 Created.
    fn create<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<()> {
        let name = require_name(Self::KIND, self.name())?;
        let payload = self.to_wire_format()?;
        debug!(resource = %Self::KIND, name, operation = "create", "Dispatching");
        let response = endpoint.post(&payload, true)?;
        expect_status(Self::KIND, Operation::Create, name, response).map(|_| ())
    }

    /// Fetch the remote definition. Succeeds only on 200 OK.
    fn fetch<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<EndpointResponse> {
        fetch_by_name(Self::KIND, endpoint, self.name())
    }

    /// Delete the resource. Succeeds only on 204 No Content.
    fn delete<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<()> {
        let name = require_name(Self::KIND, self.name())?;
        debug!(resource = %Self::KIND, name, operation = "delete", "Dispatching");
        let response = endpoint.delete(name, true)?;
        expect_status(Self::KIND, Operation::Delete, name, response).map(|_| ())
    }

    /// Replace the remote resource: delete, then create.
    ///
    /// Not atomic. If create fails after a successful delete, the resource
    /// stays absent remotely.
    fn update<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<()> {
        self.delete(endpoint)?;
        self.create(endpoint).inspect_err(|e| {
            warn!(
                resource = %Self::KIND,
                name = self.name(),
                error = %e,
                "Create failed after delete; resource is now absent"
            );
        })
    }

    /// Check that the resource exists remotely. Same contract as [`Self::fetch`].
    fn verify<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<EndpointResponse> {
        self.fetch(endpoint)
    }
}

/// Fetch a resource by name and rebuild it from the returned definition.
pub fn fetch_resource<R, E>(endpoint: &E, name: &str) -> Result<R>
where
    R: CrudResource + Loadable,
    E: Endpoint + ?Sized,
{
    let response = fetch_by_name(R::KIND, endpoint, name)?;
    R::load(response.into_payload())
}

fn fetch_by_name<E: Endpoint + ?Sized>(
    kind: ResourceKind,
    endpoint: &E,
    name: &str,
) -> Result<EndpointResponse> {
    let name = require_name(kind, name)?;
    debug!(resource = %kind, name, operation = "fetch", "Dispatching");
    let response = endpoint.get(name, true)?;
    if response.is_status(404) {
        warn!(resource = %kind, name, status = 404, "Resource not found");
        return Err(ClientError::NotFound {
            resource: kind,
            name: name.to_string(),
            body: response.body,
        });
    }
    expect_status(kind, Operation::Fetch, name, response)
}

fn require_name(kind: ResourceKind, name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(ConfigurationError::MissingName { resource: kind }.into());
    }
    Ok(name)
}

fn expect_status(
    kind: ResourceKind,
    operation: Operation,
    name: &str,
    response: EndpointResponse,
) -> Result<EndpointResponse> {
    let status = response.status;
    if response.is_status(operation.expected_status()) {
        debug!(resource = %kind, name, %operation, status, "Succeeded");
        return Ok(response);
    }

    warn!(resource = %kind, name, %operation, status, "Rejected by service");
    debug!(body = %truncate_body(&response.body), "Rejection body");
    Err(ClientError::RemoteOperation {
        resource: kind,
        operation,
        status,
        body: response.body,
    })
}
