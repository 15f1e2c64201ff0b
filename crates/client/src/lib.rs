//! Search service configuration client.
//!
//! This crate models the configuration resources of a cloud search service
//! (indexes, indexers, skillsets, data sources) and manages their remote
//! lifecycle over the service's REST API. Every resource serializes to the
//! service's JSON wire format and is created, fetched, deleted or replaced
//! through an injected [`Endpoint`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod resource;
pub mod wire;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::{SearchService, SearchServiceBuilder};
pub use endpoints::{Endpoint, EndpointResponse, HttpEndpoint};
pub use error::{ClientError, ConfigurationError, Result};
pub use models::{
    DataContainer, DataSource, DataSourceType, FieldMapping, FieldMappingFunction, Index,
    IndexField, Indexer, IndexerSchedule, ScoringProfile, ScoringProfileFunction, Skill,
    SkillInput, SkillKind, SkillOutput, Skillset, Suggester,
};
pub use resource::{CrudResource, Operation, ResourceKind, fetch_resource};
pub use wire::{Loadable, Mapping, WireFormat, WirePayload};
