//! Indexer models.
//!
//! An indexer pulls documents from a data source, optionally runs them
//! through a skillset, and writes the result into a target index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resource::{CrudResource, ResourceKind};
use crate::wire::{Loadable, Mapping, WireFormat, WirePayload, load_resource};

/// Maps a source field (or enrichment output) onto an index field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub source_field_name: String,
    /// Defaults to `source_field_name` on the service side when unset.
    pub target_field_name: Option<String>,
    pub mapping_function: Option<FieldMappingFunction>,
}

impl FieldMapping {
    /// Map a field onto an index field of the same name.
    pub fn new(source_field_name: impl Into<String>) -> Self {
        Self {
            source_field_name: source_field_name.into(),
            target_field_name: None,
            mapping_function: None,
        }
    }

    /// Map a field onto a differently named index field.
    pub fn renamed(
        source_field_name: impl Into<String>,
        target_field_name: impl Into<String>,
    ) -> Self {
        Self {
            target_field_name: Some(target_field_name.into()),
            ..Self::new(source_field_name)
        }
    }

    pub fn with_function(mut self, function: FieldMappingFunction) -> Self {
        self.mapping_function = Some(function);
        self
    }
}

impl WireFormat for FieldMapping {}

/// Transformation applied to a value while it is mapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMappingFunction {
    /// Function name, e.g. `base64Encode` or `extractTokenAtPosition`.
    pub name: String,
    pub parameters: Option<Mapping>,
}

impl FieldMappingFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Mapping) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

impl WireFormat for FieldMappingFunction {}

/// Recurring execution schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerSchedule {
    /// XSD dayTimeDuration, e.g. `PT2H`. Not validated locally.
    pub interval: String,
    pub start_time: Option<DateTime<Utc>>,
}

impl IndexerSchedule {
    pub fn new(interval: impl Into<String>) -> Self {
        Self {
            interval: interval.into(),
            start_time: None,
        }
    }

    pub fn starting_at(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }
}

impl WireFormat for IndexerSchedule {}

/// An indexer definition.
///
/// `update()` is destructive: the remote indexer is deleted, then recreated,
/// which also resets its execution history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexer {
    pub name: String,
    pub description: Option<String>,
    pub data_source_name: String,
    pub target_index_name: String,
    pub skillset_name: Option<String>,
    #[serde(default)]
    pub field_mappings: Vec<FieldMapping>,
    #[serde(default)]
    pub output_field_mappings: Vec<FieldMapping>,
    pub schedule: Option<IndexerSchedule>,
    #[serde(default)]
    pub disabled: bool,
    /// Free-form execution parameters (`batchSize`, `configuration`, ...).
    pub parameters: Option<Mapping>,
    /// Extra top-level keys, applied after the typed fields.
    #[serde(flatten)]
    pub additional_parameters: Mapping,
}

impl Indexer {
    pub fn new(
        name: impl Into<String>,
        data_source_name: impl Into<String>,
        target_index_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            data_source_name: data_source_name.into(),
            target_index_name: target_index_name.into(),
            skillset_name: None,
            field_mappings: Vec::new(),
            output_field_mappings: Vec::new(),
            schedule: None,
            disabled: false,
            parameters: None,
            additional_parameters: Mapping::new(),
        }
    }

    pub fn with_skillset_name(mut self, skillset_name: impl Into<String>) -> Self {
        self.skillset_name = Some(skillset_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field_mapping(mut self, mapping: FieldMapping) -> Self {
        self.field_mappings.push(mapping);
        self
    }

    pub fn with_output_field_mapping(mut self, mapping: FieldMapping) -> Self {
        self.output_field_mappings.push(mapping);
        self
    }

    pub fn with_schedule(mut self, schedule: IndexerSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn with_parameters(mut self, parameters: Mapping) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_additional_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.additional_parameters.insert(key.into(), value.into());
        self
    }
}

impl WireFormat for Indexer {}

impl CrudResource for Indexer {
    const KIND: ResourceKind = ResourceKind::Indexer;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Loadable for Indexer {
    fn load(data: impl Into<WirePayload>) -> Result<Self> {
        load_resource(data, &["name", "dataSourceName", "targetIndexName"])
    }
}
