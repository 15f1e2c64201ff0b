//! Data source models.
//!
//! A data source tells indexers where to read documents from. Its connection
//! string is a secret: it is held as a `SecretString`, redacted in `Debug`,
//! and only exposed while the payload is serialized.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::resource::{CrudResource, ResourceKind};
use crate::wire::{Loadable, Mapping, WireFormat, WirePayload, load_resource};

/// Storage backend of a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSourceType {
    #[serde(rename = "azureblob")]
    AzureBlob,
    #[serde(rename = "azuretable")]
    AzureTable,
    #[serde(rename = "azuresql")]
    AzureSql,
    #[serde(rename = "cosmosdb")]
    CosmosDb,
    #[serde(rename = "adlsgen2")]
    AdlsGen2,
}

/// Credentials used by the service to reach the backend.
///
/// The service returns `connectionString: null` on GET, so the secret is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceCredentials {
    #[serde(
        default,
        serialize_with = "serialize_opt_secret",
        deserialize_with = "deserialize_opt_secret"
    )]
    pub connection_string: Option<SecretString>,
}

impl DataSourceCredentials {
    pub fn new(connection_string: SecretString) -> Self {
        Self {
            connection_string: Some(connection_string),
        }
    }
}

impl PartialEq for DataSourceCredentials {
    fn eq(&self, other: &Self) -> bool {
        match (&self.connection_string, &other.connection_string) {
            (Some(a), Some(b)) => a.expose_secret() == b.expose_secret(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl WireFormat for DataSourceCredentials {}

fn serialize_opt_secret<S: Serializer>(
    secret: &Option<SecretString>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_opt_secret<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<SecretString>, D::Error> {
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.map(|s| SecretString::new(s.into())))
}

/// Table, container or collection the data is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataContainer {
    pub name: String,
    /// Backend-specific filter, e.g. a blob folder or a Cosmos DB query.
    pub query: Option<String>,
}

impl DataContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

impl WireFormat for DataContainer {}

/// A data source definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub source_type: DataSourceType,
    #[serde(default)]
    pub credentials: DataSourceCredentials,
    pub container: DataContainer,
    /// Extra top-level keys (`dataChangeDetectionPolicy`, ...), applied after the typed fields.
    #[serde(flatten)]
    pub additional_parameters: Mapping,
}

impl DataSource {
    pub fn new(
        name: impl Into<String>,
        source_type: DataSourceType,
        connection_string: SecretString,
        container: DataContainer,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            source_type,
            credentials: DataSourceCredentials::new(connection_string),
            container,
            additional_parameters: Mapping::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

impl WireFormat for DataSource {}

impl CrudResource for DataSource {
    const KIND: ResourceKind = ResourceKind::DataSource;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Loadable for DataSource {
    fn load(data: impl Into<WirePayload>) -> Result<Self> {
        load_resource(data, &["name", "type", "container"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn blob() -> DataSource {
        DataSource::new(
            "hotels-ds",
            DataSourceType::AzureBlob,
            secret("DefaultEndpointsProtocol=https;AccountKey=hunter2"),
            DataContainer::new("hotels").with_query("2024/"),
        )
    }

    #[test]
    fn test_wire_format_exposes_connection_string() {
        let wire = blob().to_wire_format().unwrap();

        assert_eq!(
            Value::Object(wire),
            json!({
                "name": "hotels-ds",
                "type": "azureblob",
                "credentials": {"connectionString": "DefaultEndpointsProtocol=https;AccountKey=hunter2"},
                "container": {"name": "hotels", "query": "2024/"},
            })
        );
    }

    #[test]
    fn test_debug_redacts_connection_string() {
        let debug = format!("{:?}", blob());
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_load_accepts_null_connection_string() {
        let loaded = DataSource::load(json!({
            "@odata.etag": "\"0x1\"",
            "name": "hotels-ds",
            "type": "cosmosdb",
            "credentials": {"connectionString": null},
            "container": {"name": "hotels", "query": null},
            "dataChangeDetectionPolicy": null,
        }))
        .unwrap();

        assert_eq!(loaded.source_type, DataSourceType::CosmosDb);
        assert!(loaded.credentials.connection_string.is_none());
        assert!(loaded.container.query.is_none());
        assert!(loaded.additional_parameters.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let ds = blob().with_description("hotel docs").with_additional_parameter(
            "dataDeletionDetectionPolicy",
            json!({"@odata.type": "#Microsoft.Azure.Search.SoftDeleteColumnDeletionDetectionPolicy"}),
        );

        let loaded = DataSource::load(ds.to_wire_format().unwrap()).unwrap();

        assert_eq!(loaded, ds);
    }

    #[test]
    fn test_load_requires_type() {
        let err = DataSource::load(json!({"name": "ds", "container": {"name": "c"}})).unwrap_err();
        assert!(err.to_string().contains("type"));
    }
}
