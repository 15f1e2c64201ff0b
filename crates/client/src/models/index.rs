//! Index models.
//!
//! This module contains the schema of a search index: its fields, scoring
//! profiles, suggesters and CORS settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::scoring_profile::ScoringProfile;
use crate::resource::{CrudResource, ResourceKind};
use crate::wire::{Loadable, Mapping, WireFormat, WirePayload, load_resource};

/// A search index definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<IndexField>,
    #[serde(default)]
    pub scoring_profiles: Vec<ScoringProfile>,
    /// Profile applied when a query names none.
    pub default_scoring_profile: Option<String>,
    #[serde(default)]
    pub suggesters: Vec<Suggester>,
    pub cors_options: Option<CorsOptions>,
    /// Extra top-level keys (`analyzers`, `encryptionKey`, ...), applied after the typed fields.
    #[serde(flatten)]
    pub additional_parameters: Mapping,
}

impl Index {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            scoring_profiles: Vec::new(),
            default_scoring_profile: None,
            suggesters: Vec::new(),
            cors_options: None,
            additional_parameters: Mapping::new(),
        }
    }

    pub fn with_field(mut self, field: IndexField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_scoring_profile(mut self, profile: ScoringProfile) -> Self {
        self.scoring_profiles.push(profile);
        self
    }

    pub fn with_default_scoring_profile(mut self, name: impl Into<String>) -> Self {
        self.default_scoring_profile = Some(name.into());
        self
    }

    pub fn with_suggester(mut self, suggester: Suggester) -> Self {
        self.suggesters.push(suggester);
        self
    }

    pub fn with_cors_options(mut self, cors: CorsOptions) -> Self {
        self.cors_options = Some(cors);
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

    /// The key field, if one is declared.
    pub fn key_field(&self) -> Option<&IndexField> {
        self.fields.iter().find(|f| f.key == Some(true))
    }
}

impl WireFormat for Index {}

impl CrudResource for Index {
    const KIND: ResourceKind = ResourceKind::Index;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Loadable for Index {
    fn load(data: impl Into<WirePayload>) -> Result<Self> {
        load_resource(data, &["name"])
    }
}

/// One field of an index schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexField {
    pub name: String,
    /// EDM type, e.g. `Edm.String` or `Collection(Edm.String)`.
    #[serde(rename = "type")]
    pub field_type: String,
    pub key: Option<bool>,
    pub searchable: Option<bool>,
    pub filterable: Option<bool>,
    pub sortable: Option<bool>,
    pub facetable: Option<bool>,
    pub retrievable: Option<bool>,
    pub analyzer: Option<String>,
}

impl IndexField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            key: None,
            searchable: None,
            filterable: None,
            sortable: None,
            facetable: None,
            retrievable: None,
            analyzer: None,
        }
    }

    /// An `Edm.String` key field.
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            key: Some(true),
            ..Self::new(name, "Edm.String")
        }
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = Some(true);
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = Some(true);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = Some(true);
        self
    }

    pub fn facetable(mut self) -> Self {
        self.facetable = Some(true);
        self
    }

    pub fn with_retrievable(mut self, retrievable: bool) -> Self {
        self.retrievable = Some(retrievable);
        self
    }

    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }
}

impl WireFormat for IndexField {}

/// Suggester search mode. The service supports a single mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggesterSearchMode {
    #[default]
    AnalyzingInfixMatching,
}

/// Type-ahead configuration over a set of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggester {
    pub name: String,
    #[serde(default)]
    pub search_mode: SuggesterSearchMode,
    pub source_fields: Vec<String>,
}

impl Suggester {
    pub fn new(name: impl Into<String>, source_fields: Vec<String>) -> Self {
        Self {
            name: name.into(),
            search_mode: SuggesterSearchMode::AnalyzingInfixMatching,
            source_fields,
        }
    }
}

impl WireFormat for Suggester {}

/// Cross-origin access from browser clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsOptions {
    pub allowed_origins: Vec<String>,
    pub max_age_in_seconds: Option<u64>,
}

impl WireFormat for CorsOptions {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scoring_profile::{ScoringProfileFunction, ScoringProfileText, TextWeight};
    use serde_json::json;

    fn hotels() -> Index {
        Index::new("hotels")
            .with_field(IndexField::key("hotelId"))
            .with_field(
                IndexField::new("hotelName", "Edm.String")
                    .searchable()
                    .sortable(),
            )
            .with_field(
                IndexField::new("description", "Edm.String")
                    .searchable()
                    .with_analyzer("en.lucene"),
            )
            .with_field(IndexField::new("tags", "Collection(Edm.String)").facetable())
            .with_field(IndexField::new("lastRenovationDate", "Edm.DateTimeOffset").filterable())
            .with_scoring_profile(
                ScoringProfile::new("boostNewer")
                    .with_text(ScoringProfileText::new(vec![TextWeight::new(
                        "hotelName",
                        2.0,
                    )]))
                    .with_function(
                        ScoringProfileFunction::freshness("lastRenovationDate", "P365D")
                            .with_boost(5.0),
                    ),
            )
            .with_default_scoring_profile("boostNewer")
            .with_suggester(Suggester::new("sg", vec!["hotelName".to_string()]))
    }

    #[test]
    fn test_field_wire_omits_unset_flags() {
        let wire = IndexField::new("tags", "Collection(Edm.String)")
            .facetable()
            .to_wire_format()
            .unwrap();

        assert_eq!(
            serde_json::Value::Object(wire),
            json!({"name": "tags", "type": "Collection(Edm.String)", "facetable": true})
        );
    }

    #[test]
    fn test_suggester_search_mode() {
        let wire = Suggester::new("sg", vec!["hotelName".to_string()])
            .to_wire_format()
            .unwrap();
        assert_eq!(wire["searchMode"], "analyzingInfixMatching");
    }

    #[test]
    fn test_key_field() {
        assert_eq!(hotels().key_field().map(|f| f.name.as_str()), Some("hotelId"));
        assert!(Index::new("empty").key_field().is_none());
    }

    #[test]
    fn test_round_trip() {
        let index = hotels()
            .with_cors_options(CorsOptions {
                allowed_origins: vec!["*".to_string()],
                max_age_in_seconds: Some(300),
            })
            .with_additional_parameter(
                "similarity",
                json!({"@odata.type": "#Microsoft.Azure.Search.BM25Similarity"}),
            );

        let loaded = Index::load(index.to_wire_format().unwrap()).unwrap();

        assert_eq!(loaded, index);
    }
}
