//! Scoring profile models.
//!
//! A scoring profile boosts relevance through per-field text weights and
//! scoring functions. Each function carries exactly one parameter block, and
//! the block's key always matches the function's `type`.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire::WireFormat;

/// A named relevance-tuning profile attached to an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfile {
    pub name: String,
    #[serde(default)]
    pub text: Vec<ScoringProfileText>,
    #[serde(default)]
    pub functions: Vec<ScoringProfileFunction>,
    pub function_aggregation: Option<FunctionAggregation>,
}

impl ScoringProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Vec::new(),
            functions: Vec::new(),
            function_aggregation: None,
        }
    }

    pub fn with_text(mut self, text: ScoringProfileText) -> Self {
        self.text.push(text);
        self
    }

    pub fn with_function(mut self, function: ScoringProfileFunction) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_function_aggregation(mut self, aggregation: FunctionAggregation) -> Self {
        self.function_aggregation = Some(aggregation);
        self
    }
}

impl WireFormat for ScoringProfile {}

/// How the results of several scoring functions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionAggregation {
    Sum,
    Average,
    Minimum,
    Maximum,
    FirstMatching,
}

/// A group of per-field text weights.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringProfileText {
    pub weights: Vec<TextWeight>,
}

impl ScoringProfileText {
    pub fn new(weights: Vec<TextWeight>) -> Self {
        Self { weights }
    }
}

impl WireFormat for ScoringProfileText {}

/// Relative weight of one searchable field, serialized as `{field: weight}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextWeight {
    pub field_name: String,
    pub weight: f64,
}

impl TextWeight {
    pub fn new(field_name: impl Into<String>, weight: f64) -> Self {
        Self {
            field_name: field_name.into(),
            weight,
        }
    }
}

impl Serialize for TextWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field_name, &self.weight)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for TextWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextWeightVisitor;

        impl<'de> Visitor<'de> for TextWeightVisitor {
            type Value = TextWeight;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a single-entry map of field name to weight")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TextWeight, A::Error> {
                let (field_name, weight) = map
                    .next_entry::<String, f64>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }
                Ok(TextWeight { field_name, weight })
            }
        }

        deserializer.deserialize_map(TextWeightVisitor)
    }
}

/// Shape of the boost curve between the start and end of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Constant,
    Linear,
    Quadratic,
    Logarithmic,
}

/// A scoring function applied to one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfileFunction {
    /// Discriminator (`type`) plus its matching parameter block.
    #[serde(flatten)]
    pub parameters: ScoringFunctionParameters,
    pub field_name: String,
    pub boost: Option<f64>,
    pub interpolation: Option<Interpolation>,
}

impl ScoringProfileFunction {
    pub fn new(field_name: impl Into<String>, parameters: ScoringFunctionParameters) -> Self {
        Self {
            parameters,
            field_name: field_name.into(),
            boost: None,
            interpolation: None,
        }
    }

    /// Boost documents whose numeric field falls in `[start, end]`.
    pub fn magnitude(field_name: impl Into<String>, start: f64, end: f64) -> Self {
        Self::new(
            field_name,
            ScoringFunctionParameters::Magnitude {
                magnitude: MagnitudeParameters {
                    boosting_range_start: start,
                    boosting_range_end: end,
                    constant_boost_beyond_range: None,
                },
            },
        )
    }

    /// Boost documents whose date field is within `boosting_duration` of now.
    pub fn freshness(field_name: impl Into<String>, boosting_duration: impl Into<String>) -> Self {
        Self::new(
            field_name,
            ScoringFunctionParameters::Freshness {
                freshness: FreshnessParameters {
                    boosting_duration: boosting_duration.into(),
                },
            },
        )
    }

    /// Boost documents close to the point passed in `reference_point_parameter`.
    pub fn distance(
        field_name: impl Into<String>,
        reference_point_parameter: impl Into<String>,
        boosting_distance: f64,
    ) -> Self {
        Self::new(
            field_name,
            ScoringFunctionParameters::Distance {
                distance: DistanceParameters {
                    reference_point_parameter: reference_point_parameter.into(),
                    boosting_distance,
                },
            },
        )
    }

    /// Boost documents sharing tags with the query's `tags_parameter`.
    pub fn tag(field_name: impl Into<String>, tags_parameter: impl Into<String>) -> Self {
        Self::new(
            field_name,
            ScoringFunctionParameters::Tag {
                tag: TagParameters {
                    tags_parameter: tags_parameter.into(),
                },
            },
        )
    }

    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    /// Wire discriminator of this function.
    pub fn function_type(&self) -> &'static str {
        match self.parameters {
            ScoringFunctionParameters::Magnitude { .. } => "magnitude",
            ScoringFunctionParameters::Freshness { .. } => "freshness",
            ScoringFunctionParameters::Distance { .. } => "distance",
            ScoringFunctionParameters::Tag { .. } => "tag",
        }
    }
}

impl WireFormat for ScoringProfileFunction {}

/// The parameter block of a scoring function, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScoringFunctionParameters {
    Magnitude { magnitude: MagnitudeParameters },
    Freshness { freshness: FreshnessParameters },
    Distance { distance: DistanceParameters },
    Tag { tag: TagParameters },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagnitudeParameters {
    pub boosting_range_start: f64,
    pub boosting_range_end: f64,
    pub constant_boost_beyond_range: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessParameters {
    /// XSD dayTimeDuration, e.g. `P365D`.
    pub boosting_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceParameters {
    pub reference_point_parameter: String,
    /// Kilometers.
    pub boosting_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagParameters {
    pub tags_parameter: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_freshness_omits_other_blocks() {
        let wire = ScoringProfileFunction::freshness("lastRenovationDate", "P365D")
            .with_boost(5.0)
            .to_wire_format()
            .unwrap();

        assert_eq!(wire["type"], "freshness");
        assert_eq!(wire["fieldName"], "lastRenovationDate");
        assert_eq!(wire["boost"].as_f64(), Some(5.0));
        assert_eq!(wire["freshness"], json!({"boostingDuration": "P365D"}));
        for absent in ["interpolation", "magnitude", "distance", "tag"] {
            assert!(!wire.contains_key(absent), "unexpected key {absent}");
        }
    }

    #[test]
    fn test_magnitude_with_interpolation() {
        let wire = ScoringProfileFunction::magnitude("rating", 1.0, 5.0)
            .with_boost(2.0)
            .with_interpolation(Interpolation::Linear)
            .to_wire_format()
            .unwrap();

        assert_eq!(wire["type"], "magnitude");
        assert_eq!(wire["interpolation"], "linear");
        assert_eq!(
            wire["magnitude"],
            json!({"boostingRangeStart": 1.0, "boostingRangeEnd": 5.0})
        );
    }

    #[test]
    fn test_function_type_matches_wire_tag() {
        let functions = [
            ScoringProfileFunction::magnitude("rating", 0.0, 1.0),
            ScoringProfileFunction::freshness("date", "P1D"),
            ScoringProfileFunction::distance("location", "currentLocation", 10.0),
            ScoringProfileFunction::tag("tags", "mytags"),
        ];

        for function in functions {
            let wire = function.to_wire_format().unwrap();
            assert_eq!(wire["type"], function.function_type());
            assert!(wire.contains_key(function.function_type()));
        }
    }

    #[test]
    fn test_text_weight_wire_shape() {
        let text = ScoringProfileText::new(vec![
            TextWeight::new("hotelName", 2.0),
            TextWeight::new("description", 1.5),
        ]);

        let wire = text.to_wire_format().unwrap();

        assert_eq!(
            Value::Object(wire),
            json!({"weights": [{"hotelName": 2.0}, {"description": 1.5}]})
        );
    }

    #[test]
    fn test_text_weight_rejects_multi_entry_map() {
        let result: Result<TextWeight, _> = serde_json::from_value(json!({"a": 1.0, "b": 2.0}));
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_deserializes_service_shape() {
        let profile: ScoringProfile = serde_json::from_value(json!({
            "name": "boostNewer",
            "text": [{"weights": [{"hotelName": 2}]}],
            "functions": [{
                "type": "distance",
                "fieldName": "location",
                "boost": 3,
                "distance": {"referencePointParameter": "loc", "boostingDistance": 5}
            }],
            "functionAggregation": "firstMatching"
        }))
        .unwrap();

        assert_eq!(profile.text[0].weights[0], TextWeight::new("hotelName", 2.0));
        assert_eq!(profile.functions[0].function_type(), "distance");
        assert_eq!(profile.functions[0].boost, Some(3.0));
        assert_eq!(
            profile.function_aggregation,
            Some(FunctionAggregation::FirstMatching)
        );
    }
}
