//! Wire format discipline shared by every resource and value object.
//!
//! Responsibilities:
//! - Turn typed models into JSON objects keyed by camelCase wire names.
//! - Drop every null-valued key at every nesting level before a payload leaves the process.
//! - Accept either JSON text or an already-parsed value as input to `load`.
//! - Treat a null member as absent on the way in, at every depth, so defaults apply.
//!
//! Does NOT handle:
//! - Schema validation beyond required-key presence (the service validates).
//! - Transport concerns (see `endpoints`).
//!
//! Invariants:
//! - Object key order follows declaration order (`serde_json` `preserve_order`).
//! - Array elements are never removed or reordered, only their contents cleaned.
//! - Free-form `additional_parameters` are applied after typed fields, last write wins.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// A JSON object in wire format.
pub type Mapping = Map<String, Value>;

/// Service-side annotations returned on GET that are not part of a resource definition.
pub const SERVICE_ANNOTATIONS: &[&str] = &["@odata.context", "@odata.etag"];

/// Recursively remove null-valued keys from every object in `value`.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

/// Serialize `value` to a null-free JSON object.
///
/// # Errors
///
/// Returns `ClientError::InvalidPayload` if `value` does not serialize to an object.
pub fn to_wire_map<T: Serialize + ?Sized>(value: &T) -> Result<Mapping> {
    match strip_nulls(serde_json::to_value(value)?) {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::InvalidPayload(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Merge free-form keys into `map`, overwriting any existing entry.
pub fn merge_additional(map: &mut Mapping, extras: &Mapping) {
    for (key, value) in extras {
        map.insert(key.clone(), value.clone());
    }
}

/// Remove service-side annotations from a fetched payload.
pub fn strip_service_annotations(map: &mut Mapping) {
    for key in SERVICE_ANNOTATIONS {
        map.remove(*key);
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Input accepted by [`Loadable::load`]: JSON text or an already-parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum WirePayload {
    Text(String),
    Parsed(Value),
}

impl WirePayload {
    /// Parse (if needed) into a JSON value with null object members removed.
    pub fn into_value(self) -> Result<Value> {
        let value = match self {
            Self::Text(text) => serde_json::from_str(&text)
                .map_err(|e| ClientError::InvalidPayload(format!("not valid JSON: {e}")))?,
            Self::Parsed(value) => value,
        };
        Ok(strip_nulls(value))
    }

    /// Parse (if needed) and require a JSON object.
    pub fn into_object(self) -> Result<Mapping> {
        match self.into_value()? {
            Value::Object(map) => Ok(map),
            other => Err(ClientError::InvalidPayload(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl From<&str> for WirePayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for WirePayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for WirePayload {
    fn from(value: Value) -> Self {
        Self::Parsed(value)
    }
}

impl From<Mapping> for WirePayload {
    fn from(map: Mapping) -> Self {
        Self::Parsed(Value::Object(map))
    }
}

/// Conversion of a model into its wire representation.
///
/// The default implementation serializes through serde and strips nulls,
/// which is all that plain value objects need.
pub trait WireFormat: Serialize {
    fn to_wire_format(&self) -> Result<Mapping> {
        to_wire_map(self)
    }
}

/// Reconstruction of a model from its wire representation.
pub trait Loadable: Sized {
    fn load(data: impl Into<WirePayload>) -> Result<Self>;
}

/// Fail with `MissingField` when `field` is absent or null.
pub(crate) fn require_field(map: &Mapping, field: &str) -> Result<()> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ClientError::MissingField {
            field: field.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Deserialize a resource object after dropping service annotations.
pub(crate) fn load_resource<T: DeserializeOwned>(
    data: impl Into<WirePayload>,
    required: &[&str],
) -> Result<T> {
    let mut map = data.into().into_object()?;
    strip_service_annotations(&mut map);
    for field in required {
        require_field(&map, field)?;
    }
    Ok(serde_json::from_value(Value::Object(map))?)
}
