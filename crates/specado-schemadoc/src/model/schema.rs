//! Schema node representation
//!
//! A read-only view of a JSON-Schema-like tree. Every keyword that can take
//! more than one shape is modelled as a closed enum so callers match on the
//! shape instead of probing raw JSON.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Extension namespace reserved for renderer-private markers
pub const PRIVATE_EXTENSION_PREFIX: &str = "x-schema-private-";

/// Extension namespace reserved for parser-internal markers
pub const PARSER_EXTENSION_PREFIX: &str = "x-parser-";

/// Prefix shared by all specification extensions
pub const EXTENSION_PREFIX: &str = "x-";

/// A schema node: either a boolean schema or a keyword object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    /// `true` accepts everything, `false` accepts nothing
    Bool(bool),
    /// Keyword object
    Object(Box<SchemaObject>),
}

/// The `type` keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["string", "null"]`
    Union(Vec<String>),
}

impl SchemaType {
    /// Type names in declaration order
    pub fn names(&self) -> Vec<&str> {
        match self {
            SchemaType::Single(name) => vec![name.as_str()],
            SchemaType::Union(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// The `items` keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    /// Per-position schemas (tuple form)
    Tuple(Vec<Schema>),
    /// One schema applied to every element
    Single(Box<Schema>),
}

/// Shape of the `additionalItems` keyword
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdditionalItems<'a> {
    /// Keyword not present
    Absent,
    /// `additionalItems: true`
    Allowed,
    /// `additionalItems: false`
    Forbidden,
    /// `additionalItems: { ... }`
    Schema(&'a Schema),
}

/// One entry of the legacy `dependencies` keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    /// Property names that become required
    Required(Vec<String>),
    /// Schema that must additionally hold
    Schema(Schema),
}

/// `exclusiveMinimum` / `exclusiveMaximum`, numeric or draft-4 boolean form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExclusiveBound {
    /// The bound value itself
    Value(Number),
    /// Marks the sibling `minimum`/`maximum` as exclusive
    Flag(bool),
}

/// Renderer-private markers written by schema synthesis
///
/// These travel in the `x-schema-private-` extension namespace and are never
/// consulted when inferring types or describing constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderHints {
    /// The schema describes a literal example value
    #[serde(
        rename = "x-schema-private-raw-value",
        deserialize_with = "lenient_raw_value",
        skip_serializing_if = "is_false"
    )]
    pub raw_value: bool,

    /// Whether the renderer should print the type signature
    #[serde(
        rename = "x-schema-private-render-type",
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub render_type: Option<bool>,

    /// Whether the renderer should print constraints and extensions
    #[serde(
        rename = "x-schema-private-render-additional-info",
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub render_additional_info: Option<bool>,

    /// Runtime expression locating a channel parameter
    #[serde(
        rename = "x-schema-private-parameter-location",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub parameter_location: Option<String>,
}

impl RenderHints {
    /// True when no marker is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

// Hint values of the wrong JSON type read as unset.
fn lenient_raw_value<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_str().map(String::from))
}

/// Count keywords accept any non-negative integral number, `1.0` included
fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(count) = number.as_u64() {
        return Ok(Some(count));
    }
    match number.as_f64() {
        Some(value) if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 => {
            Ok(Some(value as u64))
        }
        _ => Err(serde::de::Error::custom(format!(
            "expected a non-negative integer count, found {}",
            number
        ))),
    }
}

/// Keep `"const": null` distinguishable from a missing `const`
fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Keyword object form of a schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaObject {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        rename = "const",
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub const_value: Option<Value>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<ExclusiveBound>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<ExclusiveBound>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,

    #[serde(
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_length: Option<u64>,

    #[serde(
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_length: Option<u64>,

    #[serde(
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_items: Option<u64>,

    #[serde(
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_items: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    #[serde(
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_properties: Option<u64>,

    #[serde(
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_properties: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<IndexMap<String, Dependency>>,

    #[serde(flatten)]
    pub hints: RenderHints,

    /// Annotations, unmodelled keywords and extensions, in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl SchemaObject {
    /// Create an empty keyword object with the given `type`
    pub fn with_type<T: Into<String>>(schema_type: T) -> Self {
        Self {
            schema_type: Some(SchemaType::Single(schema_type.into())),
            ..Self::default()
        }
    }

    /// Classify `additionalItems`
    pub fn additional_items(&self) -> AdditionalItems<'_> {
        match self.additional_items.as_deref() {
            None => AdditionalItems::Absent,
            Some(Schema::Bool(true)) => AdditionalItems::Allowed,
            Some(Schema::Bool(false)) => AdditionalItems::Forbidden,
            Some(schema) => AdditionalItems::Schema(schema),
        }
    }

    /// `x-` extensions in declaration order, renderer hints excluded
    pub fn extensions(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.extra
            .iter()
            .filter(|(key, _)| key.starts_with(EXTENSION_PREFIX))
    }

    /// Whether `uniqueItems` is set to true
    pub fn has_unique_items(&self) -> bool {
        self.unique_items.unwrap_or(false)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::any()
    }
}

impl From<SchemaObject> for Schema {
    fn from(object: SchemaObject) -> Self {
        Schema::Object(Box::new(object))
    }
}

impl Schema {
    /// The empty schema `{}`
    pub fn any() -> Self {
        Schema::Object(Box::default())
    }

    /// The `false` schema
    pub fn never() -> Self {
        Schema::Bool(false)
    }

    /// Interpret raw JSON as a schema, `None` if it is not one
    pub fn from_value(value: &Value) -> Option<Self> {
        match Self::try_from(value.clone()) {
            Ok(schema) => Some(schema),
            Err(e) => {
                tracing::debug!("Rejected non-schema JSON value: {}", e);
                None
            }
        }
    }

    /// JSON form of this schema, renderer hints included
    pub fn to_value(&self) -> Value {
        match self {
            Schema::Bool(flag) => Value::Bool(*flag),
            // Every map key is a string, so conversion cannot fail.
            Schema::Object(_) => serde_json::to_value(self).unwrap_or(Value::Null),
        }
    }

    /// Keyword object, `None` for boolean schemas
    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            Schema::Object(object) => Some(object),
            Schema::Bool(_) => None,
        }
    }

    /// Whether this is the literal `true` or `false` schema
    pub fn is_boolean_schema(&self) -> bool {
        matches!(self, Schema::Bool(_))
    }

    /// Keyword object form of this schema
    ///
    /// `true` becomes `{}` and `false` becomes `{ "not": {} }`.
    pub fn into_object(self) -> SchemaObject {
        match self {
            Schema::Object(object) => *object,
            Schema::Bool(true) => SchemaObject::default(),
            Schema::Bool(false) => SchemaObject {
                not: Some(Box::new(Schema::any())),
                ..SchemaObject::default()
            },
        }
    }

    pub fn schema_type(&self) -> Option<&SchemaType> {
        self.as_object().and_then(|o| o.schema_type.as_ref())
    }

    pub fn properties(&self) -> Option<&IndexMap<String, Schema>> {
        self.as_object().and_then(|o| o.properties.as_ref())
    }

    pub fn items(&self) -> Option<&Items> {
        self.as_object().and_then(|o| o.items.as_ref())
    }

    pub fn dependencies(&self) -> Option<&IndexMap<String, Dependency>> {
        self.as_object().and_then(|o| o.dependencies.as_ref())
    }
}

impl TryFrom<Value> for Schema {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(flag) => Ok(Schema::Bool(flag)),
            Value::Object(_) => serde_json::from_value::<SchemaObject>(value)
                .map(Schema::from)
                .map_err(|e| Error::invalid_schema("malformed schema keywords", Some(e))),
            other => Err(Error::invalid_schema(
                format!("expected an object or a boolean, found {}", other),
                None,
            )),
        }
    }
}
