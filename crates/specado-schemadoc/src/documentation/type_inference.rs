//! Type signature inference for schema nodes
//!
//! Produces the one-line type shown next to a property in generated
//! documentation, e.g. `string | null`, `array<number>` or
//! `tuple<string, number, ...optional<ANY>>`.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::model::{AdditionalItems, Items, Schema, SchemaCustomType, SchemaObject, SchemaType};
use indexmap::IndexSet;
use serde_json::Value;
use tracing::trace;

/// Keywords outside the typed model that still restrict the accepted values
const CONSTRAINING_KEYWORDS: &[&str] = &[
    "pattern",
    "format",
    "additionalProperties",
    "patternProperties",
    "propertyNames",
    "contains",
    "minContains",
    "maxContains",
    "prefixItems",
    "if",
    "then",
    "else",
    "$ref",
    "dependentRequired",
    "dependentSchemas",
    "unevaluatedItems",
    "unevaluatedProperties",
    "contentMediaType",
    "contentEncoding",
];

/// `const` values are displayed as literal text
const CONST_TYPE: &str = "string";

/// Type signature inference
pub struct TypeInferencer;

impl TypeInferencer {
    /// Compute the type signature of a schema node
    ///
    /// `None` stands for input that is not a schema and yields `UNKNOWN`.
    /// An empty string means the schema restricts values without naming a
    /// type.
    pub fn to_schema_type(schema: Option<&Schema>) -> String {
        match schema {
            Some(schema) => Self::infer(schema),
            None => {
                trace!("Input is not a schema, type is {}", SchemaCustomType::Unknown);
                SchemaCustomType::Unknown.into()
            }
        }
    }

    /// Compute the type signature of raw JSON
    pub fn to_schema_type_value(value: &Value) -> String {
        Self::to_schema_type(Schema::from_value(value).as_ref())
    }

    /// Whether a schema accepts every value
    ///
    /// True for the `true` schema and for objects carrying only annotations,
    /// renderer hints or extensions.
    pub fn is_any(schema: &Schema) -> bool {
        match schema {
            Schema::Bool(flag) => *flag,
            Schema::Object(object) => !has_constraints(object),
        }
    }

    fn infer(schema: &Schema) -> String {
        let object = match schema {
            Schema::Bool(true) => return sentinel(SchemaCustomType::Any),
            Schema::Bool(false) => return sentinel(SchemaCustomType::Never),
            Schema::Object(object) => object,
        };

        if !has_constraints(object) {
            return sentinel(SchemaCustomType::Any);
        }

        if let Some(negated) = object.not.as_deref() {
            if Self::is_any(negated) {
                return sentinel(SchemaCustomType::Never);
            }
        }

        let base = Self::base_type(object);
        match (base.is_empty(), combinator(object)) {
            (false, Some(keyword)) => format!("{} {}", base, keyword),
            (true, Some(keyword)) => keyword.to_string(),
            (false, None) => base,
            (true, None) => {
                trace!("No concrete type could be inferred");
                base
            }
        }
    }

    fn base_type(object: &SchemaObject) -> String {
        if object.const_value.is_some() {
            return CONST_TYPE.to_string();
        }

        if let Some(rendered) = object
            .schema_type
            .as_ref()
            .and_then(|schema_type| Self::declared_type(schema_type, object))
        {
            return rendered;
        }

        object
            .enum_values
            .as_deref()
            .and_then(enum_type)
            .unwrap_or_default()
    }

    /// Render the `type` keyword, `None` when it names nothing
    fn declared_type(schema_type: &SchemaType, object: &SchemaObject) -> Option<String> {
        let mut names: IndexSet<&str> = schema_type.names().into_iter().collect();
        // integer is a subtype of number
        if names.contains("integer") && names.contains("number") {
            names.shift_remove("integer");
        }

        if names.is_empty() {
            return None;
        }

        Some(
            names
                .iter()
                .map(|name| Self::named_type(name, object))
                .collect::<Vec<_>>()
                .join(" | "),
        )
    }

    fn named_type(name: &str, object: &SchemaObject) -> String {
        if name != "array" {
            return name.to_string();
        }

        match object.items.as_ref() {
            None => format!("array<{}>", SchemaCustomType::Any),
            Some(Items::Single(item)) => format!("array<{}>", or_unknown(Self::infer(item))),
            Some(Items::Tuple(items)) => Self::tuple_type(items, object.additional_items()),
        }
    }

    fn tuple_type(items: &[Schema], additional: AdditionalItems<'_>) -> String {
        let elements = or_unknown(
            items
                .iter()
                .map(|item| or_unknown(Self::infer(item)))
                .collect::<Vec<_>>()
                .join(", "),
        );

        let tail = match additional {
            AdditionalItems::Forbidden => return format!("tuple<{}>", elements),
            AdditionalItems::Absent | AdditionalItems::Allowed => SchemaCustomType::Any.to_string(),
            AdditionalItems::Schema(schema) => or_unknown(Self::infer(schema)),
        };

        format!("tuple<{}, ...optional<{}>>", elements, tail)
    }
}

/// Whether any keyword restricts the accepted values
fn has_constraints(object: &SchemaObject) -> bool {
    object.schema_type.is_some()
        || object.const_value.is_some()
        || object.enum_values.is_some()
        || object.properties.is_some()
        || object.required.is_some()
        || object.items.is_some()
        || object.additional_items.is_some()
        || object.not.is_some()
        || object.one_of.is_some()
        || object.any_of.is_some()
        || object.all_of.is_some()
        || object.minimum.is_some()
        || object.maximum.is_some()
        || object.exclusive_minimum.is_some()
        || object.exclusive_maximum.is_some()
        || object.multiple_of.is_some()
        || object.min_length.is_some()
        || object.max_length.is_some()
        || object.min_items.is_some()
        || object.max_items.is_some()
        || object.unique_items.is_some()
        || object.min_properties.is_some()
        || object.max_properties.is_some()
        || object.dependencies.is_some()
        || object
            .extra
            .keys()
            .any(|key| CONSTRAINING_KEYWORDS.contains(&key.as_str()))
}

/// First combinator keyword present, checked as oneOf, anyOf, allOf
fn combinator(object: &SchemaObject) -> Option<&'static str> {
    if object.one_of.is_some() {
        Some("oneOf")
    } else if object.any_of.is_some() {
        Some("anyOf")
    } else if object.all_of.is_some() {
        Some("allOf")
    } else {
        None
    }
}

/// Distinct JSON type names of the enum members, first occurrence first
fn enum_type(values: &[Value]) -> Option<String> {
    let names: IndexSet<&'static str> = values.iter().map(json_type_name).collect();
    if names.is_empty() {
        return None;
    }
    Some(names.into_iter().collect::<Vec<_>>().join(" | "))
}

/// JSON type name of a literal value
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn or_unknown(rendered: String) -> String {
    if rendered.is_empty() {
        SchemaCustomType::Unknown.into()
    } else {
        rendered
    }
}

fn sentinel(kind: SchemaCustomType) -> String {
    trace!("Type resolved to sentinel {}", kind);
    kind.into()
}
