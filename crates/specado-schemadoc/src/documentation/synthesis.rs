//! Schema synthesis from example values, channel parameters and dependencies
//!
//! Every synthesized node is freshly built; nothing is shared with the input.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::SchemaDocConfig;
use crate::documentation::prettify::format_number;
use crate::model::{ChannelParameter, Dependency, Items, RenderHints, Schema, SchemaObject};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

/// Builds schemas for the renderer out of non-schema inputs
pub struct SchemaSynthesizer;

impl SchemaSynthesizer {
    /// Describe a literal example value
    ///
    /// `None` stands for an undefined value. Scalars become raw-value string
    /// schemas; arrays become tuples and objects become property maps, both
    /// recursively.
    pub fn json_to_schema(value: Option<&Value>, config: &SchemaDocConfig) -> Schema {
        let Some(value) = value else {
            return raw_value(String::new());
        };

        match value {
            Value::Null => raw_value(config.null_literal.clone()),
            Value::Bool(flag) => raw_value(flag.to_string()),
            Value::Number(number) => raw_value(format_number(number)),
            Value::String(s) => raw_value(s.clone()),
            Value::Array(elements) => SchemaObject {
                items: Some(Items::Tuple(
                    elements
                        .iter()
                        .map(|element| Self::json_to_schema(Some(element), config))
                        .collect(),
                )),
                hints: structural_hints(),
                ..SchemaObject::with_type("array")
            }
            .into(),
            Value::Object(map) => SchemaObject {
                properties: Some(
                    map.iter()
                        .map(|(key, v)| (key.clone(), Self::json_to_schema(Some(v), config)))
                        .collect(),
                ),
                hints: structural_hints(),
                ..SchemaObject::with_type("object")
            }
            .into(),
        }
    }

    /// Collect channel parameters into one object schema
    ///
    /// Returns `None` when there are no parameters.
    pub fn parameters_to_schema(parameters: &IndexMap<String, ChannelParameter>) -> Option<Schema> {
        if parameters.is_empty() {
            return None;
        }

        let properties: IndexMap<String, Schema> = parameters
            .iter()
            .map(|(name, parameter)| (name.clone(), parameter_schema(parameter)))
            .collect();

        debug!("Synthesized schema for {} channel parameters", properties.len());

        Some(
            SchemaObject {
                properties: Some(properties),
                required: Some(parameters.keys().cloned().collect()),
                hints: structural_hints(),
                ..SchemaObject::with_type("object")
            }
            .into(),
        )
    }

    /// Collect schema-form `dependencies` entries into one object schema
    ///
    /// Array-form entries are skipped. Returns `None` when nothing remains.
    pub fn get_dependent_schemas(schema: &Schema) -> Option<Schema> {
        let properties: IndexMap<String, Schema> = schema
            .dependencies()?
            .iter()
            .filter_map(|(name, dependency)| match dependency {
                Dependency::Schema(dependent) => Some((name.clone(), dependent.clone())),
                Dependency::Required(_) => None,
            })
            .collect();

        if properties.is_empty() {
            return None;
        }

        Some(
            SchemaObject {
                properties: Some(properties),
                hints: structural_hints(),
                ..SchemaObject::with_type("object")
            }
            .into(),
        )
    }
}

fn parameter_schema(parameter: &ChannelParameter) -> Schema {
    let mut object = parameter.schema().cloned().unwrap_or_default().into_object();

    if let Some(description) = parameter.description() {
        object.description = Some(description.to_string());
    }
    if let Some(location) = parameter.location() {
        object.hints.parameter_location = Some(location.to_string());
    }

    object.into()
}

fn raw_value(text: String) -> Schema {
    SchemaObject {
        const_value: Some(Value::String(text)),
        hints: RenderHints {
            raw_value: true,
            render_type: Some(false),
            ..RenderHints::default()
        },
        ..SchemaObject::with_type("string")
    }
    .into()
}

fn structural_hints() -> RenderHints {
    RenderHints {
        render_type: Some(false),
        render_additional_info: Some(false),
        ..RenderHints::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SchemaType;
    use serde_json::json;

    fn to_schema(value: Option<&Value>) -> Schema {
        SchemaSynthesizer::json_to_schema(value, &SchemaDocConfig::default())
    }

    #[test]
    fn test_undefined_and_null() {
        assert_eq!(
            to_schema(None).to_value(),
            json!({
                "type": "string",
                "const": "",
                "x-schema-private-raw-value": true,
                "x-schema-private-render-type": false
            })
        );
        assert_eq!(to_schema(Some(&json!(null))).to_value()["const"], json!("NULL"));
    }

    #[test]
    fn test_null_literal_from_config() {
        let config = SchemaDocConfig {
            null_literal: "nil".to_string(),
            ..SchemaDocConfig::default()
        };
        let schema = SchemaSynthesizer::json_to_schema(Some(&json!(null)), &config);
        assert_eq!(schema.to_value()["const"], json!("nil"));
    }

    #[test]
    fn test_scalars_become_strings() {
        assert_eq!(to_schema(Some(&json!(2137))).to_value()["const"], json!("2137"));
        assert_eq!(to_schema(Some(&json!(1.5))).to_value()["const"], json!("1.5"));
        assert_eq!(to_schema(Some(&json!(true))).to_value()["const"], json!("true"));
        assert_eq!(to_schema(Some(&json!("foo"))).to_value()["const"], json!("foo"));
    }

    #[test]
    fn test_array_becomes_tuple() {
        let schema = to_schema(Some(&json!(["a", 1])));
        let object = schema.as_object().unwrap();
        assert_eq!(object.schema_type, Some(SchemaType::Single("array".into())));
        assert!(matches!(object.items, Some(Items::Tuple(ref items)) if items.len() == 2));
        assert!(object.additional_items.is_none());
        assert_eq!(object.hints.render_additional_info, Some(false));
        assert_eq!(object.hints.render_type, Some(false));
    }

    #[test]
    fn test_object_becomes_properties() {
        let schema = to_schema(Some(&json!({"b": {"c": null}, "a": [1]})));
        let properties = schema.properties().unwrap();
        let keys: Vec<_> = properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(
            properties["b"].properties().unwrap()["c"].to_value()["const"],
            json!("NULL")
        );
    }

    #[test]
    fn test_parameters_to_schema() {
        let mut parameters = IndexMap::new();
        parameters.insert(
            "streetlightId".to_string(),
            ChannelParameter::new(
                Schema::from_value(&json!({"type": "string", "description": "schema text"}))
                    .unwrap(),
            )
            .with_description("The ID of the streetlight.")
            .with_location("$message.payload#/id"),
        );
        parameters.insert(
            "region".to_string(),
            ChannelParameter::new(
                Schema::from_value(&json!({"type": "string", "description": "keep me"})).unwrap(),
            ),
        );

        let schema = SchemaSynthesizer::parameters_to_schema(&parameters).unwrap();
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "properties": {
                    "streetlightId": {
                        "type": "string",
                        "description": "The ID of the streetlight.",
                        "x-schema-private-parameter-location": "$message.payload#/id"
                    },
                    "region": {
                        "type": "string",
                        "description": "keep me"
                    }
                },
                "required": ["streetlightId", "region"],
                "x-schema-private-render-type": false,
                "x-schema-private-render-additional-info": false
            })
        );
    }

    #[test]
    fn test_parameters_to_schema_empty_and_schemaless() {
        assert!(SchemaSynthesizer::parameters_to_schema(&IndexMap::new()).is_none());

        let mut parameters = IndexMap::new();
        parameters.insert(
            "id".to_string(),
            ChannelParameter::default().with_description("Any id"),
        );
        let schema = SchemaSynthesizer::parameters_to_schema(&parameters).unwrap();
        assert_eq!(
            schema.to_value()["properties"]["id"],
            json!({"description": "Any id"})
        );
    }

    #[test]
    fn test_get_dependent_schemas() {
        let schema = Schema::from_value(&json!({
            "dependencies": {
                "foo": ["bar"],
                "credit_card": {"properties": {"billing_address": {"type": "string"}}}
            }
        }))
        .unwrap();

        let dependent = SchemaSynthesizer::get_dependent_schemas(&schema).unwrap();
        let properties = dependent.properties().unwrap();
        assert_eq!(properties.len(), 1);
        assert!(properties.contains_key("credit_card"));

        let only_arrays = Schema::from_value(&json!({"dependencies": {"foo": ["bar"]}})).unwrap();
        assert!(SchemaSynthesizer::get_dependent_schemas(&only_arrays).is_none());
        assert!(SchemaSynthesizer::get_dependent_schemas(&Schema::any()).is_none());
        assert!(SchemaSynthesizer::get_dependent_schemas(&Schema::Bool(true)).is_none());
    }
}
