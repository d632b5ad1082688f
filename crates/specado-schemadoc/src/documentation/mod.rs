//! Schema documentation helpers
//!
//! Turns schema nodes into the strings a documentation renderer prints (type
//! signatures, constraint phrases, literal values) and synthesizes schemas
//! for things that are not schemas themselves (example payloads, channel
//! parameters, `dependencies` entries).
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod constraints;
pub mod introspection;
pub mod prettify;
pub mod synthesis;
pub mod type_inference;

pub use constraints::ConstraintHumanizer;
pub use introspection::SchemaIntrospector;
pub use prettify::{format_number, prettify_value};
pub use synthesis::SchemaSynthesizer;
pub use type_inference::{json_type_name, TypeInferencer};

use crate::config::SchemaDocConfig;
use crate::model::{ChannelParameter, Schema};
use indexmap::IndexMap;
use serde_json::Value;

/// All documentation helpers behind one configuration
#[derive(Debug, Clone, Default)]
pub struct SchemaDescriber {
    config: SchemaDocConfig,
}

impl SchemaDescriber {
    /// Create a describer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a describer with custom configuration
    pub fn with_config(config: SchemaDocConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchemaDocConfig {
        &self.config
    }

    pub fn to_schema_type(&self, schema: Option<&Schema>) -> String {
        TypeInferencer::to_schema_type(schema)
    }

    pub fn humanize_constraints(&self, schema: &Schema) -> Vec<String> {
        ConstraintHumanizer::humanize_constraints(schema)
    }

    pub fn prettify_value(&self, value: &Value) -> String {
        prettify_value(value)
    }

    pub fn json_to_schema(&self, value: Option<&Value>) -> Schema {
        SchemaSynthesizer::json_to_schema(value, &self.config)
    }

    pub fn parameters_to_schema(
        &self,
        parameters: &IndexMap<String, ChannelParameter>,
    ) -> Option<Schema> {
        SchemaSynthesizer::parameters_to_schema(parameters)
    }

    pub fn get_dependent_schemas(&self, schema: &Schema) -> Option<Schema> {
        SchemaSynthesizer::get_dependent_schemas(schema)
    }

    pub fn get_custom_extensions(&self, schema: &Schema) -> Option<IndexMap<String, Value>> {
        SchemaIntrospector::get_custom_extensions(schema, &self.config)
    }

    pub fn get_dependent_required(&self, property_name: &str, schema: &Schema) -> Option<Vec<String>> {
        SchemaIntrospector::get_dependent_required(property_name, schema)
    }
}

/// Type signature of a schema node, `UNKNOWN` for `None`
pub fn to_schema_type(schema: Option<&Schema>) -> String {
    TypeInferencer::to_schema_type(schema)
}

/// Type signature of raw JSON, `UNKNOWN` when it is not a schema
pub fn to_schema_type_value(value: &Value) -> String {
    TypeInferencer::to_schema_type_value(value)
}

/// Ordered human-readable constraint phrases
pub fn humanize_constraints(schema: &Schema) -> Vec<String> {
    ConstraintHumanizer::humanize_constraints(schema)
}

/// Raw-value schema describing a literal example, `None` meaning undefined
pub fn json_to_schema(value: Option<&Value>) -> Schema {
    SchemaSynthesizer::json_to_schema(value, &SchemaDocConfig::default())
}

/// Object schema listing channel parameters
pub fn parameters_to_schema(parameters: &IndexMap<String, ChannelParameter>) -> Option<Schema> {
    SchemaSynthesizer::parameters_to_schema(parameters)
}

/// Object schema of the schema-form `dependencies` entries
pub fn get_dependent_schemas(schema: &Schema) -> Option<Schema> {
    SchemaSynthesizer::get_dependent_schemas(schema)
}

/// User-facing extensions using the default reserved namespaces
pub fn get_custom_extensions(schema: &Schema) -> Option<IndexMap<String, Value>> {
    SchemaIntrospector::get_custom_extensions(schema, &SchemaDocConfig::default())
}

/// Properties whose presence makes `property_name` required
pub fn get_dependent_required(property_name: &str, schema: &Schema) -> Option<Vec<String>> {
    SchemaIntrospector::get_dependent_required(property_name, schema)
}
