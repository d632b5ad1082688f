//! Specado Schemadoc - JSON Schema rendering helpers for documentation
//!
//! This crate turns already-materialized JSON-Schema-like trees into the
//! pieces a documentation renderer prints:
//! - **Type signatures**: `string | null`, `array<number>`, `tuple<string, ...optional<ANY>>`
//! - **Constraint phrases**: `[ 2 .. 5 )`, `non-empty`, `decimal places <= 4`
//! - **Literal values**: example values formatted for prose
//! - **Synthesized schemas**: example payloads, channel parameters and
//!   `dependencies` entries turned into schemas the renderer can walk
//! - **Metadata**: custom `x-` extensions and dependent-required properties
//!
//! The helpers never validate, never resolve `$ref`s and never mutate their
//! input. They are total: input that is not a schema yields `UNKNOWN`, a
//! schema without a nameable type yields an empty string, and missing
//! optional structures yield `None`.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use specado_schemadoc::{humanize_constraints, to_schema_type, Schema};
//!
//! let schema = Schema::from_value(&json!({
//!     "type": ["integer", "number"],
//!     "minimum": 2,
//!     "exclusiveMaximum": 5
//! }))
//! .unwrap();
//!
//! assert_eq!(to_schema_type(Some(&schema)), "number");
//! assert_eq!(humanize_constraints(&schema), vec!["[ 2 .. 5 )"]);
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod documentation;
pub mod error;
pub mod model;

// Re-export commonly used types for convenience
pub use config::{ConfigFormat, SchemaDocConfig, SchemaDocConfigBuilder};
pub use documentation::{
    get_custom_extensions, get_dependent_required, get_dependent_schemas, humanize_constraints,
    json_to_schema, parameters_to_schema, prettify_value, to_schema_type, to_schema_type_value,
    ConstraintHumanizer, SchemaDescriber, SchemaIntrospector, SchemaSynthesizer, TypeInferencer,
};
pub use error::{Error, Result};
pub use model::{
    AdditionalItems, ChannelParameter, Dependency, ExclusiveBound, Items, RenderHints, Schema,
    SchemaCustomType, SchemaObject, SchemaType,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
