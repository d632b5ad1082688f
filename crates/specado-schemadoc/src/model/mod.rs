//! Schema object model consumed by the documentation helpers
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod custom_types;
pub mod parameter;
pub mod schema;

pub use custom_types::SchemaCustomType;
pub use parameter::ChannelParameter;
pub use schema::{
    AdditionalItems, Dependency, ExclusiveBound, Items, RenderHints, Schema, SchemaObject,
    SchemaType, EXTENSION_PREFIX, PARSER_EXTENSION_PREFIX, PRIVATE_EXTENSION_PREFIX,
};
