//! Auxiliary metadata extraction: custom extensions and dependent properties
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::SchemaDocConfig;
use crate::model::{Dependency, Schema};
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// Reads metadata that is not part of the type signature
pub struct SchemaIntrospector;

impl SchemaIntrospector {
    /// User-facing `x-` extensions in declaration order
    ///
    /// Parser-internal and renderer-private namespaces are skipped. Returns
    /// `None` when nothing is left.
    pub fn get_custom_extensions(
        schema: &Schema,
        config: &SchemaDocConfig,
    ) -> Option<IndexMap<String, Value>> {
        let extensions: IndexMap<String, Value> = schema
            .as_object()?
            .extra
            .iter()
            .filter(|(key, _)| config.is_custom_extension(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if extensions.is_empty() {
            None
        } else {
            Some(extensions)
        }
    }

    /// Properties whose presence makes `property_name` required
    ///
    /// Only the array form of `dependencies` is consulted. Each entry is
    /// visited once, so cyclic dependency graphs are fine.
    pub fn get_dependent_required(property_name: &str, schema: &Schema) -> Option<Vec<String>> {
        let owners: IndexSet<&str> = schema
            .dependencies()?
            .iter()
            .filter_map(|(owner, dependency)| match dependency {
                Dependency::Required(names) if names.iter().any(|n| n == property_name) => {
                    Some(owner.as_str())
                }
                _ => None,
            })
            .collect();

        if owners.is_empty() {
            None
        } else {
            Some(owners.into_iter().map(String::from).collect())
        }
    }
}
