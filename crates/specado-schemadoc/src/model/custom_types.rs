//! Sentinel type names
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use std::fmt;

/// Type names used when no concrete JSON type can be named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaCustomType {
    /// Accepts any value
    Any,
    /// Accepts no value
    Never,
    /// Input is not a schema
    Unknown,
}

impl SchemaCustomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaCustomType::Any => "ANY",
            SchemaCustomType::Never => "NEVER",
            SchemaCustomType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SchemaCustomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SchemaCustomType> for String {
    fn from(value: SchemaCustomType) -> Self {
        value.as_str().to_string()
    }
}
