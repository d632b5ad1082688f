//! Channel parameter representation
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::model::schema::Schema;
use serde::{Deserialize, Serialize};

/// A named parameter of a channel address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelParameter {
    /// Schema of the parameter value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    /// Runtime expression pointing at the value, e.g. `$message.payload#/user/id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ChannelParameter {
    /// Create a parameter with the given schema
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            ..Self::default()
        }
    }

    /// Set the runtime expression
    pub fn with_location<L: Into<String>>(mut self, location: L) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the description
    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
