//! Configuration for schema documentation helpers
//!
//! Configuration can come from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Environment variables
//! - The programmatic builder
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::model::{EXTENSION_PREFIX, PARSER_EXTENSION_PREFIX, PRIVATE_EXTENSION_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable overriding [`SchemaDocConfig::null_literal`]
pub const ENV_NULL_LITERAL: &str = "SPECADO_SCHEMADOC_NULL_LITERAL";

/// Environment variable overriding [`SchemaDocConfig::extension_prefix`]
pub const ENV_EXTENSION_PREFIX: &str = "SPECADO_SCHEMADOC_EXTENSION_PREFIX";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(Error::unsupported_format(path.to_path_buf())),
        }
    }
}

/// Schema documentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaDocConfig {
    /// Prefix identifying specification extensions
    pub extension_prefix: String,

    /// Extension namespaces hidden from custom extension listings
    pub reserved_extension_prefixes: Vec<String>,

    /// Text shown for a `null` example value
    pub null_literal: String,
}

impl Default for SchemaDocConfig {
    fn default() -> Self {
        Self {
            extension_prefix: EXTENSION_PREFIX.to_string(),
            reserved_extension_prefixes: vec![
                PARSER_EXTENSION_PREFIX.to_string(),
                PRIVATE_EXTENSION_PREFIX.to_string(),
            ],
            null_literal: "NULL".to_string(),
        }
    }
}

impl SchemaDocConfig {
    /// Load configuration from a file, format chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io_error(path.to_path_buf(), e))?;

        debug!("Loading schemadoc configuration from {:?}", path);
        let config = match format {
            ConfigFormat::Yaml => Self::from_yaml_str(&content)?,
            ConfigFormat::Json => Self::from_json_str(&content)?,
        };
        Ok(config)
    }

    /// Parse and validate YAML configuration
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON configuration
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// `self` is left untouched when the overridden configuration is invalid.
    pub fn merge_with_env(&mut self) -> Result<()> {
        let merged = self.with_overrides(
            std::env::var(ENV_NULL_LITERAL).ok(),
            std::env::var(ENV_EXTENSION_PREFIX).ok(),
        );
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    fn with_overrides(&self, null_literal: Option<String>, extension_prefix: Option<String>) -> Self {
        let mut merged = self.clone();

        if let Some(literal) = null_literal {
            debug!("{} overrides null literal", ENV_NULL_LITERAL);
            merged.null_literal = literal;
        }

        if let Some(prefix) = extension_prefix {
            debug!("{} overrides extension prefix", ENV_EXTENSION_PREFIX);
            merged.extension_prefix = prefix;
        }

        merged
    }

    /// Reject settings the helpers cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.extension_prefix.is_empty() {
            return Err(Error::configuration("extension prefix must not be empty"));
        }

        if let Some(reserved) = self
            .reserved_extension_prefixes
            .iter()
            .find(|reserved| !reserved.starts_with(&self.extension_prefix))
        {
            return Err(Error::configuration(format!(
                "reserved prefix '{}' does not start with extension prefix '{}'",
                reserved, self.extension_prefix
            )));
        }

        Ok(())
    }

    /// Whether a key is a custom extension that should be listed
    pub fn is_custom_extension(&self, key: &str) -> bool {
        key.starts_with(&self.extension_prefix)
            && !self
                .reserved_extension_prefixes
                .iter()
                .any(|reserved| key.starts_with(reserved.as_str()))
    }
}

/// Builder for creating configurations programmatically
#[derive(Debug, Default)]
pub struct SchemaDocConfigBuilder {
    config: SchemaDocConfig,
}

impl SchemaDocConfigBuilder {
    /// Create a new builder starting from defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extension prefix
    pub fn extension_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.extension_prefix = prefix.into();
        self
    }

    /// Add a reserved extension namespace
    pub fn reserve_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.reserved_extension_prefixes.push(prefix.into());
        self
    }

    /// Set the text shown for `null` example values
    pub fn null_literal(mut self, literal: impl Into<String>) -> Self {
        self.config.null_literal = literal.into();
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<SchemaDocConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SchemaDocConfig::default();
        assert_eq!(config.extension_prefix, "x-");
        assert_eq!(
            config.reserved_extension_prefixes,
            vec!["x-parser-", "x-schema-private-"]
        );
        assert_eq!(config.null_literal, "NULL");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_custom_extension() {
        let config = SchemaDocConfig::default();
        assert!(config.is_custom_extension("x-custom"));
        assert!(!config.is_custom_extension("x-parser-schema-id"));
        assert!(!config.is_custom_extension("x-schema-private-raw-value"));
        assert!(!config.is_custom_extension("description"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = SchemaDocConfig::from_yaml_str("null_literal: \"<null>\"\n").unwrap();
        assert_eq!(config.null_literal, "<null>");
        assert_eq!(config.extension_prefix, "x-");
    }

    #[test]
    fn test_validate_rejects_mismatched_reserved_prefix() {
        let result = SchemaDocConfigBuilder::new().reserve_prefix("ext-internal-").build();
        assert!(matches!(result, Err(Error::Configuration { .. })));

        let result = SchemaDocConfigBuilder::new().extension_prefix("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_apply_to_a_copy() {
        let config = SchemaDocConfig::default();
        let merged = config.with_overrides(Some("nil".to_string()), Some("ext-".to_string()));

        assert_eq!(merged.null_literal, "nil");
        assert_eq!(merged.extension_prefix, "ext-");
        assert!(merged.validate().is_err());
        assert_eq!(config, SchemaDocConfig::default());
    }

    #[test]
    fn test_merge_with_env_keeps_config_on_error() {
        std::env::set_var(ENV_EXTENSION_PREFIX, "ext-");
        let mut config = SchemaDocConfig::default();
        let result = config.merge_with_env();
        std::env::remove_var(ENV_EXTENSION_PREFIX);

        assert!(matches!(result, Err(Error::Configuration { .. })));
        assert_eq!(config, SchemaDocConfig::default());
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("schemadoc.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("schemadoc.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(ConfigFormat::from_path(Path::new("schemadoc.toml")).is_err());
        assert!(ConfigFormat::from_path(Path::new("schemadoc")).is_err());
    }
}
