//! Generator configuration.
//!
//! The configuration is usually embedded in a `classgen.toml` or supplied by
//! the host generator block. Keys are snake_case; the camelCase names used by
//! generator blocks (`useSwagger`, `useGraphQL`, ...) are accepted as aliases.
//!
//! ```rust
//! use classgen_schema::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     use_validation_annotations = true
//!     useGraphQL = "true"
//! "#).unwrap();
//!
//! assert!(config.use_validation_annotations);
//! assert!(config.use_graph_annotations);
//! assert!(!config.separate_relation_fields);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// Options consumed by the conversion engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Emit API exposure annotations.
    #[serde(
        default,
        alias = "useSwagger",
        alias = "useSerializationAnnotations",
        deserialize_with = "bool_like"
    )]
    pub use_serialization_annotations: bool,

    /// Emit input validation annotations.
    #[serde(
        default,
        alias = "useClassValidator",
        alias = "useValidationAnnotations",
        deserialize_with = "bool_like"
    )]
    pub use_validation_annotations: bool,

    /// Emit graph-schema annotations plus class and enum registration extras.
    #[serde(
        default,
        alias = "useGraphQL",
        alias = "useGraphAnnotations",
        deserialize_with = "bool_like"
    )]
    pub use_graph_annotations: bool,

    /// Split relation and non-relation fields into separate classes.
    #[serde(
        default,
        alias = "separateRelationFields",
        deserialize_with = "bool_like"
    )]
    pub separate_relation_fields: bool,

    /// Render absent defaults as `undefined`.
    #[serde(default, alias = "useUndefinedDefault", deserialize_with = "bool_like")]
    pub use_undefined_default: bool,

    /// Render non-null assertions on fields.
    #[serde(
        default,
        alias = "useNonNullableAssertions",
        deserialize_with = "bool_like"
    )]
    pub use_non_nullable_assertions: bool,

    /// Keep nullable markers on fields that also carry a default.
    #[serde(
        default,
        alias = "preserveDefaultNullable",
        deserialize_with = "bool_like"
    )]
    pub preserve_default_nullable: bool,
}

impl GeneratorConfig {
    /// Create a configuration with every option disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> SchemaResult<Self> {
        toml::from_str(content).map_err(|e| SchemaError::TomlError { source: e })
    }

    /// Enable or disable API exposure annotations.
    pub fn with_serialization_annotations(mut self, enabled: bool) -> Self {
        self.use_serialization_annotations = enabled;
        self
    }

    /// Enable or disable validation annotations.
    pub fn with_validation_annotations(mut self, enabled: bool) -> Self {
        self.use_validation_annotations = enabled;
        self
    }

    /// Enable or disable graph-schema annotations.
    pub fn with_graph_annotations(mut self, enabled: bool) -> Self {
        self.use_graph_annotations = enabled;
        self
    }

    /// Enable or disable relation-separation mode.
    pub fn with_separate_relation_fields(mut self, enabled: bool) -> Self {
        self.separate_relation_fields = enabled;
        self
    }

    /// Enable or disable `undefined` defaults.
    pub fn with_undefined_default(mut self, enabled: bool) -> Self {
        self.use_undefined_default = enabled;
        self
    }

    /// Enable or disable non-null assertions.
    pub fn with_non_nullable_assertions(mut self, enabled: bool) -> Self {
        self.use_non_nullable_assertions = enabled;
        self
    }

    /// Enable or disable preserving nullable markers next to defaults.
    pub fn with_preserve_default_nullable(mut self, enabled: bool) -> Self {
        self.preserve_default_nullable = enabled;
        self
    }
}

/// Accept either a TOML boolean or a boolean-ish string.
fn bool_like<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Text(String),
    }

    match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => Ok(b),
        BoolLike::Text(s) => parse_bool(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("expected a boolean, found `{}`", s))
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
