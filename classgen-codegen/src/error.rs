//! Error types for model conversion.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use classgen_schema::SchemaError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised while converting models into class descriptions.
#[derive(Error, Debug, Diagnostic)]
pub enum ConvertError {
    /// A field has a shape the converter cannot handle.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    /// A parametrized documentation rule without a value, e.g. `minLength:`.
    #[error("documentation rule `{rule}:` on `{model}.{field}` is missing its value")]
    #[diagnostic(
        code(classgen::codegen::missing_rule_value),
        help("parametrized rules are written as `key:value`")
    )]
    MissingRuleValue {
        model: String,
        field: String,
        rule: String,
    },

    /// Conversion failed for one or more fields.
    #[error("conversion failed with {count} error(s)")]
    #[diagnostic(code(classgen::codegen::conversion_failed))]
    ConversionFailed {
        count: usize,
        #[related]
        errors: Vec<ConvertError>,
    },
}

impl ConvertError {
    /// Create a missing rule value error.
    pub fn missing_rule_value(
        model: impl Into<String>,
        field: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self::MissingRuleValue {
            model: model.into(),
            field: field.into(),
            rule: rule.into(),
        }
    }

    /// Fold collected errors into a single error, if there are any.
    pub fn from_many(mut errors: Vec<ConvertError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            count => Some(Self::ConversionFailed { count, errors }),
        }
    }
}
