//! Field shape checks.
//!
//! The converter trusts the loader for most of the document, but a handful of
//! field shapes cannot be converted meaningfully and are reported against the
//! offending model and field:
//! - enum fields without an enum type name, or naming an undeclared enum
//! - object fields without a type name
//! - relation fields that are not object kind
//! - scalar fields whose type name is actually a model or embedded type

use crate::ast::{Field, FieldKind, Model, SchemaDocument};
use crate::error::{SchemaError, SchemaResult};

/// Check one field against the document it belongs to.
pub fn check_field(document: &SchemaDocument, model: &Model, field: &Field) -> SchemaResult<()> {
    let model_name = model.name();
    let type_name = field.type_name();

    if field.is_relation() && field.kind != FieldKind::Object {
        return Err(SchemaError::invalid_field(
            model_name,
            field.name(),
            format!("relation field must be object kind, found {}", field.kind),
        ));
    }

    match field.kind {
        FieldKind::Enum => {
            if type_name.is_empty() {
                return Err(SchemaError::invalid_field(
                    model_name,
                    field.name(),
                    "enum field has no enum type name",
                ));
            }
            // Only documents that declare enums can be checked against them.
            if !document.enums.is_empty() && document.get_enum(type_name).is_none() {
                return Err(SchemaError::unknown_type(model_name, field.name(), type_name));
            }
        }
        FieldKind::Object => {
            if type_name.is_empty() {
                return Err(SchemaError::invalid_field(
                    model_name,
                    field.name(),
                    "object field has no type name",
                ));
            }
        }
        FieldKind::Scalar => {
            if field.scalar_type().is_none() && document.is_object_type(type_name) {
                return Err(SchemaError::invalid_field(
                    model_name,
                    field.name(),
                    format!(
                        "`{}` names an object type but the field is neither a relation, an enum, nor object kind",
                        type_name
                    ),
                ));
            }
        }
    }

    Ok(())
}

/// Document validator collecting every field shape error.
#[derive(Debug, Default)]
pub struct Validator {
    /// Collected validation errors.
    errors: Vec<SchemaError>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every model and embedded type of a document.
    pub fn validate(&mut self, document: &SchemaDocument) -> SchemaResult<()> {
        self.errors.clear();

        for model in document.models.iter().chain(document.types.iter()) {
            for field in &model.fields {
                if let Err(err) = check_field(document, model, field) {
                    self.errors.push(err);
                }
            }
        }

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                count: self.errors.len(),
                errors: std::mem::take(&mut self.errors),
            })
        }
    }
}

/// Validate a document, collecting all field shape errors.
pub fn validate_document(document: &SchemaDocument) -> SchemaResult<()> {
    Validator::new().validate(document)
}
