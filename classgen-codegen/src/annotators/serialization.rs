//! API exposure annotations.

use classgen_schema::{Field, GeneratorConfig};

use super::{Annotator, FieldContext};
use crate::annotation::{
    Annotation, AnnotationParam, OptionMap, OptionValue, SERIALIZATION_ORIGIN, TypeRef,
};
use crate::error::ConvertResult;

/// Annotation name for required fields.
pub const REQUIRED_PROPERTY: &str = "ApiProperty";

/// Annotation name for optional fields.
pub const OPTIONAL_PROPERTY: &str = "ApiPropertyOptional";

/// Emits one exposure annotation per field, carrying an option map.
///
/// Recognized option keys:
/// - `isArray` for list fields
/// - `type` as the mapped scalar constructor, or a deferred reference for relations
/// - `enum` and `enumName` for enum fields
///
/// A mapped scalar wins over everything else; a relation wins over an enum.
pub struct SerializationAnnotator;

impl Annotator for SerializationAnnotator {
    fn name(&self) -> &'static str {
        "serialization"
    }

    fn is_enabled(&self, config: &GeneratorConfig) -> bool {
        config.use_serialization_annotations
    }

    fn annotate(&self, ctx: &FieldContext<'_>) -> ConvertResult<Vec<Annotation>> {
        Ok(vec![exposure_annotation(ctx)])
    }
}

fn property_name(field: &Field) -> &'static str {
    if field.is_required {
        REQUIRED_PROPERTY
    } else {
        OPTIONAL_PROPERTY
    }
}

/// Build the exposure annotation for a field.
pub fn exposure_annotation(ctx: &FieldContext<'_>) -> Annotation {
    let field = ctx.field;
    let annotation = Annotation::new(property_name(field), SERIALIZATION_ORIGIN);
    let mut options = OptionMap::new();

    if field.is_list {
        options.insert("isArray".into(), OptionValue::Bool(true));
    }

    if ctx.target.is_known() && !field.is_json() {
        options.insert(
            "type".into(),
            OptionValue::Expr(ctx.target.capitalized().to_string()),
        );
        return annotation.with_param(AnnotationParam::Options(options));
    }

    if field.is_relation() {
        options.insert(
            "type".into(),
            OptionValue::Deferred(TypeRef::named(field.type_name.clone())),
        );
        return annotation.with_param(AnnotationParam::Options(options));
    }

    if field.is_enum() {
        options.insert("enum".into(), OptionValue::Expr(field.type_name().to_string()));
        options.insert(
            "enumName".into(),
            OptionValue::Str(field.type_name().to_string()),
        );
    }

    annotation.with_param(AnnotationParam::Options(options))
}
