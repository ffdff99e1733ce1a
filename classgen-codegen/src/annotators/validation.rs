//! Input validation annotations.
//!
//! Rules come from the field's documentation (see [`crate::rules`]). A field
//! without any documentation falls back to a single rule keyed by its declared
//! scalar type. Optional fields always get `IsOptional` first.

use classgen_schema::{GeneratorConfig, ScalarType};

use super::{Annotator, FieldContext};
use crate::annotation::{Annotation, AnnotationParam, VALIDATION_ORIGIN};
use crate::error::{ConvertError, ConvertResult};
use crate::rules::{parse_rules, tokenize};

/// Annotation prepended for optional fields.
pub const IS_OPTIONAL: &str = "IsOptional";

/// Emits validation annotations from documentation rules.
pub struct ValidationAnnotator;

impl Annotator for ValidationAnnotator {
    fn name(&self) -> &'static str {
        "validation"
    }

    fn is_enabled(&self, config: &GeneratorConfig) -> bool {
        config.use_validation_annotations
    }

    fn annotate(&self, ctx: &FieldContext<'_>) -> ConvertResult<Vec<Annotation>> {
        validation_annotations(ctx)
    }
}

/// Basic type rule used when a field has no documentation.
pub fn fallback_rule(scalar: ScalarType) -> Option<&'static str> {
    match scalar {
        ScalarType::String => Some("IsString"),
        ScalarType::Int | ScalarType::BigInt => Some("IsInt"),
        ScalarType::Boolean => Some("IsBoolean"),
        ScalarType::DateTime => Some("IsDate"),
        ScalarType::Float | ScalarType::Decimal | ScalarType::Json | ScalarType::Bytes => None,
    }
}

/// Build the validation annotations for a field.
pub fn validation_annotations(ctx: &FieldContext<'_>) -> ConvertResult<Vec<Annotation>> {
    let field = ctx.field;
    let mut annotations = Vec::new();

    if field.is_optional() {
        annotations.push(Annotation::new(IS_OPTIONAL, VALIDATION_ORIGIN));
    }

    let tokens = tokenize(field.documentation.as_deref());

    if tokens.is_empty() {
        let fallback = field.scalar_type().and_then(fallback_rule);
        if let Some(name) = fallback {
            annotations.push(Annotation::new(name, VALIDATION_ORIGIN));
        }
        return Ok(annotations);
    }

    let rules = parse_rules(&tokens).map_err(|missing| {
        ConvertError::missing_rule_value(ctx.model, field.name(), missing.rule)
    })?;

    annotations.extend(rules.into_iter().map(|rule| {
        let mut annotation = Annotation::new(rule.annotation, VALIDATION_ORIGIN);
        annotation
            .params
            .extend(rule.params.into_iter().map(AnnotationParam::Literal));
        annotation
    }));

    Ok(annotations)
}
