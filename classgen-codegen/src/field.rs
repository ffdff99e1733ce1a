//! Field conversion.

use classgen_schema::{DefaultValue, Field, FieldKind, Model, ScalarType, check_field};

use crate::annotators::{AnnotatorPipeline, FieldContext};
use crate::context::ConversionContext;
use crate::description::FieldDescription;
use crate::error::ConvertResult;
use crate::types::arrayify;

/// Converts schema fields into field descriptions.
#[derive(Debug)]
pub struct FieldConverter<'a> {
    ctx: ConversionContext<'a>,
    pipeline: AnnotatorPipeline,
}

impl<'a> FieldConverter<'a> {
    /// Create a converter with the built-in annotators.
    pub fn new(ctx: ConversionContext<'a>) -> Self {
        Self::with_pipeline(ctx, AnnotatorPipeline::with_builtins())
    }

    /// Create a converter with a custom annotator pipeline.
    pub fn with_pipeline(ctx: ConversionContext<'a>, pipeline: AnnotatorPipeline) -> Self {
        Self { ctx, pipeline }
    }

    /// Get the conversion context.
    pub fn context(&self) -> ConversionContext<'a> {
        self.ctx
    }

    /// Convert one field of `model`.
    pub fn convert(&self, model: &Model, field: &Field) -> ConvertResult<FieldDescription> {
        check_field(self.ctx.document, model, field)?;

        let field_ctx = FieldContext::new(model.name(), field);
        let annotations = self.pipeline.run(self.ctx.config, &field_ctx)?;

        let base_type = if field_ctx.target.is_known() {
            field_ctx.target.as_str().to_string()
        } else {
            if field.kind == FieldKind::Scalar {
                tracing::warn!(
                    model = model.name(),
                    field = field.name(),
                    type_name = field.type_name(),
                    "unrecognized scalar type, passing the name through"
                );
            }
            field.type_name().to_string()
        };

        let type_name = if field.is_list {
            arrayify(&base_type)
        } else {
            base_type
        };

        let config = self.ctx.config;
        Ok(FieldDescription {
            name: field.name.clone(),
            type_name,
            nullable: field.is_optional(),
            default: default_expression(field),
            annotations,
            use_undefined_default: config.use_undefined_default,
            non_nullable_assertion: config.use_non_nullable_assertions,
            preserve_default_nullable: config.preserve_default_nullable,
        })
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Format a field's declared default as an expression.
///
/// Enum defaults become `Enum.Value`, big integers are wrapped in `BigInt(..)`
/// and strings are single-quoted. Database-side generators have no expression.
pub fn default_expression(field: &Field) -> Option<String> {
    let scalar = field.scalar_type();

    match field.default.as_ref()? {
        DefaultValue::Function(_) => None,
        DefaultValue::Literal(value) => {
            let raw = value.to_string();
            let expr = if field.is_enum() {
                format!("{}.{}", field.type_name, raw)
            } else if scalar == Some(ScalarType::BigInt) {
                format!("BigInt({})", raw)
            } else if scalar == Some(ScalarType::String) {
                quote(&raw)
            } else {
                raw
            };
            Some(expr)
        }
        DefaultValue::List(values) => {
            let items: Vec<String> = values
                .iter()
                .map(|value| {
                    if scalar == Some(ScalarType::String) {
                        quote(&value.to_string())
                    } else {
                        value.to_string()
                    }
                })
                .collect();
            Some(format!("[{}]", items.join(",")))
        }
    }
}
