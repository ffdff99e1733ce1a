//! Whole-document conversion.

use classgen_schema::{GeneratorConfig, Model, SchemaDocument};

use crate::class::{ClassBuilder, ClassOptions, FieldSelection};
use crate::context::ConversionContext;
use crate::description::ClassDescription;
use crate::error::{ConvertError, ConvertResult};

/// Postfix of relation classes in relation-separation mode.
pub const RELATIONS_POSTFIX: &str = "Relations";

/// Drives the class builder over every model and embedded type.
///
/// Without relation separation each model and each embedded type becomes one
/// class. With it, every model yields a `<Model>Relations` class holding its
/// relation fields plus a class holding the rest, and every embedded type
/// yields a class holding only its relation fields.
#[derive(Debug)]
pub struct ModelSetConverter<'a> {
    ctx: ConversionContext<'a>,
    builder: ClassBuilder<'a>,
}

impl<'a> ModelSetConverter<'a> {
    /// Create a converter with the built-in annotators.
    pub fn new(ctx: ConversionContext<'a>) -> Self {
        Self::with_builder(ClassBuilder::new(ctx))
    }

    /// Create a converter around an existing class builder.
    pub fn with_builder(builder: ClassBuilder<'a>) -> Self {
        Self {
            ctx: builder.context(),
            builder,
        }
    }

    /// The class plan: which model is built with which options, in output order.
    pub fn plan(&self) -> Vec<(&'a Model, ClassOptions)> {
        let document = self.ctx.document;
        let graph = self.ctx.config.use_graph_annotations;
        let base = ClassOptions::new().with_graph_annotations(graph);

        if !self.ctx.separates_relations() {
            return document
                .models
                .iter()
                .chain(document.types.iter())
                .map(|model| (model, base.clone()))
                .collect();
        }

        let relations = base
            .clone()
            .with_selection(FieldSelection::RelationsOnly)
            .with_postfix(RELATIONS_POSTFIX);
        let non_relations = base
            .clone()
            .with_selection(FieldSelection::NonRelationsOnly);
        let embedded = base.with_selection(FieldSelection::RelationsOnly);

        let mut plan = Vec::with_capacity(document.models.len() * 2 + document.types.len());
        plan.extend(document.models.iter().map(|m| (m, relations.clone())));
        plan.extend(document.models.iter().map(|m| (m, non_relations.clone())));
        plan.extend(document.types.iter().map(|t| (t, embedded.clone())));
        plan
    }

    /// Convert the whole document.
    ///
    /// Every field is converted even after a failure; all field errors are
    /// reported together.
    pub fn convert(&self) -> ConvertResult<Vec<ClassDescription>> {
        let plan = self.plan();
        let mut classes = Vec::with_capacity(plan.len());
        let mut errors = Vec::new();

        for (model, options) in plan {
            let (class, class_errors) = self.builder.build_partial(model, &options);
            classes.push(class);
            errors.extend(class_errors);
        }

        tracing::debug!(
            classes = classes.len(),
            errors = errors.len(),
            separate_relations = self.ctx.separates_relations(),
            "converted document"
        );

        match ConvertError::from_many(errors) {
            Some(err) => Err(err),
            None => Ok(classes),
        }
    }
}

/// Convert a document under a configuration.
pub fn convert_document(
    document: &SchemaDocument,
    config: &GeneratorConfig,
) -> ConvertResult<Vec<ClassDescription>> {
    ModelSetConverter::new(ConversionContext::new(document, config)).convert()
}
