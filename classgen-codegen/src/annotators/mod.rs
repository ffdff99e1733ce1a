//! Field annotators.
//!
//! Each annotator derives annotations for one field from one concern:
//! API exposure, input validation, or graph-schema registration. The
//! [`AnnotatorPipeline`] runs the enabled ones in registration order, and the
//! built-in order (serialization, validation, graph) is part of the output
//! contract.
//!
//! # Custom Annotators
//!
//! ```rust,ignore
//! use classgen_codegen::annotators::{Annotator, FieldContext};
//!
//! struct Deprecated;
//!
//! impl Annotator for Deprecated {
//!     fn name(&self) -> &'static str { "deprecated" }
//!     fn is_enabled(&self, _config: &GeneratorConfig) -> bool { true }
//!
//!     fn annotate(&self, ctx: &FieldContext<'_>) -> ConvertResult<Vec<Annotation>> {
//!         Ok(vec![])
//!     }
//! }
//! ```

pub mod graph;
pub mod serialization;
pub mod validation;

use classgen_schema::{Field, GeneratorConfig};

use crate::annotation::Annotation;
use crate::error::ConvertResult;
use crate::types::{TargetType, map_field_type};

pub use graph::GraphAnnotator;
pub use serialization::SerializationAnnotator;
pub use validation::ValidationAnnotator;

/// Context provided to annotators for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Name of the model the field belongs to.
    pub model: &'a str,
    /// The field being annotated.
    pub field: &'a Field,
    /// The field's mapped scalar type.
    pub target: TargetType,
}

impl<'a> FieldContext<'a> {
    /// Create a context, mapping the field's type.
    pub fn new(model: &'a str, field: &'a Field) -> Self {
        Self {
            model,
            field,
            target: map_field_type(field),
        }
    }
}

/// Trait for deriving annotations from a field.
pub trait Annotator: Send + Sync {
    /// The unique name of this annotator.
    fn name(&self) -> &'static str;

    /// Whether the configuration turns this annotator on.
    fn is_enabled(&self, config: &GeneratorConfig) -> bool;

    /// Derive annotations for one field, in output order.
    fn annotate(&self, ctx: &FieldContext<'_>) -> ConvertResult<Vec<Annotation>>;
}

/// Ordered set of annotators.
#[derive(Default)]
pub struct AnnotatorPipeline {
    annotators: Vec<Box<dyn Annotator>>,
}

impl AnnotatorPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with the built-in annotators in output order.
    pub fn with_builtins() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(Box::new(SerializationAnnotator));
        pipeline.register(Box::new(ValidationAnnotator));
        pipeline.register(Box::new(GraphAnnotator));
        pipeline
    }

    /// Append an annotator; it runs after every annotator registered before it.
    pub fn register(&mut self, annotator: Box<dyn Annotator>) {
        self.annotators.push(annotator);
    }

    /// Get all registered annotators.
    pub fn annotators(&self) -> &[Box<dyn Annotator>] {
        &self.annotators
    }

    /// Get enabled annotators based on configuration.
    pub fn enabled(&self, config: &GeneratorConfig) -> Vec<&dyn Annotator> {
        self.annotators
            .iter()
            .filter(|a| a.is_enabled(config))
            .map(|a| a.as_ref())
            .collect()
    }

    /// Run every enabled annotator and concatenate their output.
    pub fn run(
        &self,
        config: &GeneratorConfig,
        ctx: &FieldContext<'_>,
    ) -> ConvertResult<Vec<Annotation>> {
        let mut annotations = Vec::new();
        for annotator in self.enabled(config) {
            let produced = annotator.annotate(ctx)?;
            tracing::trace!(
                annotator = annotator.name(),
                model = ctx.model,
                field = ctx.field.name(),
                count = produced.len(),
                "annotated field"
            );
            annotations.extend(produced);
        }
        Ok(annotations)
    }
}

impl std::fmt::Debug for AnnotatorPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.annotators.iter().map(|a| a.name()))
            .finish()
    }
}
