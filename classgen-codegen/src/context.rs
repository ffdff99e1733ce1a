//! Conversion context shared by every stage of a conversion run.

use classgen_schema::{GeneratorConfig, SchemaDocument};

/// The document and configuration a conversion runs against.
///
/// Both are borrowed immutably for the whole run, so concurrent runs with
/// different configurations never observe each other.
#[derive(Debug, Clone, Copy)]
pub struct ConversionContext<'a> {
    /// The full document being converted.
    pub document: &'a SchemaDocument,
    /// Active generator configuration.
    pub config: &'a GeneratorConfig,
}

impl<'a> ConversionContext<'a> {
    /// Create a new conversion context.
    pub fn new(document: &'a SchemaDocument, config: &'a GeneratorConfig) -> Self {
        Self { document, config }
    }

    /// Whether relation-separation mode is active.
    pub fn separates_relations(&self) -> bool {
        self.config.separate_relation_fields
    }
}
