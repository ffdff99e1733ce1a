//! Class and field descriptions handed to the renderer.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use smol_str::SmolStr;

use crate::annotation::Annotation;

/// One field of a generated class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescription {
    /// Field name.
    pub name: SmolStr,
    /// Resolved type name, list-wrapped for list fields.
    pub type_name: String,
    /// Declared optional in the source schema.
    pub nullable: bool,
    /// Default expression text.
    pub default: Option<String>,
    /// Annotations: serialization, then validation, then graph.
    pub annotations: Vec<Annotation>,
    /// Render absent defaults as `undefined`.
    pub use_undefined_default: bool,
    /// Render a non-null assertion.
    pub non_nullable_assertion: bool,
    /// Keep the nullable marker when a default is present.
    pub preserve_default_nullable: bool,
}

impl FieldDescription {
    /// Create a description with no annotations.
    pub fn new(name: impl Into<SmolStr>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nullable: false,
            default: None,
            annotations: vec![],
            use_undefined_default: false,
            non_nullable_assertion: false,
            preserve_default_nullable: false,
        }
    }

    /// Get the field name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get an annotation by name.
    pub fn get_annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.is(name))
    }

    /// Annotation names, in order.
    pub fn annotation_names(&self) -> Vec<&str> {
        self.annotations.iter().map(|a| a.name.as_str()).collect()
    }
}

/// One generated class.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassDescription {
    /// Class name.
    pub name: SmolStr,
    /// Fields, in source order.
    pub fields: Vec<FieldDescription>,
    /// Referenced relation types.
    pub relation_types: IndexSet<SmolStr>,
    /// Referenced embedded types.
    pub embedded_types: IndexSet<SmolStr>,
    /// Referenced enum types.
    pub enum_types: IndexSet<SmolStr>,
    /// Class-level annotations.
    pub annotations: Vec<Annotation>,
    /// Trailing free-text block for auxiliary declarations.
    pub extra: Option<String>,
}

impl ClassDescription {
    /// Create an empty class.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get the class name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Field names, in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name()).collect()
    }

    /// Annotation names grouped by origin, for emitting imports.
    ///
    /// Origins appear in first-use order, class annotations before field
    /// annotations; names are deduplicated per origin.
    pub fn imports(&self) -> IndexMap<SmolStr, IndexSet<SmolStr>> {
        let mut imports: IndexMap<SmolStr, IndexSet<SmolStr>> = IndexMap::new();

        let field_annotations = self.fields.iter().flat_map(|f| f.annotations.iter());
        for annotation in self.annotations.iter().chain(field_annotations) {
            imports
                .entry(annotation.origin.clone())
                .or_default()
                .insert(annotation.name.clone());
        }

        imports
    }
}
