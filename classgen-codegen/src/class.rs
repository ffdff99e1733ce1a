//! Class conversion.

use indexmap::IndexSet;
use smol_str::SmolStr;

use classgen_schema::{Field, FieldKind, Model};

use crate::annotation::{Annotation, AnnotationParam, GRAPH_ORIGIN, OptionMap, OptionValue};
use crate::context::ConversionContext;
use crate::description::ClassDescription;
use crate::error::{ConvertError, ConvertResult};
use crate::field::FieldConverter;

/// Class-level graph annotation name.
pub const OBJECT_TYPE: &str = "ObjectType";

/// Description attached to every generated graph object type.
pub const OBJECT_TYPE_DESCRIPTION: &str = "generated by classgen";

/// Which of a model's fields a class keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldSelection {
    /// Every field.
    #[default]
    All,
    /// Only relation fields.
    RelationsOnly,
    /// Only non-relation fields.
    NonRelationsOnly,
}

impl FieldSelection {
    /// Build a selection from the tri-state `extractRelationFields` option.
    pub fn from_extract_relation_fields(extract: Option<bool>) -> Self {
        match extract {
            None => Self::All,
            Some(true) => Self::RelationsOnly,
            Some(false) => Self::NonRelationsOnly,
        }
    }

    /// The fields of `model` this selection keeps, in declaration order.
    pub fn select<'m>(&self, model: &'m Model) -> Vec<&'m Field> {
        match self {
            Self::All => model.fields.iter().collect(),
            Self::RelationsOnly => model.relation_fields(),
            Self::NonRelationsOnly => model.scalar_fields(),
        }
    }
}

/// Per-class conversion options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassOptions {
    /// Which fields to keep.
    pub selection: FieldSelection,
    /// Suffix appended to the model name.
    pub postfix: Option<SmolStr>,
    /// Attach the class-level graph annotation and enum registrations.
    pub graph_annotations: bool,
}

impl ClassOptions {
    /// Options keeping every field, with no postfix and no graph annotations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field selection.
    pub fn with_selection(mut self, selection: FieldSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Set the class name postfix.
    pub fn with_postfix(mut self, postfix: impl Into<SmolStr>) -> Self {
        self.postfix = Some(postfix.into());
        self
    }

    /// Enable or disable graph annotations.
    pub fn with_graph_annotations(mut self, enabled: bool) -> Self {
        self.graph_annotations = enabled;
        self
    }
}

/// Converts one model into one class description.
#[derive(Debug)]
pub struct ClassBuilder<'a> {
    fields: FieldConverter<'a>,
}

impl<'a> ClassBuilder<'a> {
    /// Create a builder with the built-in annotators.
    pub fn new(ctx: ConversionContext<'a>) -> Self {
        Self::with_field_converter(FieldConverter::new(ctx))
    }

    /// Create a builder around an existing field converter.
    pub fn with_field_converter(fields: FieldConverter<'a>) -> Self {
        Self { fields }
    }

    /// Get the conversion context.
    pub fn context(&self) -> ConversionContext<'a> {
        self.fields.context()
    }

    /// Convert a model, failing on the first field error.
    pub fn build(&self, model: &Model, options: &ClassOptions) -> ConvertResult<ClassDescription> {
        let (class, mut errors) = self.build_partial(model, options);
        if errors.is_empty() {
            Ok(class)
        } else {
            Err(errors.swap_remove(0))
        }
    }

    /// Convert a model, skipping fields that fail and returning their errors.
    pub fn build_partial(
        &self,
        model: &Model,
        options: &ClassOptions,
    ) -> (ClassDescription, Vec<ConvertError>) {
        let mut class = ClassDescription::new(class_name(model, options));
        let mut errors = Vec::new();

        let relation_types = relation_types(model, self.context().separates_relations());
        let embedded_types = embedded_types(model);
        let enum_types = enum_types(model);

        for field in options.selection.select(model) {
            match self.fields.convert(model, field) {
                Ok(description) => class.fields.push(description),
                Err(err) => errors.push(err),
            }
        }

        if options.selection != FieldSelection::NonRelationsOnly {
            class.relation_types = relation_types;
        }
        if options.selection != FieldSelection::RelationsOnly {
            class.enum_types = enum_types;
        }
        class.embedded_types = embedded_types;

        if options.graph_annotations {
            class.annotations.push(object_type_annotation());
            if !class.enum_types.is_empty() {
                class.extra = Some(enum_registrations(&class.enum_types));
            }
        }

        tracing::debug!(
            class = class.name(),
            fields = class.fields.len(),
            errors = errors.len(),
            "built class"
        );

        (class, errors)
    }
}

/// Class name for a model: the model name plus the optional postfix.
pub fn class_name(model: &Model, options: &ClassOptions) -> SmolStr {
    match &options.postfix {
        Some(postfix) => SmolStr::from(format!("{}{}", model.name, postfix)),
        None => model.name.clone(),
    }
}

/// Types referenced through relation fields.
///
/// A model's reference to itself only counts in relation-separation mode,
/// where the relation class is a distinct class from the model's own.
pub fn relation_types(model: &Model, separate_relations: bool) -> IndexSet<SmolStr> {
    model
        .fields
        .iter()
        .filter(|f| f.is_relation() && (separate_relations || !model.is_self_reference(f)))
        .map(|f| f.type_name.clone())
        .collect()
}

/// Types referenced through embedded (object, non-relation) fields.
pub fn embedded_types(model: &Model) -> IndexSet<SmolStr> {
    model
        .fields
        .iter()
        .filter(|f| f.kind == FieldKind::Object && !f.is_relation() && !model.is_self_reference(f))
        .map(|f| f.type_name.clone())
        .collect()
}

/// Enum types referenced by the model's fields.
pub fn enum_types(model: &Model) -> IndexSet<SmolStr> {
    model
        .fields
        .iter()
        .filter(|f| f.is_enum() && !model.is_self_reference(f))
        .map(|f| f.type_name.clone())
        .collect()
}

fn object_type_annotation() -> Annotation {
    let mut options = OptionMap::new();
    options.insert(
        "description".into(),
        OptionValue::Str(OBJECT_TYPE_DESCRIPTION.to_string()),
    );
    Annotation::new(OBJECT_TYPE, GRAPH_ORIGIN).with_param(AnnotationParam::Options(options))
}

/// One registration statement per enum, separated by a CRLF blank line.
pub fn enum_registrations(enum_types: &IndexSet<SmolStr>) -> String {
    enum_types
        .iter()
        .map(|name| format!("registerEnumType({name}, {{\n\tname: \"{name}\"\n}})"))
        .collect::<Vec<_>>()
        .join("\r\n\r\n")
}
