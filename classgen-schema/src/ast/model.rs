//! Model and enum definitions for the schema document AST.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::Field;

/// A model definition, also used for embedded types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model name.
    pub name: SmolStr,
    /// Model fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Documentation comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Model {
    /// Create a new model with no fields.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
            documentation: None,
        }
    }

    /// Get the model name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Add a field to the model.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Add a field, builder style.
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Get all relation fields.
    pub fn relation_fields(&self) -> Vec<&Field> {
        self.fields.iter().filter(|f| f.is_relation()).collect()
    }

    /// Get all non-relation fields.
    pub fn scalar_fields(&self) -> Vec<&Field> {
        self.fields.iter().filter(|f| !f.is_relation()).collect()
    }

    /// Check whether a field's declared type points back at this model.
    pub fn is_self_reference(&self, field: &Field) -> bool {
        field.type_name == self.name
    }
}

/// An enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    /// Enum name.
    pub name: SmolStr,
    /// Variant names.
    #[serde(default)]
    pub values: Vec<SmolStr>,
}

impl Enum {
    /// Create a new enum.
    pub fn new<I, V>(name: impl Into<SmolStr>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SmolStr>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the enum name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
