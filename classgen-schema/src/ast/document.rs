//! Top-level schema document.

use serde::{Deserialize, Serialize};

use super::{Enum, Model};
use crate::error::{SchemaError, SchemaResult};

/// A complete, already-loaded schema document.
///
/// Documents are read-only input to the converter. An external loader is
/// expected to produce them, typically by deserializing JSON with
/// [`SchemaDocument::from_json`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// All models, in declaration order.
    #[serde(default)]
    pub models: Vec<Model>,
    /// Embedded types (model-shaped, never related to the document root).
    #[serde(default)]
    pub types: Vec<Model>,
    /// Enum declarations, when the loader provides them.
    #[serde(default)]
    pub enums: Vec<Enum>,
}

impl SchemaDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from its JSON form.
    pub fn from_json(content: &str) -> SchemaResult<Self> {
        let document: Self =
            serde_json::from_str(content).map_err(|e| SchemaError::Json { source: e })?;
        tracing::debug!(
            models = document.models.len(),
            types = document.types.len(),
            enums = document.enums.len(),
            "loaded schema document"
        );
        Ok(document)
    }

    /// Add a model to the document.
    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    /// Add an embedded type to the document.
    pub fn add_type(&mut self, t: Model) {
        self.types.push(t);
    }

    /// Add an enum to the document.
    pub fn add_enum(&mut self, e: Enum) {
        self.enums.push(e);
    }

    /// Add a model, builder style.
    pub fn with_model(mut self, model: Model) -> Self {
        self.add_model(model);
        self
    }

    /// Add an embedded type, builder style.
    pub fn with_type(mut self, t: Model) -> Self {
        self.add_type(t);
        self
    }

    /// Add an enum, builder style.
    pub fn with_enum(mut self, e: Enum) -> Self {
        self.add_enum(e);
        self
    }

    /// Get a model by name.
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name() == name)
    }

    /// Get an embedded type by name.
    pub fn get_type(&self, name: &str) -> Option<&Model> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// Get an enum by name.
    pub fn get_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name() == name)
    }

    /// Check whether a name refers to a model or an embedded type.
    pub fn is_object_type(&self, name: &str) -> bool {
        self.get_model(name).is_some() || self.get_type(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, FieldKind, ScalarType};

    #[test]
    fn test_document_lookup() {
        let doc = SchemaDocument::new()
            .with_model(Model::new("User").with_field(Field::scalar("id", ScalarType::Int)))
            .with_type(Model::new("Address"))
            .with_enum(Enum::new("Role", ["USER"]));

        assert!(doc.get_model("User").is_some());
        assert!(doc.get_type("Address").is_some());
        assert!(doc.get_enum("Role").is_some());
        assert!(doc.is_object_type("User"));
        assert!(doc.is_object_type("Address"));
        assert!(!doc.is_object_type("Role"));
    }

    #[test]
    fn test_document_from_json() {
        let doc = SchemaDocument::from_json(
            r#"{
                "models": [
                    {
                        "name": "Post",
                        "fields": [
                            {"name": "id", "type": "Int", "kind": "scalar", "isRequired": true, "isId": true},
                            {"name": "tags", "type": "String", "kind": "scalar", "isList": true, "isRequired": true, "default": ["a", "b"]}
                        ]
                    }
                ],
                "enums": [{"name": "Role", "values": ["USER", "ADMIN"]}]
            }"#,
        )
        .unwrap();

        let post = doc.get_model("Post").unwrap();
        assert_eq!(post.fields.len(), 2);
        assert!(post.fields[0].is_id);
        assert_eq!(post.fields[1].kind, FieldKind::Scalar);
        assert!(doc.types.is_empty());
        assert_eq!(doc.enums[0].values.len(), 2);
    }

    #[test]
    fn test_document_from_invalid_json() {
        let err = SchemaDocument::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SchemaError::Json { .. }));
    }
}
