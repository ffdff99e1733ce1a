//! Field definitions for the schema document AST.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{DefaultValue, FieldKind, ScalarType};

/// A field in a model or embedded type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name.
    pub name: SmolStr,
    /// Declared type name: a scalar, enum, model or embedded type name.
    #[serde(rename = "type")]
    pub type_name: SmolStr,
    /// How `type_name` should be read.
    #[serde(default)]
    pub kind: FieldKind,
    /// Whether the field holds a list.
    #[serde(default)]
    pub is_list: bool,
    /// Whether the field is required.
    #[serde(default)]
    pub is_required: bool,
    /// Whether the field is the primary identifier.
    #[serde(default)]
    pub is_id: bool,
    /// Relation name, present iff the field is a relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<SmolStr>,
    /// Declared default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Free-text documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Field {
    /// Create a new required, non-list field.
    pub fn new(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            is_list: false,
            is_required: true,
            is_id: false,
            relation_name: None,
            default: None,
            documentation: None,
        }
    }

    /// Create a scalar field.
    pub fn scalar(name: impl Into<SmolStr>, scalar: ScalarType) -> Self {
        Self::new(name, scalar.as_str(), FieldKind::Scalar)
    }

    /// Create an enum-typed field.
    pub fn enumeration(name: impl Into<SmolStr>, enum_name: impl Into<SmolStr>) -> Self {
        Self::new(name, enum_name, FieldKind::Enum)
    }

    /// Create an embedded (non-relation) object field.
    pub fn object(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self::new(name, type_name, FieldKind::Object)
    }

    /// Create a relation field to another model.
    pub fn relation(
        name: impl Into<SmolStr>,
        target: impl Into<SmolStr>,
        relation_name: impl Into<SmolStr>,
    ) -> Self {
        let mut field = Self::new(name, target, FieldKind::Object);
        field.relation_name = Some(relation_name.into());
        field
    }

    /// Get the field name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the declared type name as a string.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Check if the field is optional.
    pub fn is_optional(&self) -> bool {
        !self.is_required
    }

    /// Check if this is a relation field.
    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some()
    }

    /// Check if this is an enum-typed field.
    pub fn is_enum(&self) -> bool {
        self.kind == FieldKind::Enum
    }

    /// Check if this field holds a JSON scalar.
    pub fn is_json(&self) -> bool {
        self.scalar_type() == Some(ScalarType::Json)
    }

    /// Resolve the declared scalar type, if the field is scalar-kind and recognized.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.kind {
            FieldKind::Scalar => ScalarType::from_str(&self.type_name),
            FieldKind::Enum | FieldKind::Object => None,
        }
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Mark the field as a list.
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Mark the field as the primary identifier.
    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Set documentation.
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.type_name)?;
        if self.is_list {
            write!(f, "[]")?;
        }
        if !self.is_required {
            write!(f, "?")?;
        }
        if let Some(relation) = &self.relation_name {
            write!(f, " @relation(\"{}\")", relation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_scalar_defaults() {
        let field = Field::scalar("email", ScalarType::String);
        assert_eq!(field.name(), "email");
        assert_eq!(field.type_name(), "String");
        assert_eq!(field.kind, FieldKind::Scalar);
        assert!(field.is_required);
        assert!(!field.is_list);
        assert!(!field.is_relation());
        assert_eq!(field.scalar_type(), Some(ScalarType::String));
    }

    #[test]
    fn test_field_relation() {
        let field = Field::relation("posts", "Post", "UserPosts").list();
        assert!(field.is_relation());
        assert!(field.is_list);
        assert_eq!(field.kind, FieldKind::Object);
        assert_eq!(field.scalar_type(), None);
    }

    #[test]
    fn test_field_enum_is_not_scalar() {
        let field = Field::enumeration("role", "String");
        assert!(field.is_enum());
        assert_eq!(field.scalar_type(), None);
    }

    #[test]
    fn test_field_json() {
        assert!(Field::scalar("meta", ScalarType::Json).is_json());
        assert!(!Field::scalar("name", ScalarType::String).is_json());
    }

    #[test]
    fn test_field_display() {
        let field = Field::relation("author", "User", "PostAuthor").optional();
        assert_eq!(field.to_string(), "author User? @relation(\"PostAuthor\")");

        let field = Field::scalar("tags", ScalarType::String).list();
        assert_eq!(field.to_string(), "tags String[]");
    }

    #[test]
    fn test_field_deserialize_camel_case() {
        let field: Field = serde_json::from_str(
            r#"{
                "name": "author",
                "type": "User",
                "kind": "object",
                "isList": false,
                "isRequired": true,
                "relationName": "PostAuthor",
                "documentation": "the writer"
            }"#,
        )
        .unwrap();

        assert_eq!(field.name(), "author");
        assert_eq!(field.type_name(), "User");
        assert_eq!(field.relation_name.as_deref(), Some("PostAuthor"));
        assert_eq!(field.documentation.as_deref(), Some("the writer"));
        assert!(!field.is_id);
    }

    #[test]
    fn test_field_deserialize_missing_flags_default_to_optional_scalar() {
        let field: Field = serde_json::from_str(r#"{"name": "bio", "type": "String"}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Scalar);
        assert!(field.is_optional());
    }
}
