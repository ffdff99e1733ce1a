//! Annotation shapes attached to generated classes and fields.
//!
//! Annotation names and origin tags are opaque to the converter; the renderer
//! decides what they mean. Parameters are a closed set of variants so renderers
//! can match on them exhaustively instead of inspecting raw text.

use indexmap::IndexMap;
use serde::Serialize;
use smol_str::SmolStr;

/// Origin tag of API exposure annotations.
pub const SERIALIZATION_ORIGIN: &str = "@nestjs/swagger";

/// Origin tag of input validation annotations.
pub const VALIDATION_ORIGIN: &str = "class-validator";

/// Origin tag of graph-schema annotations.
pub const GRAPH_ORIGIN: &str = "@nestjs/graphql";

/// A lazily evaluated type reference.
///
/// Rendered with the thunk convention `(type) => Name`, or `(type) => [Name]`
/// for lists, so generated code never depends on declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeRef {
    /// Referenced type name.
    pub name: SmolStr,
    /// Whether the reference is list-wrapped.
    pub list: bool,
}

impl TypeRef {
    /// Reference a single type.
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            list: false,
        }
    }

    /// Reference a list of a type.
    pub fn list_of(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            list: true,
        }
    }

    /// Reference a type, list-wrapped when `list` is set.
    pub fn new(name: impl Into<SmolStr>, list: bool) -> Self {
        Self {
            name: name.into(),
            list,
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.list {
            write!(f, "(type) => [{}]", self.name)
        } else {
            write!(f, "(type) => {}", self.name)
        }
    }
}

/// A value inside an option-map parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OptionValue {
    /// Boolean literal.
    Bool(bool),
    /// Bare expression emitted verbatim (an identifier such as `Number`).
    Expr(String),
    /// String literal, quoted by the renderer.
    Str(String),
    /// Deferred type reference.
    Deferred(TypeRef),
}

/// Ordered option map; insertion order is rendering order.
pub type OptionMap = IndexMap<SmolStr, OptionValue>;

/// One annotation parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnnotationParam {
    /// Literal emitted verbatim (`3`, `admin`).
    Literal(String),
    /// Object-valued parameter.
    Options(OptionMap),
    /// Deferred type reference.
    Deferred(TypeRef),
}

impl AnnotationParam {
    /// Create a literal parameter.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Get the literal text, if this is a literal.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// Get the option map, if this is an option map.
    pub fn as_options(&self) -> Option<&OptionMap> {
        match self {
            Self::Options(map) => Some(map),
            _ => None,
        }
    }

    /// Get the deferred reference, if this is one.
    pub fn as_deferred(&self) -> Option<&TypeRef> {
        match self {
            Self::Deferred(r) => Some(r),
            _ => None,
        }
    }
}

/// A named, parameterized marker on a class or field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// Annotation name.
    pub name: SmolStr,
    /// Opaque tag naming the library the annotation comes from.
    pub origin: SmolStr,
    /// Ordered parameters.
    pub params: Vec<AnnotationParam>,
}

impl Annotation {
    /// Create an annotation with no parameters.
    pub fn new(name: impl Into<SmolStr>, origin: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            params: vec![],
        }
    }

    /// Add a parameter, builder style.
    pub fn with_param(mut self, param: AnnotationParam) -> Self {
        self.params.push(param);
        self
    }

    /// Add a parameter.
    pub fn push_param(&mut self, param: AnnotationParam) {
        self.params.push(param);
    }

    /// Check the annotation name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Literal parameters, in order.
    pub fn literal_params(&self) -> Vec<&str> {
        self.params.iter().filter_map(|p| p.as_literal()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_display() {
        assert_eq!(TypeRef::named("Post").to_string(), "(type) => Post");
        assert_eq!(TypeRef::list_of("Post").to_string(), "(type) => [Post]");
        assert_eq!(TypeRef::new("ID", false), TypeRef::named("ID"));
    }

    #[test]
    fn test_annotation_builder() {
        let annotation = Annotation::new("IsIn", VALIDATION_ORIGIN)
            .with_param(AnnotationParam::literal("a"))
            .with_param(AnnotationParam::literal("b"));

        assert!(annotation.is("IsIn"));
        assert_eq!(annotation.origin, VALIDATION_ORIGIN);
        assert_eq!(annotation.literal_params(), vec!["a", "b"]);
    }

    #[test]
    fn test_param_accessors() {
        let deferred = AnnotationParam::Deferred(TypeRef::named("User"));
        assert_eq!(deferred.as_deferred().map(|r| r.name.as_str()), Some("User"));
        assert!(deferred.as_literal().is_none());

        let mut map = OptionMap::new();
        map.insert("nullable".into(), OptionValue::Bool(true));
        let options = AnnotationParam::Options(map);
        assert_eq!(
            options.as_options().and_then(|m| m.get("nullable")),
            Some(&OptionValue::Bool(true))
        );
    }

    #[test]
    fn test_param_serializes_tagged() {
        let param = AnnotationParam::Deferred(TypeRef::list_of("Post"));
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["kind"], "deferred");
        assert_eq!(json["value"]["name"], "Post");
        assert_eq!(json["value"]["list"], true);
    }
}
