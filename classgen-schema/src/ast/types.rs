//! Type definitions for the schema document AST.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Scalar types recognized by the schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// Integer type.
    Int,
    /// Big integer type.
    BigInt,
    /// Floating point type.
    Float,
    /// Decimal type for precise calculations.
    Decimal,
    /// String type.
    String,
    /// Boolean type.
    Boolean,
    /// Date and time type.
    DateTime,
    /// JSON type.
    Json,
    /// Binary/Bytes type.
    Bytes,
}

impl ScalarType {
    /// All recognized scalar types, in declaration order.
    pub const ALL: [ScalarType; 9] = [
        Self::Int,
        Self::BigInt,
        Self::Float,
        Self::Decimal,
        Self::String,
        Self::Boolean,
        Self::DateTime,
        Self::Json,
        Self::Bytes,
    ];

    /// Parse a scalar type from its schema name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Int" => Some(Self::Int),
            "BigInt" => Some(Self::BigInt),
            "Float" => Some(Self::Float),
            "Decimal" => Some(Self::Decimal),
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "DateTime" => Some(Self::DateTime),
            "Json" => Some(Self::Json),
            "Bytes" => Some(Self::Bytes),
            _ => None,
        }
    }

    /// Get the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::BigInt => "BigInt",
            Self::Float => "Float",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::DateTime => "DateTime",
            Self::Json => "Json",
            Self::Bytes => "Bytes",
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a field's declared type should be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A scalar value (`Int`, `String`, ...).
    #[default]
    Scalar,
    /// A reference to an enum declared in the document.
    Enum,
    /// A reference to a model or embedded type.
    Object,
}

impl FieldKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scalar literal as it appears in a default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal (also enum variant names).
    String(String),
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

/// A database-side default generator such as `autoincrement()` or `now()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultFunction {
    /// Function name.
    pub name: SmolStr,
    /// Raw function arguments.
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

/// A field's declared default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// A list of scalar literals (scalar lists only).
    List(Vec<Literal>),
    /// A generator evaluated by the database.
    Function(DefaultFunction),
    /// A single scalar literal.
    Literal(Literal),
}

impl DefaultValue {
    /// Create a literal default.
    pub fn literal(value: impl Into<Literal>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a list default.
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Literal>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Create a generator default with no arguments.
    pub fn function(name: impl Into<SmolStr>) -> Self {
        Self::Function(DefaultFunction {
            name: name.into(),
            args: vec![],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_from_str_round_trips_every_variant() {
        for scalar in ScalarType::ALL {
            assert_eq!(ScalarType::from_str(scalar.as_str()), Some(scalar));
        }
    }

    #[test]
    fn test_scalar_from_str_rejects_unknown() {
        assert_eq!(ScalarType::from_str("Uuid"), None);
        assert_eq!(ScalarType::from_str("int"), None);
        assert_eq!(ScalarType::from_str(""), None);
    }

    #[test]
    fn test_field_kind_deserializes_lowercase() {
        let kind: FieldKind = serde_json::from_str("\"enum\"").unwrap();
        assert_eq!(kind, FieldKind::Enum);
        assert_eq!(FieldKind::default(), FieldKind::Scalar);
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::Bool(false).to_string(), "false");
        assert_eq!(Literal::Int(42).to_string(), "42");
        assert_eq!(Literal::Float(2.0).to_string(), "2");
        assert_eq!(Literal::Float(1.5).to_string(), "1.5");
        assert_eq!(Literal::from("hello").to_string(), "hello");
    }

    #[test]
    fn test_default_value_deserialize_shapes() {
        let value: DefaultValue = serde_json::from_str("7").unwrap();
        assert_eq!(value, DefaultValue::literal(7i64));

        let value: DefaultValue = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(value, DefaultValue::literal("USER"));

        let value: DefaultValue = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(value, DefaultValue::list(["a", "b"]));

        let value: DefaultValue =
            serde_json::from_str(r#"{"name": "autoincrement", "args": []}"#).unwrap();
        assert_eq!(value, DefaultValue::function("autoincrement"));
    }
}
