//! Type mapping from schema scalar types to target-language types.

use serde::Serialize;

use classgen_schema::{Field, ScalarType};

/// Target-language type a scalar maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TargetType {
    /// `number`
    Number,
    /// `string`
    String,
    /// `Date`
    Date,
    /// `boolean`
    Boolean,
    /// `object`
    Object,
    /// `BigInt`
    BigInt,
    /// `Buffer`
    Buffer,
    /// Not a recognized scalar.
    Unknown,
}

impl TargetType {
    /// Get the target type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Date => "Date",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::BigInt => "BigInt",
            Self::Buffer => "Buffer",
            Self::Unknown => "unknown",
        }
    }

    /// Get the constructor-style name (`number` -> `Number`).
    pub fn capitalized(&self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::String => "String",
            Self::Date => "Date",
            Self::Boolean => "Boolean",
            Self::Object => "Object",
            Self::BigInt => "BigInt",
            Self::Buffer => "Buffer",
            Self::Unknown => "Unknown",
        }
    }

    /// Check whether the mapping succeeded.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a schema scalar to its target type.
pub fn scalar_to_target(scalar: ScalarType) -> TargetType {
    match scalar {
        ScalarType::Int | ScalarType::Float | ScalarType::Decimal => TargetType::Number,
        ScalarType::String => TargetType::String,
        ScalarType::DateTime => TargetType::Date,
        ScalarType::Boolean => TargetType::Boolean,
        ScalarType::Json => TargetType::Object,
        ScalarType::BigInt => TargetType::BigInt,
        ScalarType::Bytes => TargetType::Buffer,
    }
}

/// Map a scalar type name to its target type.
pub fn map_type_name(name: &str) -> TargetType {
    ScalarType::from_str(name).map_or(TargetType::Unknown, scalar_to_target)
}

/// Map a field's declared type.
///
/// Enum and object fields name another declaration rather than a primitive and
/// always map to [`TargetType::Unknown`].
pub fn map_field_type(field: &Field) -> TargetType {
    field
        .scalar_type()
        .map_or(TargetType::Unknown, scalar_to_target)
}

/// Graph-schema scalar name for a mapped type; numbers become `Int`.
pub fn graph_scalar_name(target: TargetType) -> Option<&'static str> {
    match target {
        TargetType::Unknown => None,
        TargetType::Number => Some("Int"),
        other => Some(other.capitalized()),
    }
}

/// Wrap a type name in the target-language array form.
pub fn arrayify(type_name: &str) -> String {
    format!("{}[]", type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classgen_schema::FieldKind;

    #[test]
    fn test_every_scalar_maps_to_its_fixed_target() {
        let expected = [
            ("Int", "number"),
            ("BigInt", "BigInt"),
            ("Float", "number"),
            ("Decimal", "number"),
            ("String", "string"),
            ("Boolean", "boolean"),
            ("DateTime", "Date"),
            ("Json", "object"),
            ("Bytes", "Buffer"),
        ];

        for (scalar, target) in expected {
            assert_eq!(map_type_name(scalar).as_str(), target, "scalar {}", scalar);
        }
        assert_eq!(ScalarType::ALL.len(), expected.len());
    }

    #[test]
    fn test_unrecognized_names_are_unknown() {
        for name in ["Uuid", "string", "Post", "", "Role"] {
            assert_eq!(map_type_name(name), TargetType::Unknown);
        }
        assert_eq!(TargetType::Unknown.as_str(), "unknown");
        assert!(!TargetType::Unknown.is_known());
    }

    #[test]
    fn test_non_scalar_fields_are_unknown() {
        // An enum that happens to be called `String` is still not a primitive.
        let field = Field::new("kind", "String", FieldKind::Enum);
        assert_eq!(map_field_type(&field), TargetType::Unknown);

        let field = Field::relation("author", "User", "PostAuthor");
        assert_eq!(map_field_type(&field), TargetType::Unknown);

        let field = Field::scalar("age", ScalarType::Int);
        assert_eq!(map_field_type(&field), TargetType::Number);
    }

    #[test]
    fn test_graph_scalar_name() {
        assert_eq!(graph_scalar_name(TargetType::Number), Some("Int"));
        assert_eq!(graph_scalar_name(TargetType::String), Some("String"));
        assert_eq!(graph_scalar_name(TargetType::Date), Some("Date"));
        assert_eq!(graph_scalar_name(TargetType::Unknown), None);
    }

    #[test]
    fn test_arrayify() {
        assert_eq!(arrayify("number"), "number[]");
        assert_eq!(arrayify("Post"), "Post[]");
    }
}
