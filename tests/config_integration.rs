//! Integration tests for generator configuration.
//!
//! These tests verify that configuration read from TOML drives conversion the
//! same way as configuration built in code.

use classgen::prelude::*;
use classgen::SchemaError;
use pretty_assertions::assert_eq;

fn document() -> SchemaDocument {
    SchemaDocument::new().with_model(
        Model::new("User")
            .with_field(Field::scalar("id", ScalarType::Int).id())
            .with_field(Field::scalar("bio", ScalarType::String).optional())
            .with_field(Field::relation("posts", "Post", "UserPosts").list()),
    )
}

/// Test empty configuration
#[test]
fn test_config_empty() {
    let config = GeneratorConfig::from_toml_str("").expect("Failed to parse config");
    assert_eq!(config, GeneratorConfig::default());

    let classes = convert_document(&document(), &config).unwrap();
    assert!(classes[0].annotations.is_empty());
    assert!(classes[0].fields.iter().all(|f| f.annotations.is_empty()));
}

/// Test full configuration with snake_case keys
#[test]
fn test_config_full() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        use_serialization_annotations = true
        use_validation_annotations = true
        use_graph_annotations = true
        separate_relation_fields = true
        use_undefined_default = true
        use_non_nullable_assertions = true
        preserve_default_nullable = true
    "#,
    )
    .expect("Failed to parse config");

    assert_eq!(
        config,
        GeneratorConfig::new()
            .with_serialization_annotations(true)
            .with_validation_annotations(true)
            .with_graph_annotations(true)
            .with_separate_relation_fields(true)
            .with_undefined_default(true)
            .with_non_nullable_assertions(true)
            .with_preserve_default_nullable(true)
    );
}

/// Test generator block names with string values
#[test]
fn test_config_generator_block_aliases() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        useSwagger = "true"
        useClassValidator = "false"
        useGraphQL = true
        separateRelationFields = "yes"
    "#,
    )
    .expect("Failed to parse config");

    assert!(config.use_serialization_annotations);
    assert!(!config.use_validation_annotations);
    assert!(config.use_graph_annotations);
    assert!(config.separate_relation_fields);
}

/// Test configuration driving conversion
#[test]
fn test_config_drives_conversion() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        useClassValidator = true
        separateRelationFields = true
        useUndefinedDefault = true
    "#,
    )
    .unwrap();

    let classes = convert_document(&document(), &config).unwrap();
    let names: Vec<&str> = classes.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["UserRelations", "User"]);

    let bio = classes[1].get_field("bio").unwrap();
    assert_eq!(bio.annotation_names(), vec!["IsOptional", "IsString"]);
    assert!(bio.use_undefined_default);
    assert!(!bio.non_nullable_assertion);
}

/// Test unknown keys are rejected
#[test]
fn test_config_unknown_key() {
    let result = GeneratorConfig::from_toml_str("use_swagger_ui = true");
    assert!(matches!(result, Err(SchemaError::TomlError { .. })));
}

/// Test unreadable flag values are rejected
#[test]
fn test_config_invalid_flag() {
    let result = GeneratorConfig::from_toml_str(r#"useGraphQL = "sometimes""#);
    assert!(result.is_err());
}
