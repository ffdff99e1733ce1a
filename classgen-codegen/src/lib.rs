//! Conversion engine for classgen.
//!
//! This crate turns a schema document into a tree of class descriptions
//! annotated with opaque metadata markers, ready for an external renderer.
//!
//! # Pipeline
//!
//! - [`ModelSetConverter`] walks every model and embedded type
//! - [`ClassBuilder`] partitions one model into a class and its type references
//! - [`FieldConverter`] resolves type, default and nullability for one field
//! - the [`annotators`] derive serialization, validation and graph annotations
//!
//! # Example
//!
//! ```rust
//! use classgen_codegen::convert_document;
//! use classgen_schema::{Field, GeneratorConfig, Model, ScalarType, SchemaDocument};
//!
//! let document = SchemaDocument::new().with_model(
//!     Model::new("User")
//!         .with_field(Field::scalar("id", ScalarType::Int).id())
//!         .with_field(Field::scalar("bio", ScalarType::String).optional()),
//! );
//! let config = GeneratorConfig::new().with_validation_annotations(true);
//!
//! let classes = convert_document(&document, &config).unwrap();
//! let bio = classes[0].get_field("bio").unwrap();
//! assert_eq!(bio.type_name, "string");
//! assert_eq!(bio.annotation_names(), vec!["IsOptional", "IsString"]);
//! ```

pub mod annotation;
pub mod annotators;
pub mod class;
pub mod context;
pub mod convert;
pub mod description;
pub mod error;
pub mod field;
pub mod rules;
pub mod types;

pub use annotation::{Annotation, AnnotationParam, OptionMap, OptionValue, TypeRef};
pub use annotators::{Annotator, AnnotatorPipeline, FieldContext};
pub use class::{ClassBuilder, ClassOptions, FieldSelection};
pub use context::ConversionContext;
pub use convert::{ModelSetConverter, RELATIONS_POSTFIX, convert_document};
pub use description::{ClassDescription, FieldDescription};
pub use error::{ConvertError, ConvertResult};
pub use field::FieldConverter;
pub use types::{TargetType, map_field_type, map_type_name};
