//! # classgen
//!
//! Converts a normalized database schema document into annotated
//! data-transfer class descriptions.
//!
//! classgen provides:
//! - A schema document AST loaded from the JSON shape schema tools emit
//! - A generator configuration read from TOML or a generator block
//! - A conversion engine producing class and field descriptions carrying
//!   serialization, validation and graph-schema annotations
//!
//! Rendering the descriptions to source text is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use classgen::prelude::*;
//!
//! let document = SchemaDocument::new().with_model(
//!     Model::new("User")
//!         .with_field(Field::scalar("id", ScalarType::Int).id())
//!         .with_field(
//!             Field::scalar("name", ScalarType::String)
//!                 .with_documentation("minLength:3 maxLength:20"),
//!         ),
//! );
//! let config = GeneratorConfig::new().with_validation_annotations(true);
//!
//! let classes = convert_document(&document, &config)?;
//! let name = classes[0].get_field("name").unwrap();
//! assert_eq!(name.annotation_names(), vec!["MinLength", "MaxLength"]);
//! # Ok::<(), classgen::ConvertError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Schema document AST and generator configuration.
pub mod schema {
    pub use classgen_schema::*;
}

/// Conversion engine and description types.
pub mod codegen {
    pub use classgen_codegen::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::codegen::{
        Annotation, AnnotationParam, ClassDescription, FieldDescription, OptionValue, TypeRef,
        convert_document,
    };
    pub use crate::schema::{
        DefaultValue, Enum, Field, FieldKind, GeneratorConfig, Model, ScalarType, SchemaDocument,
    };
}

// Re-export key types at the crate root
pub use codegen::{ClassDescription, ConvertError, FieldDescription, convert_document};
pub use schema::{GeneratorConfig, SchemaDocument, SchemaError};
