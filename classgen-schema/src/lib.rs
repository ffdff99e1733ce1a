//! # classgen-schema
//!
//! Schema document AST and generator configuration for classgen.
//!
//! This crate provides:
//! - AST types describing an already-loaded schema document (models,
//!   embedded types, enums and their fields)
//! - The generator configuration consumed by the conversion engine
//! - Field shape checks reporting errors against model and field names
//!
//! ## Example
//!
//! ```rust
//! use classgen_schema::{SchemaDocument, validate_document};
//!
//! let document = SchemaDocument::from_json(r#"{
//!     "models": [{
//!         "name": "User",
//!         "fields": [
//!             {"name": "id", "type": "Int", "kind": "scalar", "isRequired": true, "isId": true},
//!             {"name": "email", "type": "String", "kind": "scalar", "isRequired": true}
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! validate_document(&document).unwrap();
//! assert_eq!(document.models[0].fields.len(), 2);
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod validator;

pub use ast::*;
pub use config::GeneratorConfig;
pub use error::{SchemaError, SchemaResult};
pub use validator::{Validator, check_field, validate_document};
