//! Abstract Syntax Tree (AST) types for schema documents.
//!
//! This module contains all the types that represent a loaded schema document.

mod document;
mod field;
mod model;
mod types;

pub use document::*;
pub use field::*;
pub use model::*;
pub use types::*;
