//! Core contracts for mockgen.
//!
//! This crate defines the normalized schema tree consumed by the value
//! synthesizer, the schema document that carries it between tools, and the
//! structural validation shared by the library and the CLI.

pub mod document;
pub mod error;
pub mod schema;
pub mod validation;

pub use document::SchemaDocument;
pub use error::{Error, Result};
pub use schema::{InterfaceInfo, PropertyInfo, PropertyKind, PropertyShape};
pub use validation::{validate_document, validate_interface};

/// Contract version written into schema documents.
pub const DOCUMENT_VERSION: &str = "0.1";
