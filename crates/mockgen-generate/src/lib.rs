//! Schema-driven record synthesis for mockgen.
//!
//! This crate walks an [`InterfaceInfo`](mockgen_core::InterfaceInfo) tree,
//! fabricates values guided by field names, and serializes the resulting
//! records as JSON or CSV.

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{SynthesisResult, Synthesizer};
pub use errors::GenerationError;
pub use faker_rs::LocaleKey;
pub use generators::semantic::{SemanticCategory, classify};
pub use generators::{GeneratedRecord, GeneratedValue};
pub use model::{DegradedField, SynthesisOptions, SynthesisReport};
pub use output::{OutputFormat, format_records};
