pub mod csv;

use std::fmt;
use std::str::FromStr;

use crate::errors::GenerationError;
use crate::generators::GeneratedRecord;

pub use self::csv::{FlatRow, flatten, records_to_csv};

/// Serialization targets for synthesized records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(GenerationError::UnsupportedFormat(value.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render records in the requested format.
///
/// JSON is pretty printed with two-space indentation. CSV flattens nested
/// objects into dotted columns and collapses arrays into a single cell.
pub fn format_records(
    records: &[GeneratedRecord],
    format: OutputFormat,
) -> Result<String, GenerationError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => records_to_csv(records),
    }
}
