use thiserror::Error;

/// Errors emitted by the synthesizer and the serializers.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("record count must be >= 0, got {0}")]
    InvalidCount(i64),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("unsupported format: '{0}' (expected json or csv)")]
    UnsupportedFormat(String),
    #[error("duplicate flattened column: '{0}'")]
    DuplicateColumn(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
