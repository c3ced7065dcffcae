use thiserror::Error;

/// Core error type shared across mockgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema violates structural invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// The requested record type is not present in the schema document.
    #[error("type not found: '{name}' (available: {})", available.join(", "))]
    TypeNotFound {
        name: String,
        available: Vec<String>,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by mockgen crates.
pub type Result<T> = std::result::Result<T, Error>;
