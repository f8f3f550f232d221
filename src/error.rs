//! Error types for Faktum.

use thiserror::Error;

/// Library-level error type for Faktum operations.
#[derive(Error, Debug)]
pub enum FaktumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fact lookup failed: {0}")]
    FactLookup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Memory store error: {0}")]
    Memory(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Agent error: {0}")]
    Agent(String),
}

/// Result type alias for Faktum operations.
pub type Result<T> = std::result::Result<T, FaktumError>;
