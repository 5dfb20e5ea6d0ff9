//! Unified error handling for the dari crate
//!
//! The four core functions (`classify`, `relevance`, `semantic_match`,
//! market inference) never fail: malformed or missing input degrades the
//! score instead of erroring. Errors exist only at the boundary: reading
//! input files, parsing records, loading configuration.

use std::io;
use thiserror::Error;

/// Unified error type for the dari crate
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input record with context
    #[error("{context}")]
    Input {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an input error with context
    pub fn input(context: impl Into<String>) -> Self {
        Self::Input {
            context: context.into(),
            source: None,
        }
    }

    /// Create an input error with context and source
    pub fn input_with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Input {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
