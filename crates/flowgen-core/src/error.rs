//! Error types for payload derivation and snippet rendering

use thiserror::Error;

/// Code generation error types
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CodegenError {
    /// Whether the failure was caused by the caller's input rather than by us
    pub fn is_client_error(&self) -> bool {
        matches!(self, CodegenError::UnsupportedLanguage(_))
    }
}

/// Result type alias for code generation operations
pub type Result<T> = std::result::Result<T, CodegenError>;
