//! Error types for dictionary operations.

use thiserror::Error;

/// Errors raised when a word cannot be used as a dictionary key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    #[error("empty word")]
    EmptyWord,

    #[error("invalid character {ch:?} at position {pos} in {word:?}")]
    InvalidChar { word: String, ch: char, pos: usize },
}

/// Result type for dictionary operations.
pub type Result<T> = std::result::Result<T, DictError>;
