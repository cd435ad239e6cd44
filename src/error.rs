//! Error types for chroma

use thiserror::Error;

use crate::syntax::LanguageId;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Highlighting error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Language not found: {0}")]
    LanguageNotFound(LanguageId),
}

/// Errors raised while loading a theme definition
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid color for `{field}`: {value}")]
    InvalidColor { field: String, value: String },

    #[error("Invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },
}
