//! Error types for contrast evaluation

use thiserror::Error;

/// Contrast evaluation error types
///
/// The unchecked operations never produce these; they only come out of the
/// validating constructors and [`crate::checked_passes_threshold`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContrastError {
    /// A channel or threshold outside its valid range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A hex color string that could not be parsed
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for contrast operations
pub type Result<T> = std::result::Result<T, ContrastError>;
