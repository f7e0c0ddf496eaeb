//! Error types for the color-spec recognizer.

use thiserror::Error;

/// Errors that can occur when parsing a color specification.
///
/// These are internal to the scan core: a candidate tag whose spec fails
/// to parse simply does not match, and the tag text flows through as
/// plain text. The adapters never surface this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorSpecError {
    /// Empty color specification.
    #[error("empty color specification")]
    Empty,

    /// Hex spec with the wrong digit count or a non-hex character.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Keyword spec containing a non-letter character.
    #[error("invalid color keyword: {0}")]
    InvalidName(String),
}
