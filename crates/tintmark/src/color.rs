//! Color specification recognizer.
//!
//! Validates the `SPEC` part of a `[color=SPEC]` tag. The spec is passed
//! through to the rendering layer verbatim, so this type preserves the
//! author's spelling and performs no semantic color-name validation.

use std::fmt;

use crate::error::ColorSpecError;

/// A structurally valid color specification.
///
/// Two forms are accepted:
///
/// - `Hex`: `#` followed by exactly 3 or 6 hex digits (`#f00`, `#B0041A`)
/// - `Named`: one or more ASCII letters (`red`, `rebeccapurple`)
///
/// Whether a named spec is a real CSS color is the renderer's problem;
/// `notacolor` is structurally valid here.
///
/// # Examples
///
/// ```
/// use tintmark::ColorSpec;
///
/// let named = ColorSpec::parse("red").unwrap();
/// assert_eq!(named.to_string(), "red");
///
/// let hex = ColorSpec::parse("#B0041A").unwrap();
/// assert_eq!(hex.to_string(), "#B0041A");
///
/// assert!(ColorSpec::parse("#12").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    /// Color keyword, e.g. `red`.
    Named(String),
    /// Hex digits without the `#` prefix, original case preserved.
    Hex(String),
}

impl ColorSpec {
    /// Parse a color specification.
    pub fn parse(input: &str) -> Result<Self, ColorSpecError> {
        if input.is_empty() {
            return Err(ColorSpecError::Empty);
        }

        if let Some(digits) = input.strip_prefix('#') {
            return Self::parse_hex(digits);
        }

        Self::parse_named(input)
    }

    /// Parse a hex spec (without the `#` prefix).
    fn parse_hex(digits: &str) -> Result<Self, ColorSpecError> {
        let valid_length = matches!(digits.len(), 3 | 6);
        if !valid_length || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorSpecError::InvalidHex(format!("#{}", digits)));
        }
        Ok(ColorSpec::Hex(digits.to_string()))
    }

    /// Parse a color keyword.
    fn parse_named(name: &str) -> Result<Self, ColorSpecError> {
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ColorSpecError::InvalidName(name.to_string()));
        }
        Ok(ColorSpec::Named(name.to_string()))
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Named(name) => write!(f, "{}", name),
            ColorSpec::Hex(digits) => write!(f, "#{}", digits),
        }
    }
}
