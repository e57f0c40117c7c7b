//! Errors for parsing item attributes from text

use std::error::Error as StdError;
use std::fmt;

/// Returned when text does not name a known attribute value.
///
/// # Example
///
/// ```rust
/// use criteria::product::Color;
///
/// let err = "purple".parse::<Color>().unwrap_err();
/// assert_eq!(err.to_string(), "unknown color 'purple' (expected one of: red, green, blue)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAttributeError {
    attribute: &'static str,
    input: String,
    expected: &'static [&'static str],
}

impl ParseAttributeError {
    pub(crate) fn new(
        attribute: &'static str,
        input: impl Into<String>,
        expected: &'static [&'static str],
    ) -> Self {
        Self {
            attribute,
            input: input.into(),
            expected,
        }
    }

    /// Name of the attribute that failed to parse, e.g. `"color"`.
    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}' (expected one of: {})",
            self.attribute,
            self.input,
            self.expected.join(", ")
        )
    }
}

impl StdError for ParseAttributeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseAttributeError::new("size", "huge", &["small", "large"]);
        assert_eq!(
            err.to_string(),
            "unknown size 'huge' (expected one of: small, large)"
        );
        assert_eq!(err.attribute(), "size");
        assert_eq!(err.input(), "huge");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn StdError> = Box::new(ParseAttributeError::new("color", "", &[]));
        assert!(err.source().is_none());
    }
}
