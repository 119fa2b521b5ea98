//! Multibyte length validators
//!
//! Length is measured in characters (Unicode scalar values), so `"日本語"`
//! has length 3 although it occupies 9 bytes of UTF-8. `&str` input is
//! counted directly; raw bytes go through [`validate_bytes`](MaxLength::validate_bytes),
//! which decodes them with the validator's [`TextEncoding`] first.

use crate::encoding::{TextEncoding, char_count};
use crate::foundation::ValidationError;

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string holds at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, encoding: TextEncoding } for str;
    rule(self, input) { char_count(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, char_count(input)) }
    new(max: usize) { Self { max, encoding: TextEncoding::utf8() } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that decodes byte input with `encoding`.
    #[must_use]
    pub fn with_encoding(max: usize, encoding: TextEncoding) -> Self {
        Self { max, encoding }
    }

    /// Validates raw bytes encoded in `self.encoding`.
    pub fn validate_bytes(&self, input: &[u8]) -> Result<(), ValidationError> {
        let actual = self.encoding.char_count(input);
        if actual <= self.max {
            Ok(())
        } else {
            Err(ValidationError::max_length(self.max, actual))
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string holds at least `min` characters.
    ///
    /// The empty string passes only when `min` is 0.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, encoding: TextEncoding } for str;
    rule(self, input) { char_count(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_count(input)) }
    new(min: usize) { Self { min, encoding: TextEncoding::utf8() } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that decodes byte input with `encoding`.
    #[must_use]
    pub fn with_encoding(min: usize, encoding: TextEncoding) -> Self {
        Self { min, encoding }
    }

    /// Validates raw bytes encoded in `self.encoding`.
    pub fn validate_bytes(&self, input: &[u8]) -> Result<(), ValidationError> {
        let actual = self.encoding.char_count(input);
        if actual >= self.min {
            Ok(())
        } else {
            Err(ValidationError::min_length(self.min, actual))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_max_length_boundaries() {
        let validator = MaxLength::new(5);
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hello!").is_err());
    }

    #[test]
    fn test_min_length_boundaries() {
        let validator = MinLength::new(2);
        assert!(validator.validate("ab").is_ok());
        assert!(validator.validate("a").is_err());
        assert!(validator.validate("").is_err());
        assert!(MinLength::new(0).validate("").is_ok());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 5 characters, 15 bytes
        let text = "あいうえお";
        assert_eq!(text.len(), 15);
        assert!(max_length(5).validate(text).is_ok());
        assert!(max_length(4).validate(text).is_err());
        assert!(min_length(5).validate(text).is_ok());
        assert!(min_length(6).validate(text).is_err());
    }

    #[test]
    fn test_error_params() {
        let error = MaxLength::new(3).validate("ミドリイロ").unwrap_err();
        assert_eq!(error.code, "max_length");
        assert_eq!(error.param("max"), Some("3"));
        assert_eq!(error.param("actual"), Some("5"));

        let error = MinLength::new(3).validate("ア").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("actual"), Some("1"));
    }

    #[test]
    fn test_validate_bytes_uses_encoding() {
        // "日本" in EUC-JP: 4 bytes, 2 characters
        let euc_jp = TextEncoding::for_label("EUC-JP").unwrap();
        let bytes = [0xC6, 0xFC, 0xCB, 0xDC];

        assert!(MaxLength::with_encoding(2, euc_jp).validate_bytes(&bytes).is_ok());
        assert!(MinLength::with_encoding(2, euc_jp).validate_bytes(&bytes).is_ok());
        assert!(MinLength::with_encoding(3, euc_jp).validate_bytes(&bytes).is_err());

        // Read as UTF-8 the same bytes are malformed, one replacement per byte.
        let error = MaxLength::new(2).validate_bytes(&bytes).unwrap_err();
        assert_eq!(error.param("actual"), Some("4"));
    }
}
