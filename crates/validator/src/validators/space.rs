//! Blank-input validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is not made up entirely of spaces.
    ///
    /// Half-width and full-width (U+3000) spaces, tabs and line breaks all
    /// count as space. The empty string is rejected as blank.
    pub NotSpaceOnly for str;
    rule(input) { input.chars().any(|c| !c.is_whitespace()) }
    error(input) { ValidationError::new("space_only", "Must contain a character other than space") }
    fn not_space_only();
}
