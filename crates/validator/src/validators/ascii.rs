//! ASCII alphanumeric validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string contains only `0-9`, `a-z` and `A-Z`.
    ///
    /// The empty string is accepted. Full-width digits and letters
    /// (`１２３`, `ＡＢＣ`) are rejected even though they look alphanumeric.
    pub AlphanumericAscii for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_alphanumeric()) }
    error(input) { ValidationError::new("alphanumeric_ascii", "Must contain only ASCII letters and digits") }
    fn alphanumeric_ascii();
}
