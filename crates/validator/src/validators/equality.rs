//! Field equality validator
//!
//! Compares a field with a second value, typically its confirmation field
//! (`email` / `email_confirm`). For password forms the stored field is
//! already hashed, so the plaintext confirmation is hashed before comparing.

use std::fmt;

use subtle::ConstantTimeEq;

use crate::foundation::{Validate, ValidationError};
use crate::hash::SharedHash;

/// Validates that the input equals `other`, or `hash(other)` when hashed.
///
/// Plain comparison is exact string equality. Hashed comparison runs in
/// constant time over the digest bytes.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use kotoba_validator::foundation::Validate;
/// use kotoba_validator::validators::FieldsEqual;
///
/// let confirm = FieldsEqual::new("user@example.com");
/// assert!(confirm.validate("user@example.com").is_ok());
/// assert!(confirm.validate("user@example.org").is_err());
///
/// let reversed = Arc::new(|s: &str| s.chars().rev().collect::<String>());
/// let password = FieldsEqual::hashed("secret", reversed);
/// assert!(password.validate("terces").is_ok());
/// ```
#[derive(Clone)]
pub struct FieldsEqual {
    other: String,
    hash: Option<SharedHash>,
}

impl FieldsEqual {
    /// Plain equality with `other`.
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            hash: None,
        }
    }

    /// Equality with `hash(other)`.
    pub fn hashed(other: impl Into<String>, hash: SharedHash) -> Self {
        Self {
            other: other.into(),
            hash: Some(hash),
        }
    }

    /// The comparison value as supplied, before any hashing.
    pub fn other(&self) -> &str {
        &self.other
    }

    /// Returns true if the comparison value is hashed first.
    pub fn is_hashed(&self) -> bool {
        self.hash.is_some()
    }

    fn matches(&self, input: &str) -> bool {
        match &self.hash {
            Some(hash) => {
                let expected = hash.hash(&self.other);
                input.as_bytes().ct_eq(expected.as_bytes()).into()
            }
            None => input == self.other,
        }
    }
}

impl Validate for FieldsEqual {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.matches(input) {
            Ok(())
        } else {
            Err(values_differ(self.is_hashed()))
        }
    }
}

/// Equality against a comparison value that was never supplied.
///
/// Always fails, so an empty field cannot pass a confirmation check whose
/// other side is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MissingComparison {
    pub(crate) hashed: bool,
}

impl Validate for MissingComparison {
    type Input = str;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Err(values_differ(self.hashed))
    }
}

/// The `fields_equal` failure.
pub(crate) fn values_differ(hashed: bool) -> ValidationError {
    ValidationError::new("fields_equal", "Values do not match")
        .with_param("hashed", hashed.to_string())
}

impl fmt::Debug for FieldsEqual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldsEqual")
            .field("hashed", &self.is_hashed())
            .finish_non_exhaustive()
    }
}

/// Creates a plain equality validator.
pub fn fields_equal(other: impl Into<String>) -> FieldsEqual {
    FieldsEqual::new(other)
}
