//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Every rule in this crate is a type implementing [`Validate`]. Rules are
//! pure: the same input against the same rule always yields the same verdict.

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs every validator against `value` and collects all failures.
///
/// # Examples
///
/// ```rust
/// use kotoba_validator::foundation::{Validate, validate_with_all};
/// use kotoba_validator::validators::{MaxLength, MinLength};
///
/// let min = MinLength::new(2);
/// let max = MaxLength::new(4);
/// let rules: [&dyn Validate<Input = str>; 2] = [&min, &max];
///
/// assert!(validate_with_all("ミカン", &rules).is_ok());
/// assert_eq!(validate_with_all("ミ", &rules).unwrap_err().len(), 1);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
