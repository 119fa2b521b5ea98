//! Core traits for the validation system

use std::borrow::Cow;

use crate::foundation::ValidationError;

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every rule implements.
///
/// Generic over its input type so a rule for `str` cannot be handed a number
/// by mistake. The trait is object safe: a host that builds rules at runtime
/// stores them as `Box<dyn Validate<Input = str>>`.
///
/// # Examples
///
/// ```rust
/// use kotoba_validator::foundation::{Validate, ValidationError};
///
/// struct NoDigits;
///
/// impl Validate for NoDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().any(|c| c.is_ascii_digit()) {
///             Err(ValidationError::new("no_digits", "Digits are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoDigits.validate("abc").is_ok());
/// assert!(!NoDigits.check("a1"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean verdict: `true` when the input is accepted.
    fn check(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Implemented for every `Validate` type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND, short-circuiting on the
    /// first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kotoba_validator::prelude::*;
    ///
    /// let kana_name = katakana_only().and(MaxLength::new(5));
    /// assert!(kana_name.validate("タナカ").is_ok());
    /// assert!(kana_name.validate("タナカタロウ").is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the error message with a host-owned one.
    ///
    /// The original error is kept as a nested error.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
