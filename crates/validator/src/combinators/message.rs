//! MESSAGE combinator - host-owned error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// Message text belongs to the host's form or model configuration (often a
/// localized string such as `"カタカナのみ入力してください"`). The rule's
/// own error code is kept so the verdict stays machine-readable, and the
/// original error is attached as a nested error.
///
/// # Examples
///
/// ```rust
/// use kotoba_validator::combinators::WithMessage;
/// use kotoba_validator::foundation::Validate;
/// use kotoba_validator::validators::KatakanaOnly;
///
/// let validator = WithMessage::new(KatakanaOnly, "カタカナのみ入力してください");
///
/// let error = validator.validate("ひらがな").unwrap_err();
/// assert_eq!(error.message, "カタカナのみ入力してください");
/// assert_eq!(error.code, "katakana_only");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self.code.clone().unwrap_or_else(|| original.code.clone());
            let mut error = ValidationError::new(code, self.message.clone());
            error.params.clone_from(&original.params);
            error.with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================
