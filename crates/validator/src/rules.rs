//! The configured rule set and named rules
//!
//! [`RuleSet`] is built once, with the text encoding and an optional
//! one-way hash, and then answers every rule as a boolean predicate. It is
//! `Clone + Send + Sync`, so a single instance can be shared by all request
//! handlers of a host.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, RuleConfig};
use crate::encoding::TextEncoding;
use crate::foundation::{Validate, ValidationError};
use crate::hash::{OneWayHash, SharedHash};
use crate::validators::equality::MissingComparison;
use crate::validators::{
    AlphanumericAscii, FieldsEqual, KatakanaOnly, MaxLength, MinLength, NotSpaceOnly,
};

/// A rule built at runtime from its name.
pub type BoxedValidator = Box<dyn Validate<Input = str> + Send + Sync>;

// ============================================================================
// NAMED RULES
// ============================================================================

/// A rule by name, with its parameters.
///
/// Serialized with an internal `rule` tag so hosts can keep rule tables in
/// their own configuration:
///
/// ```rust
/// use kotoba_validator::Rule;
///
/// let rule: Rule = serde_json::from_str(r#"{ "rule": "max_length", "limit": 5 }"#).unwrap();
/// assert_eq!(rule, Rule::MaxLength { limit: 5 });
/// assert_eq!(rule.name(), "max_length");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// At most `limit` characters.
    MaxLength {
        /// Inclusive upper bound.
        limit: usize,
    },
    /// At least `limit` characters.
    MinLength {
        /// Inclusive lower bound.
        limit: usize,
    },
    /// Equal to the value of field `other` (hashed first when `hashed`).
    FieldsEqual {
        /// Name of the field to compare with.
        other: String,
        /// Hash `other` before comparing.
        #[serde(default)]
        hashed: bool,
    },
    /// Full-width katakana only.
    KatakanaOnly,
    /// Not blank.
    NotSpaceOnly,
    /// ASCII letters and digits only.
    AlphaNumericAscii,
}

impl Rule {
    /// The rule's snake_case name, as used in serialized form.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MaxLength { .. } => "max_length",
            Self::MinLength { .. } => "min_length",
            Self::FieldsEqual { .. } => "fields_equal",
            Self::KatakanaOnly => "katakana_only",
            Self::NotSpaceOnly => "not_space_only",
            Self::AlphaNumericAscii => "alpha_numeric_ascii",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxLength { limit } | Self::MinLength { limit } => {
                write!(f, "{}({limit})", self.name())
            }
            Self::FieldsEqual { other, hashed } => {
                write!(f, "{}({other}, hashed={hashed})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// The configured validation library.
///
/// # Examples
///
/// ```rust
/// use kotoba_validator::RuleSet;
///
/// let rules = RuleSet::new();
/// assert!(rules.max_length("日本語", 3));
/// assert!(!rules.min_length("日本語", 4));
/// assert!(rules.katakana_only("カタカナ"));
/// assert!(!rules.not_space_only("\u{3000}"));
/// assert!(rules.alpha_numeric_ascii("abc123"));
/// assert!(rules.fields_equal("abc", "abc", false));
/// ```
#[derive(Clone, Default)]
pub struct RuleSet {
    encoding: TextEncoding,
    hash: Option<SharedHash>,
}

impl RuleSet {
    /// A rule set with UTF-8 encoding and no hash function.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a rule set.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Builds a rule set from serialized configuration.
    pub fn from_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(label) = &config.encoding {
            builder = builder.encoding(label.clone());
        }
        builder.build()
    }

    /// The encoding used for byte-level length checks.
    #[must_use]
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Returns true if a hash function is configured.
    #[must_use]
    pub fn has_hash(&self) -> bool {
        self.hash.is_some()
    }

    // ── predicates ──────────────────────────────────────────────────────────

    /// `value` has at most `limit` characters.
    pub fn max_length(&self, value: &str, limit: usize) -> bool {
        MaxLength::with_encoding(limit, self.encoding).check(value)
    }

    /// Byte input decoded with the configured encoding has at most `limit` characters.
    pub fn max_length_bytes(&self, value: &[u8], limit: usize) -> bool {
        MaxLength::with_encoding(limit, self.encoding)
            .validate_bytes(value)
            .is_ok()
    }

    /// `value` has at least `limit` characters.
    pub fn min_length(&self, value: &str, limit: usize) -> bool {
        MinLength::with_encoding(limit, self.encoding).check(value)
    }

    /// Byte input decoded with the configured encoding has at least `limit` characters.
    pub fn min_length_bytes(&self, value: &[u8], limit: usize) -> bool {
        MinLength::with_encoding(limit, self.encoding)
            .validate_bytes(value)
            .is_ok()
    }

    /// `value` equals `other`, or `hash(other)` when `hashed`.
    ///
    /// A hashed comparison without a configured hash function is a mismatch.
    pub fn fields_equal(&self, value: &str, other: &str, hashed: bool) -> bool {
        match self.equality(other, hashed) {
            Some(validator) => validator.check(value),
            None => {
                tracing::warn!("hashed comparison requested but no hash function is configured");
                false
            }
        }
    }

    /// Every character of `value` is full-width katakana.
    pub fn katakana_only(&self, value: &str) -> bool {
        KatakanaOnly.check(value)
    }

    /// `value` has at least one character that is not a space.
    pub fn not_space_only(&self, value: &str) -> bool {
        NotSpaceOnly.check(value)
    }

    /// Every character of `value` is an ASCII letter or digit.
    pub fn alpha_numeric_ascii(&self, value: &str) -> bool {
        AlphanumericAscii.check(value)
    }

    // ── named rules ─────────────────────────────────────────────────────────

    /// Builds the validator for a named rule.
    ///
    /// `other` supplies the comparison value for [`Rule::FieldsEqual`] and is
    /// ignored otherwise. Without it the equality validator always fails.
    pub fn validator(
        &self,
        rule: &Rule,
        other: Option<&str>,
    ) -> Result<BoxedValidator, ConfigError> {
        let validator: BoxedValidator = match rule {
            Rule::MaxLength { limit } => Box::new(MaxLength::with_encoding(*limit, self.encoding)),
            Rule::MinLength { limit } => Box::new(MinLength::with_encoding(*limit, self.encoding)),
            Rule::FieldsEqual { other: field, hashed } => {
                if *hashed && !self.has_hash() {
                    return Err(ConfigError::MissingHash {
                        field: field.clone(),
                    });
                }
                match other.and_then(|value| self.equality(value, *hashed)) {
                    Some(validator) => Box::new(validator),
                    None => Box::new(MissingComparison { hashed: *hashed }),
                }
            }
            Rule::KatakanaOnly => Box::new(KatakanaOnly),
            Rule::NotSpaceOnly => Box::new(NotSpaceOnly),
            Rule::AlphaNumericAscii => Box::new(AlphanumericAscii),
        };
        Ok(validator)
    }

    /// Evaluates a named rule against `value`.
    pub fn evaluate(
        &self,
        rule: &Rule,
        value: &str,
        other: Option<&str>,
    ) -> Result<Result<(), ValidationError>, ConfigError> {
        Ok(self.validator(rule, other)?.validate(value))
    }

    fn equality(&self, other: &str, hashed: bool) -> Option<FieldsEqual> {
        if !hashed {
            return Some(FieldsEqual::new(other));
        }
        self.hash
            .as_ref()
            .map(|hash| FieldsEqual::hashed(other, Arc::clone(hash)))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("encoding", &self.encoding)
            .field("has_hash", &self.has_hash())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`RuleSet`].
///
/// ```rust
/// use kotoba_validator::RuleSet;
/// use kotoba_validator::hash::SaltedSha256;
///
/// let rules = RuleSet::builder()
///     .encoding("Shift_JIS")
///     .hash(SaltedSha256::new("pepper"))
///     .build()
///     .unwrap();
/// assert_eq!(rules.encoding().name(), "Shift_JIS");
/// assert!(rules.has_hash());
/// ```
#[derive(Default)]
pub struct RuleSetBuilder {
    encoding: Option<String>,
    hash: Option<SharedHash>,
}

impl RuleSetBuilder {
    /// Sets the encoding label. Absent or blank means UTF-8.
    #[must_use = "builder methods must be chained or built"]
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Injects the one-way hash used by hashed field comparisons.
    #[must_use = "builder methods must be chained or built"]
    pub fn hash(mut self, hash: impl OneWayHash + 'static) -> Self {
        self.hash = Some(Arc::new(hash));
        self
    }

    /// Injects an already shared hash.
    #[must_use = "builder methods must be chained or built"]
    pub fn shared_hash(mut self, hash: SharedHash) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Resolves the encoding and returns the rule set.
    pub fn build(self) -> Result<RuleSet, ConfigError> {
        let encoding = TextEncoding::resolve(self.encoding.as_deref())?;
        tracing::debug!(
            encoding = encoding.name(),
            has_hash = self.hash.is_some(),
            "rule set configured"
        );
        Ok(RuleSet {
            encoding,
            hash: self.hash,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
