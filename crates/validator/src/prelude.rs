//! Prelude module for convenient imports.
//!
//! ```rust
//! use kotoba_validator::prelude::*;
//!
//! let reading = katakana_only().and(max_length(20));
//! assert!(reading.validate("スズキ").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    AlphanumericAscii, FieldsEqual, KatakanaOnly, MaxLength, MinLength, NotSpaceOnly,
    alphanumeric_ascii, fields_equal, katakana_only, max_length, min_length, not_space_only,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, WithMessage, and, with_message};

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::hash::OneWayHash;
pub use crate::{ConfigError, Record, RecordRules, Rule, RuleConfig, RuleSet, TextEncoding};
