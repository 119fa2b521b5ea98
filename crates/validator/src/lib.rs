//! # kotoba-validator
//!
//! Field validation rules for multibyte (especially Japanese) text input.
//!
//! ## Quick Start
//!
//! ```rust
//! use kotoba_validator::RuleSet;
//!
//! let rules = RuleSet::builder().encoding("UTF-8").build()?;
//!
//! assert!(rules.max_length("日本語", 3));     // characters, not bytes
//! assert!(rules.katakana_only("カタカナ"));
//! assert!(!rules.katakana_only("かたかな"));
//! assert!(!rules.not_space_only("\u{3000}\u{3000}"));
//! assert!(rules.alpha_numeric_ascii("abc123"));
//! # Ok::<(), kotoba_validator::ConfigError>(())
//! ```
//!
//! ## Rules
//!
//! | Rule | Type | Accepts |
//! |---|---|---|
//! | max length | [`MaxLength`](validators::MaxLength) | at most N characters |
//! | min length | [`MinLength`](validators::MinLength) | at least N characters |
//! | fields equal | [`FieldsEqual`](validators::FieldsEqual) | equal to a second value, optionally hashed |
//! | katakana only | [`KatakanaOnly`](validators::KatakanaOnly) | full-width katakana, or empty |
//! | not space only | [`NotSpaceOnly`](validators::NotSpaceOnly) | anything but blank (empty is blank) |
//! | alphanumeric | [`AlphanumericAscii`](validators::AlphanumericAscii) | `[0-9a-zA-Z]*` |
//!
//! Each rule is a [`Validate`](foundation::Validate) type returning a
//! structured [`ValidationError`](foundation::ValidationError); [`RuleSet`]
//! wraps them as plain boolean predicates bound to one configuration.
//! Record-level validation with host messages lives in [`record`].

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod config;
pub mod encoding;
pub mod foundation;
pub mod hash;
mod macros;
pub mod prelude;
pub mod record;
pub mod rules;
pub mod validators;

pub use config::{ConfigError, RuleConfig};
pub use encoding::TextEncoding;
pub use record::{FieldRule, Record, RecordRules};
pub use rules::{BoxedValidator, Rule, RuleSet, RuleSetBuilder};
