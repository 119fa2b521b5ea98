//! Built-in validators
//!
//! - **Length**: [`MaxLength`], [`MinLength`] (multibyte-aware)
//! - **Equality**: [`FieldsEqual`] (plain or hashed)
//! - **Character class**: [`KatakanaOnly`], [`AlphanumericAscii`]
//! - **Blank**: [`NotSpaceOnly`]
//!
//! # Examples
//!
//! ```rust
//! use kotoba_validator::prelude::*;
//!
//! let reading = katakana_only().and(not_space_only()).and(max_length(20));
//! assert!(reading.validate("ヤマダタロウ").is_ok());
//! assert!(reading.validate("").is_err());
//! ```

pub mod ascii;
pub mod equality;
pub mod kana;
pub mod length;
pub mod space;

pub use ascii::{AlphanumericAscii, alphanumeric_ascii};
pub use equality::{FieldsEqual, fields_equal};
pub use kana::{KatakanaOnly, katakana_only};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use space::{NotSpaceOnly, not_space_only};
