//! Validator combinators
//!
//! - [`And`] — both validators must pass
//! - [`WithMessage`] — host-owned message replaces the rule's default

pub mod and;
pub mod message;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
