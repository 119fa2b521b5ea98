//! Integration tests for kotoba-validator.

mod predicates;
mod properties;
mod records;
mod sharing;
