//! Rule tables bound to the fields of a flat record
//!
//! A host describes which rules apply to which field, with its own message
//! text, and hands the submitted record to [`RuleSet::validate_record`]:
//!
//! ```rust
//! use std::collections::HashMap;
//! use kotoba_validator::{RecordRules, Rule, RuleSet};
//!
//! let table = RecordRules::from_json_str(r#"{
//!     "reading": [
//!         { "rule": "katakana_only", "message": "カタカナのみ入力してください" },
//!         { "rule": "max_length", "limit": 10 }
//!     ],
//!     "email": [
//!         { "rule": "fields_equal", "other": "email_confirm", "message": "値が違います" }
//!     ]
//! }"#).unwrap();
//!
//! let record: HashMap<String, String> = [
//!     ("reading", "やまだ"),
//!     ("email", "a@example.com"),
//!     ("email_confirm", "a@example.com"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_owned(), v.to_owned()))
//! .collect();
//!
//! let errors = RuleSet::new().validate_record(&record, &table).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.errors()[0].message, "カタカナのみ入力してください");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::combinators::WithMessage;
use crate::config::ConfigError;
use crate::foundation::{Validate, ValidationError, ValidationErrors};
use crate::rules::{Rule, RuleSet};
use crate::validators::equality::values_differ;

// ============================================================================
// RECORD
// ============================================================================

/// Read access to the text fields of a submitted record.
pub trait Record {
    /// The value of `name`, or `None` if the record has no such text field.
    fn field(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> Record for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Only string values are visible; numbers, arrays and `null` read as absent.
impl Record for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

// ============================================================================
// RULE TABLE
// ============================================================================

/// One rule attached to a field, with an optional host message.
///
/// In JSON the rule's own keys and `message` share one object. Any other key
/// is rejected, so a misspelled `message` fails to parse instead of being
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    /// The rule.
    #[serde(flatten)]
    pub rule: Rule,
    /// Message reported instead of the rule's default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'de> Deserialize<'de> for FieldRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut keys = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        let message = match keys.remove("message") {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message),
            Some(_) => return Err(D::Error::custom("`message` must be a string")),
        };

        let fields = Value::Object(keys);
        let rule = Rule::deserialize(&fields).map_err(D::Error::custom)?;

        // Keys the rule itself does not serialize are unknown.
        let known = serde_json::to_value(&rule).map_err(D::Error::custom)?;
        if let Some(key) = fields
            .as_object()
            .into_iter()
            .flat_map(serde_json::Map::keys)
            .find(|key| known.get(key.as_str()).is_none())
        {
            return Err(D::Error::custom(format!(
                "unknown key `{key}` for rule `{}`",
                rule.name()
            )));
        }

        Ok(Self { rule, message })
    }
}

impl From<Rule> for FieldRule {
    fn from(rule: Rule) -> Self {
        Self {
            rule,
            message: None,
        }
    }
}

/// Rules per field name, evaluated in declaration order within a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordRules {
    fields: BTreeMap<String, Vec<FieldRule>>,
}

impl RecordRules {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `rule` to `field` with the rule's default message.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.fields.entry(field.into()).or_default().push(rule.into());
        self
    }

    /// Attaches `rule` to `field` with a host message.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_with_message(
        mut self,
        field: impl Into<String>,
        rule: Rule,
        message: impl Into<String>,
    ) -> Self {
        self.fields.entry(field.into()).or_default().push(FieldRule {
            rule,
            message: Some(message.into()),
        });
        self
    }

    /// Parses a table from JSON: an object of field name to rule list.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rules attached to `field`.
    pub fn rules_for(&self, field: &str) -> &[FieldRule] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates over fields and their rules in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldRule])> {
        self.fields
            .iter()
            .map(|(field, rules)| (field.as_str(), rules.as_slice()))
    }

    /// Returns true if no rules are attached.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }
}

// ============================================================================
// RECORD VALIDATION
// ============================================================================

impl RuleSet {
    /// Checks that every rule in `table` can run with this rule set.
    ///
    /// Fails with [`ConfigError::MissingHash`] for a hashed `fields_equal`
    /// when no hash function is configured.
    pub fn check_rules(&self, table: &RecordRules) -> Result<(), ConfigError> {
        for (field, rules) in table.iter() {
            for field_rule in rules {
                let hashed = matches!(field_rule.rule, Rule::FieldsEqual { hashed: true, .. });
                if hashed && !self.has_hash() {
                    return Err(ConfigError::MissingHash {
                        field: field.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Validates the fields of `record` against `table`.
    ///
    /// Fields absent from the record are skipped. Every failing rule adds
    /// one error carrying the field name and, if configured, the host
    /// message. For `fields_equal` a missing comparison field is a mismatch,
    /// as is a hashed comparison without a configured hash function.
    pub fn validate_record<R>(&self, record: &R, table: &RecordRules) -> Result<(), ValidationErrors>
    where
        R: Record + ?Sized,
    {
        let mut errors = ValidationErrors::new();

        for (field, rules) in table.iter() {
            let Some(value) = record.field(field) else {
                continue;
            };

            for field_rule in rules {
                let other = match &field_rule.rule {
                    Rule::FieldsEqual { other, .. } => record.field(other),
                    _ => None,
                };
                let verdict = self.run(field_rule, value, other);

                if let Err(error) = verdict {
                    tracing::trace!(field, rule = field_rule.rule.name(), "field rule failed");
                    errors.add(error.with_field(field.to_owned()));
                }
            }
        }

        errors.into_result(())
    }

    fn run(
        &self,
        field_rule: &FieldRule,
        value: &str,
        other: Option<&str>,
    ) -> Result<(), ValidationError> {
        let validator = match self.validator(&field_rule.rule, other) {
            Ok(validator) => validator,
            Err(error) => {
                tracing::warn!(%error, "rule cannot run, treating as mismatch");
                return Err(mismatch(field_rule, true));
            }
        };
        match &field_rule.message {
            Some(message) => WithMessage::new(validator, message.clone()).validate(value),
            None => validator.validate(value),
        }
    }
}

/// The `fields_equal` failure reported when the comparison cannot be made.
fn mismatch(field_rule: &FieldRule, hashed: bool) -> ValidationError {
    let error = values_differ(hashed);
    match &field_rule.message {
        Some(message) => ValidationError::new("fields_equal", message.clone())
            .with_param("hashed", hashed.to_string())
            .with_nested_error(error),
        None => error,
    }
}
