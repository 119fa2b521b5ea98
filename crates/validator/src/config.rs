//! Rule set configuration
//!
//! The only knob is the text encoding used by the length rules. It is read
//! once, when a [`RuleSet`](crate::RuleSet) is built, and never changes
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::encoding::TextEncoding;

/// Errors raised while configuring rules.
///
/// Validation itself never fails with an error: a rejected value is a
/// [`ValidationError`](crate::foundation::ValidationError) verdict.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The encoding label does not name a supported encoding.
    #[error("unsupported text encoding `{0}`")]
    UnknownEncoding(String),

    /// A hashed `fields_equal` rule was configured but no hash function was
    /// supplied.
    #[error("field `{field}` compares against a hashed value but no hash function is configured")]
    MissingHash {
        /// The field carrying the rule.
        field: String,
    },

    /// Configuration JSON could not be parsed.
    #[error("invalid rule configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serializable rule set configuration.
///
/// # Examples
///
/// ```rust
/// use kotoba_validator::RuleConfig;
///
/// let config = RuleConfig::from_json_str(r#"{ "encoding": "EUC-JP" }"#).unwrap();
/// assert_eq!(config.resolve_encoding().unwrap().name(), "EUC-JP");
///
/// // Absent encoding means UTF-8.
/// let config = RuleConfig::from_json_str("{}").unwrap();
/// assert_eq!(config.resolve_encoding().unwrap().name(), "UTF-8");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Encoding label for multibyte length counting. `None` or blank means UTF-8.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl RuleConfig {
    /// Creates a configuration with the default (UTF-8) encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the encoding label.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves the configured encoding label.
    pub fn resolve_encoding(&self) -> Result<TextEncoding, ConfigError> {
        TextEncoding::resolve(self.encoding.as_deref())
    }
}
