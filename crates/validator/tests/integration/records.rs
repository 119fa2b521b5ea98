//! Record validation driven by JSON configuration.

use kotoba_validator::hash::{OneWayHash, SaltedSha256};
use kotoba_validator::{ConfigError, RecordRules, RuleConfig, RuleSet};
use pretty_assertions::assert_eq;
use serde_json::json;

const SIGNUP_RULES: &str = r#"{
    "name": [
        { "rule": "not_space_only", "message": "スペース以外も入力してください" },
        { "rule": "max_length", "limit": 5, "message": "5文字以内です" },
        { "rule": "min_length", "limit": 2, "message": "2文字以上です" }
    ],
    "reading": [
        { "rule": "katakana_only", "message": "カタカナのみ入力してください" }
    ],
    "login": [
        { "rule": "alpha_numeric_ascii" }
    ],
    "password": [
        { "rule": "fields_equal", "other": "password_confirm", "hashed": true, "message": "値が違います" }
    ]
}"#;

fn signup_rules() -> (RuleSet, RecordRules) {
    let config = RuleConfig::from_json_str(r#"{ "encoding": "UTF-8" }"#).unwrap();
    let rules = RuleSet::builder()
        .encoding(config.encoding.unwrap())
        .hash(SaltedSha256::new("salt"))
        .build()
        .unwrap();
    let table = RecordRules::from_json_str(SIGNUP_RULES).unwrap();
    rules.check_rules(&table).unwrap();
    (rules, table)
}

#[test]
fn valid_signup_passes() {
    let (rules, table) = signup_rules();
    let record = json!({
        "name": "山田太郎",
        "reading": "ヤマダタロウ",
        "login": "yamada01",
        "password": SaltedSha256::new("salt").hash("hunter2"),
        "password_confirm": "hunter2",
    });

    assert_eq!(
        rules.validate_record(record.as_object().unwrap(), &table),
        Ok(())
    );
}

#[test]
fn invalid_signup_reports_host_messages() {
    let (rules, table) = signup_rules();
    let record = json!({
        "name": "\u{3000}",
        "reading": "やまだ",
        "login": "yamada-01",
        "password": SaltedSha256::new("salt").hash("hunter2"),
        "password_confirm": "hunter3",
    });

    let errors = rules
        .validate_record(record.as_object().unwrap(), &table)
        .unwrap_err();

    let reported: Vec<(&str, &str, &str)> = errors
        .errors()
        .iter()
        .map(|e| (e.field.as_deref().unwrap(), e.root_code(), &*e.message))
        .collect();

    assert_eq!(
        reported,
        vec![
            ("login", "alphanumeric_ascii", "Must contain only ASCII letters and digits"),
            ("name", "space_only", "スペース以外も入力してください"),
            ("name", "min_length", "2文字以上です"),
            ("password", "fields_equal", "値が違います"),
            ("reading", "katakana_only", "カタカナのみ入力してください"),
        ]
    );
}

#[test]
fn non_string_fields_are_skipped() {
    let (rules, table) = signup_rules();
    let record = json!({ "name": 42, "login": null });
    assert!(rules.validate_record(record.as_object().unwrap(), &table).is_ok());
}

#[test]
fn unknown_rule_name_is_a_config_error() {
    let error = RecordRules::from_json_str(r#"{ "name": [ { "rule": "hiragana_only" } ] }"#)
        .unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
}

#[test]
fn hashed_rule_without_hash_is_caught_up_front() {
    let table = RecordRules::from_json_str(SIGNUP_RULES).unwrap();
    let error = RuleSet::new().check_rules(&table).unwrap_err();
    assert!(matches!(error, ConfigError::MissingHash { ref field } if field == "password"));
}

#[test]
fn unknown_encoding_is_a_config_error() {
    let config = RuleConfig::from_json_str(r#"{ "encoding": "EUC" }"#).unwrap();
    let error = RuleSet::from_config(&config).unwrap_err();
    assert_eq!(error.to_string(), "unsupported text encoding `EUC`");
}
