//! Boolean predicate behavior of the rule set.

use kotoba_validator::RuleSet;
use kotoba_validator::hash::{OneWayHash, SaltedSha256};
use rstest::{fixture, rstest};

#[fixture]
fn rules() -> RuleSet {
    RuleSet::builder()
        .hash(SaltedSha256::new("DYhG93b0qyJfIxfs2guVoUubWwvniR2G0FgaC9mi"))
        .build()
        .unwrap()
}

// ============================================================================
// LENGTH
// ============================================================================

#[rstest]
#[case("", 0, true)]
#[case("abc", 3, true)]
#[case("abcd", 3, false)]
#[case("日本語", 3, true)]
#[case("日本語です", 3, false)]
#[case("🍣🍺", 2, true)]
fn max_length(rules: RuleSet, #[case] value: &str, #[case] limit: usize, #[case] expected: bool) {
    assert_eq!(rules.max_length(value, limit), expected);
}

#[rstest]
#[case("", 0, true)]
#[case("", 1, false)]
#[case("日本", 2, true)]
#[case("日", 2, false)]
// six bytes of UTF-8, but two characters
#[case("日本", 6, false)]
fn min_length(rules: RuleSet, #[case] value: &str, #[case] limit: usize, #[case] expected: bool) {
    assert_eq!(rules.min_length(value, limit), expected);
}

#[test]
fn byte_lengths_follow_configured_encoding() {
    // "カタカナ" in Shift_JIS
    let sjis_bytes = [0x83, 0x4A, 0x83, 0x5E, 0x83, 0x4A, 0x83, 0x69];
    let sjis = RuleSet::builder().encoding("Shift_JIS").build().unwrap();
    assert!(sjis.max_length_bytes(&sjis_bytes, 4));
    assert!(!sjis.max_length_bytes(&sjis_bytes, 3));
    assert!(sjis.min_length_bytes(&sjis_bytes, 4));

    // The same string passed as &str is unaffected by the setting.
    assert!(sjis.max_length("カタカナ", 4));
}

// ============================================================================
// EQUALITY
// ============================================================================

#[rstest]
fn fields_equal_plain(rules: RuleSet) {
    assert!(rules.fields_equal("abc", "abc", false));
    assert!(!rules.fields_equal("abc", "abd", false));
}

#[rstest]
fn fields_equal_hashed(rules: RuleSet) {
    let hash = SaltedSha256::new("DYhG93b0qyJfIxfs2guVoUubWwvniR2G0FgaC9mi");
    let stored = hash.hash("x");
    assert!(rules.fields_equal(&stored, "x", true));
    assert!(!rules.fields_equal(&stored, "y", true));
    assert!(!rules.fields_equal("x", "x", true));
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

#[rstest]
#[case("カタカナ", true)]
#[case("かたかな", false)]
#[case("", true)]
fn katakana_only(rules: RuleSet, #[case] value: &str, #[case] expected: bool) {
    assert_eq!(rules.katakana_only(value), expected);
}

#[rstest]
#[case("   ", false)]
#[case("a b", true)]
#[case("", false)]
#[case("\u{3000}", false)]
fn not_space_only(rules: RuleSet, #[case] value: &str, #[case] expected: bool) {
    assert_eq!(rules.not_space_only(value), expected);
}

#[rstest]
#[case("abc123", true)]
#[case("abc-123", false)]
#[case("カタ", false)]
#[case("", true)]
fn alpha_numeric_ascii(rules: RuleSet, #[case] value: &str, #[case] expected: bool) {
    assert_eq!(rules.alpha_numeric_ascii(value), expected);
}
