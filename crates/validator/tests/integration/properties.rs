//! Property-based tests.

use kotoba_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// LENGTH: verdict iff character count
// ============================================================================

proptest! {
    #[test]
    fn max_length_iff_char_count(s in "\\PC{0,12}", n in 0usize..16) {
        let rules = RuleSet::new();
        prop_assert_eq!(rules.max_length(&s, n), s.chars().count() <= n);
    }

    #[test]
    fn min_length_iff_char_count(s in "\\PC{0,12}", n in 0usize..16) {
        let rules = RuleSet::new();
        prop_assert_eq!(rules.min_length(&s, n), s.chars().count() >= n);
    }

    #[test]
    fn utf8_bytes_agree_with_str(s in "\\PC{0,12}", n in 0usize..16) {
        let rules = RuleSet::new();
        prop_assert_eq!(rules.max_length_bytes(s.as_bytes(), n), rules.max_length(&s, n));
        prop_assert_eq!(rules.min_length_bytes(s.as_bytes(), n), rules.min_length(&s, n));
    }
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

proptest! {
    #[test]
    fn katakana_strings_accepted(s in "[ァ-ヶー]{0,10}") {
        prop_assert!(katakana_only().validate(&*s).is_ok());
    }

    #[test]
    fn hiragana_rejected(s in "[ぁ-ゖ]{1,10}") {
        prop_assert!(katakana_only().validate(&*s).is_err());
    }

    #[test]
    fn ascii_alphanumeric_accepted(s in "[a-zA-Z0-9]{0,20}") {
        prop_assert!(alphanumeric_ascii().validate(&*s).is_ok());
    }

    #[test]
    fn blank_strings_rejected(s in "[ \u{3000}\t]{0,10}") {
        prop_assert!(not_space_only().validate(&*s).is_err());
    }

    #[test]
    fn any_visible_char_makes_non_blank(pad in "[ \u{3000}]{0,5}", c in "[a-zA-Zあ-んア-ン]") {
        let s = format!("{pad}{c}{pad}");
        prop_assert!(not_space_only().validate(&*s).is_ok());
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn rules_are_idempotent(s in ".{0,16}", other in ".{0,16}", n in 0usize..8) {
        let rules = RuleSet::new();
        prop_assert_eq!(rules.max_length(&s, n), rules.max_length(&s, n));
        prop_assert_eq!(rules.min_length(&s, n), rules.min_length(&s, n));
        prop_assert_eq!(rules.fields_equal(&s, &other, false), rules.fields_equal(&s, &other, false));
        prop_assert_eq!(rules.katakana_only(&s), rules.katakana_only(&s));
        prop_assert_eq!(rules.not_space_only(&s), rules.not_space_only(&s));
        prop_assert_eq!(rules.alpha_numeric_ascii(&s), rules.alpha_numeric_ascii(&s));
    }

    #[test]
    fn fields_equal_is_string_equality(a in ".{0,8}", b in ".{0,8}") {
        prop_assert_eq!(RuleSet::new().fields_equal(&a, &b, false), a == b);
    }
}

// ============================================================================
// COMBINATOR LAWS: a.and(b) fails iff a fails or b fails
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in "\\PC{0,12}") {
        let a = katakana_only();
        let b = max_length(5);
        let combined = a.and(b);

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        prop_assert_eq!(combined.validate(&*s).is_ok(), a_ok && b_ok);
    }
}
