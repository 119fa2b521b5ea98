//! Full-width katakana validator

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// ァ (U+30A1) through ヶ (U+30F6), the prolonged sound mark ー (U+30FC)
// and the spacing voicing marks ゛ (U+309B) and ゜ (U+309C).
static KATAKANA_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new("^[\u{30A1}-\u{30F6}\u{30FC}\u{309B}\u{309C}]*$").unwrap()
});

crate::validator! {
    /// Validates that a string consists only of full-width katakana.
    ///
    /// The empty string is accepted. Hiragana, half-width katakana
    /// (`ｶﾀｶﾅ`), the middle dot `・` and spaces are rejected.
    pub KatakanaOnly for str;
    rule(input) { KATAKANA_REGEX.is_match(input) }
    error(input) { ValidationError::new("katakana_only", "Must contain only full-width katakana") }
    fn katakana_only();
}
