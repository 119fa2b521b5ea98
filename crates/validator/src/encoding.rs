//! Text encoding used for multibyte length counting
//!
//! Length rules count logical characters, never storage bytes. A `&str` is
//! already decoded, so its count does not depend on any setting. Raw bytes
//! coming from a legacy form or file (EUC-JP, Shift_JIS, ...) are decoded
//! with the [`TextEncoding`] a [`RuleSet`](crate::RuleSet) was built with.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;

use crate::config::ConfigError;

/// A resolved text encoding.
///
/// Labels follow the WHATWG Encoding Standard, so `"UTF-8"`, `"utf8"`,
/// `"EUC-JP"`, `"Shift_JIS"`, `"sjis"` and `"ISO-2022-JP"` all resolve;
/// matching is case-insensitive and ignores surrounding whitespace.
///
/// # Examples
///
/// ```rust
/// use kotoba_validator::TextEncoding;
///
/// let sjis = TextEncoding::for_label("Shift_JIS").unwrap();
/// // "カナ" in Shift_JIS is four bytes, two characters.
/// assert_eq!(sjis.char_count(&[0x83, 0x4A, 0x83, 0x69]), 2);
///
/// assert!(TextEncoding::for_label("klingon").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextEncoding {
    inner: &'static Encoding,
}

impl TextEncoding {
    /// UTF-8, the default.
    #[must_use]
    pub fn utf8() -> Self {
        Self {
            inner: encoding_rs::UTF_8,
        }
    }

    /// Resolves an encoding label.
    ///
    /// Labels that only map to the WHATWG "replacement" encoding are
    /// rejected along with unknown ones.
    pub fn for_label(label: &str) -> Result<Self, ConfigError> {
        Encoding::for_label_no_replacement(label.trim().as_bytes())
            .map(|inner| Self { inner })
            .ok_or_else(|| ConfigError::UnknownEncoding(label.to_owned()))
    }

    /// Resolves an optional label, treating an absent or blank label as UTF-8.
    pub fn resolve(label: Option<&str>) -> Result<Self, ConfigError> {
        match label.map(str::trim) {
            None | Some("") => Ok(Self::utf8()),
            Some(label) => Self::for_label(label),
        }
    }

    /// Canonical name of the encoding, e.g. `"Shift_JIS"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Decodes `bytes` without BOM sniffing.
    ///
    /// Malformed sequences become U+FFFD.
    #[must_use]
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        self.inner.decode_without_bom_handling(bytes).0
    }

    /// Number of characters in `bytes` under this encoding.
    ///
    /// Each malformed sequence counts as one character.
    #[must_use]
    pub fn char_count(&self, bytes: &[u8]) -> usize {
        self.decode(bytes).chars().count()
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of characters in an already-decoded string.
#[inline]
pub(crate) fn char_count(input: &str) -> usize {
    input.chars().count()
}
