//! Character alphabets for random strings.
//!
//! An alphabet is decoded once into code points so that each position of a
//! generated string is one whole character, whatever its UTF-8 width.

use std::sync::LazyLock;

/// All alphanumeric characters: digits, lowercase and uppercase ASCII letters.
pub const NORMAL_LETTERS: &str = "1234567890abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alphanumerics that stay distinct in most fonts.
///
/// Drops `0`, `1`, `I`, `i`, `l`, `O` and `o`.
pub const VISIBLE_LETTERS: &str = "23456789abcdefghjkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Lowercase and uppercase ASCII letters.
pub const ALPHA_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits.
pub const NUMERIC_LETTERS: &str = "0123456789";

/// Lowercase ASCII letters.
pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase hexadecimal digits.
pub const HEX_LETTERS: &str = "0123456789abcdef";

pub(crate) static NORMAL: LazyLock<Charset> = LazyLock::new(|| Charset::new(NORMAL_LETTERS));
pub(crate) static VISIBLE: LazyLock<Charset> = LazyLock::new(|| Charset::new(VISIBLE_LETTERS));
pub(crate) static ALPHA: LazyLock<Charset> = LazyLock::new(|| Charset::new(ALPHA_LETTERS));
pub(crate) static NUMERIC: LazyLock<Charset> = LazyLock::new(|| Charset::new(NUMERIC_LETTERS));
pub(crate) static LOWERCASE: LazyLock<Charset> = LazyLock::new(|| Charset::new(LOWERCASE_LETTERS));
pub(crate) static UPPERCASE: LazyLock<Charset> = LazyLock::new(|| Charset::new(UPPERCASE_LETTERS));
pub(crate) static HEX: LazyLock<Charset> = LazyLock::new(|| Charset::new(HEX_LETTERS));

/// An ordered alphabet of characters, indexed by position.
///
/// Characters are stored as code points, never as bytes. Duplicates are kept
/// as given, so a character listed twice is drawn twice as often.
///
/// # Example
/// ```
/// use tsrand::Charset;
///
/// let charset = Charset::new("αβγ");
/// assert_eq!(charset.len(), 3);
/// assert_eq!(charset.get(1), Some('β'));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Decodes `alphabet` into its characters.
    #[must_use]
    pub fn new(alphabet: &str) -> Self {
        Self {
            chars: alphabet.chars().collect(),
        }
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the alphabet has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the character at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Returns the characters in order.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns `true` if `c` is part of the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl From<&str> for Charset {
    fn from(alphabet: &str) -> Self {
        Self::new(alphabet)
    }
}

impl FromIterator<char> for Charset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn preset_sizes() {
        assert_eq!(NORMAL.len(), 62);
        assert_eq!(VISIBLE.len(), 55);
        assert_eq!(ALPHA.len(), 52);
        assert_eq!(NUMERIC.len(), 10);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(HEX.len(), 16);
    }

    #[test]
    fn presets_have_distinct_characters() {
        for charset in [&*NORMAL, &*VISIBLE, &*ALPHA, &*NUMERIC, &*HEX] {
            let unique: HashSet<_> = charset.as_chars().iter().collect();
            assert_eq!(unique.len(), charset.len());
        }
    }

    #[test]
    fn visible_excludes_ambiguous() {
        for c in ['0', '1', 'I', 'l', 'O', 'o'] {
            assert!(!VISIBLE.contains(c), "{c} should be excluded");
        }
    }

    #[test]
    fn subsets_of_normal() {
        for charset in [&*VISIBLE, &*ALPHA, &*NUMERIC, &*LOWERCASE, &*UPPERCASE] {
            assert!(charset.as_chars().iter().all(|c| NORMAL.contains(*c)));
        }
    }

    #[test]
    fn multibyte_alphabet_is_indexed_by_character() {
        let charset = Charset::new("日本語🎲é");
        assert_eq!(charset.len(), 5);
        assert_eq!(charset.get(0), Some('日'));
        assert_eq!(charset.get(3), Some('🎲'));
        assert_eq!(charset.get(4), Some('é'));
        assert_eq!(charset.get(5), None);
    }

    #[test]
    fn empty_alphabet() {
        let charset = Charset::from("");
        assert!(charset.is_empty());
        assert_eq!(charset.get(0), None);
    }

    #[test]
    fn collects_from_chars() {
        let charset: Charset = ('a'..='e').collect();
        assert_eq!(charset.as_chars(), &['a', 'b', 'c', 'd', 'e']);
    }
}
