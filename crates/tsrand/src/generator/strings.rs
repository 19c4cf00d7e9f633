use crate::charset::{ALPHA, LOWERCASE, NORMAL, NUMERIC, UPPERCASE, VISIBLE};
use crate::{Charset, EntropySource, FallbackSource, Generator};

impl<E, F> Generator<E, F>
where
    E: EntropySource,
    F: FallbackSource,
{
    /// Builds a string of `length` characters drawn from `charset`.
    ///
    /// Each position is an independent uniform pick, so characters may
    /// repeat. Returns an empty string if `length` is zero or the charset is
    /// empty.
    ///
    /// One scratch value is held for the whole string.
    pub fn string_from(&self, charset: &Charset, length: usize) -> String {
        if length == 0 || charset.is_empty() {
            return String::new();
        }

        let chars = charset.as_chars();
        let size = chars.len() as u128;
        let mut scratch = self.pool.acquire();
        (0..length)
            .map(|_| {
                #[allow(clippy::cast_possible_truncation)]
                let index = self.draw_in(&mut scratch, size) as usize;
                chars[index]
            })
            .collect()
    }

    /// Builds a string of `length` characters from a caller-supplied
    /// alphabet.
    ///
    /// The alphabet is split into characters, not bytes, so multi-byte
    /// alphabets work as expected.
    ///
    /// # Example
    /// ```
    /// use tsrand::Generator;
    ///
    /// let generator = Generator::new();
    /// let s = generator.custom_string("αβγδ", 6);
    /// assert_eq!(s.chars().count(), 6);
    /// assert!(s.chars().all(|c| "αβγδ".contains(c)));
    ///
    /// assert_eq!(generator.custom_string("", 6), "");
    /// assert_eq!(generator.custom_string("abc", 0), "");
    /// ```
    pub fn custom_string(&self, alphabet: &str, length: usize) -> String {
        if length == 0 {
            return String::new();
        }
        self.string_from(&Charset::new(alphabet), length)
    }

    /// Builds an alphanumeric string from [`NORMAL_LETTERS`].
    ///
    /// [`NORMAL_LETTERS`]: crate::NORMAL_LETTERS
    pub fn string(&self, length: usize) -> String {
        self.string_from(&NORMAL, length)
    }

    /// Builds a string from [`VISIBLE_LETTERS`], which leaves out characters
    /// that are easy to misread.
    ///
    /// [`VISIBLE_LETTERS`]: crate::VISIBLE_LETTERS
    pub fn visible_string(&self, length: usize) -> String {
        self.string_from(&VISIBLE, length)
    }

    /// Builds a string of ASCII letters.
    pub fn alpha_string(&self, length: usize) -> String {
        self.string_from(&ALPHA, length)
    }

    /// Builds a string of ASCII digits.
    pub fn numeric_string(&self, length: usize) -> String {
        self.string_from(&NUMERIC, length)
    }

    /// Builds a string of lowercase ASCII letters.
    pub fn lowercase_string(&self, length: usize) -> String {
        self.string_from(&LOWERCASE, length)
    }

    /// Builds a string of uppercase ASCII letters.
    pub fn uppercase_string(&self, length: usize) -> String {
        self.string_from(&UPPERCASE, length)
    }
}
