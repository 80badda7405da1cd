//! Character class patterns.
//!
//! Two distinct pattern sets are kept here. The anchored set answers
//! "does the whole string belong to one class", the presence set answers
//! "does the string contain at least one character of a class". Both use
//! the same class definitions:
//!
//! - letters: ASCII `a-z` and `A-Z`
//! - digits: decimal `0-9`
//! - symbols: anything that is neither a word character (`a-zA-Z0-9_`)
//!   nor whitespace
//!
//! Whitespace is the fixed set in `WHITESPACE`, not Unicode `White_Space`:
//! it includes the byte order mark U+FEFF and excludes U+0085 (NEL).

use regex::Regex;
use std::sync::LazyLock;

static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("Invalid letters regex"));

static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid digits regex"));

/// Whitespace characters, as a character class body: tab, line feed,
/// vertical tab, form feed, carriage return, the space separators, line
/// and paragraph separators, and the byte order mark.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

static SYMBOLS_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[^a-zA-Z0-9_{WHITESPACE}]+$")).expect("Invalid symbols regex")
});

static LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]").expect("Invalid letter regex"));

static SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[^a-zA-Z0-9_{WHITESPACE}]")).expect("Invalid symbol regex")
});

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("Invalid digit regex"));

/// True when every character is an ASCII letter. False for `""`.
pub fn is_all_letters(value: &str) -> bool {
    LETTERS_ONLY.is_match(value)
}

/// True when every character is a decimal digit. False for `""`.
pub fn is_all_digits(value: &str) -> bool {
    DIGITS_ONLY.is_match(value)
}

/// True when every character is a symbol. False for `""`.
pub fn is_all_symbols(value: &str) -> bool {
    SYMBOLS_ONLY.is_match(value)
}

/// Presence of each character class anywhere in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClassSignals {
    pub has_letters: bool,
    pub has_symbols: bool,
    pub has_digits: bool,
}

impl CharacterClassSignals {
    pub fn from_value(value: &str) -> Self {
        Self {
            has_letters: LETTER.is_match(value),
            has_symbols: SYMBOL.is_match(value),
            has_digits: DIGIT.is_match(value),
        }
    }

    /// Number of classes present, 0 to 3.
    pub fn count(&self) -> usize {
        [self.has_letters, self.has_symbols, self.has_digits]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}
