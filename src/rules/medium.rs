//! Medium rule - exactly two of the three character classes are present.

use crate::classes::CharacterClassSignals;

/// Checks if the value contains characters from exactly two classes.
pub fn is_medium(value: &str) -> bool {
    let CharacterClassSignals {
        has_letters,
        has_symbols,
        has_digits,
    } = CharacterClassSignals::from_value(value);

    let letters_symbols = has_letters && has_symbols && !has_digits;
    let letters_digits = has_letters && !has_symbols && has_digits;
    let digits_symbols = !has_letters && has_symbols && has_digits;

    // second clause is unreachable once the first holds
    (letters_symbols || letters_digits || digits_symbols)
        && !(letters_symbols && letters_digits && digits_symbols)
}
