//! Strong rule - letters, digits and symbols are all present.

use crate::classes::CharacterClassSignals;

/// Checks if the value contains at least one character of every class.
pub fn is_strong(value: &str) -> bool {
    CharacterClassSignals::from_value(value).count() == 3
}
