//! Easy rule - the whole value belongs to a single character class.

use crate::classes::{is_all_digits, is_all_letters, is_all_symbols};

/// Checks if the value is made of letters only, digits only or symbols only.
///
/// The empty string never qualifies.
pub fn is_easy(value: &str) -> bool {
    is_all_letters(value) || is_all_digits(value) || is_all_symbols(value)
}
