//! Input normalization applied before classification.

/// Strips a single trailing space from `raw`.
///
/// Only the last character is inspected, so `"pass  "` becomes `"pass "`.
/// Other whitespace is left alone.
pub fn normalize(raw: &str) -> String {
    raw.strip_suffix(' ').unwrap_or(raw).to_string()
}
