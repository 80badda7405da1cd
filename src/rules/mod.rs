//! Strength rules
//!
//! Each rule decides whether a value qualifies for one strength verdict.
//! Rules are evaluated in order by the classifier; the first match wins.

mod easy;
mod medium;
mod strong;

pub use easy::is_easy;
pub use medium::is_medium;
pub use strong::is_strong;

/// A strength rule: `true` when the value qualifies.
pub type Rule = fn(&str) -> bool;
