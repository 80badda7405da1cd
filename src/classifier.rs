//! Password strength classifier - ordered rule evaluation.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::rules::{Rule, is_easy, is_medium, is_strong};
use crate::strength::Strength;

/// Rules in evaluation order. A value matching none of them is `Empty`.
const RULES: [(Strength, Rule); 3] = [
    (Strength::Easy, is_easy),
    (Strength::Medium, is_medium),
    (Strength::Strong, is_strong),
];

/// Classifies a value by the character classes it contains.
///
/// The function is total: the empty string, whitespace-only strings and
/// strings with no letters, digits or symbols at all yield `Empty`.
pub fn classify(value: &str) -> Strength {
    RULES
        .iter()
        .find(|(_, rule)| rule(value))
        .map(|(strength, _)| *strength)
        .unwrap_or(Strength::Empty)
}

/// Same as [`classify`], for a password held as a secret.
pub fn classify_secret(password: &SecretString) -> Strength {
    classify(password.expose_secret())
}

/// Classifies `value` and sends the verdict over `tx`.
#[cfg(feature = "async")]
pub async fn classify_tx(value: String, tx: mpsc::Sender<Strength>) {
    let strength = classify(&value);

    if let Err(_e) = tx.send(strength).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{CharacterClassSignals, is_all_digits, is_all_letters, is_all_symbols};
    use proptest::prelude::*;

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(""), Strength::Empty);
    }

    #[test]
    fn test_classify_easy() {
        assert_eq!(classify("abc"), Strength::Easy);
        assert_eq!(classify("123"), Strength::Easy);
        assert_eq!(classify("!@#"), Strength::Easy);
    }

    #[test]
    fn test_classify_medium() {
        assert_eq!(classify("abc123"), Strength::Medium);
        assert_eq!(classify("abc!@#"), Strength::Medium);
        assert_eq!(classify("123!@#"), Strength::Medium);
    }

    #[test]
    fn test_classify_strong() {
        assert_eq!(classify("abc123!@#"), Strength::Strong);
        assert_eq!(classify("MyP@ssw0rd!"), Strength::Strong);
    }

    #[test]
    fn test_classify_whitespace_only() {
        assert_eq!(classify("   "), Strength::Empty);
        assert_eq!(classify("\t\n"), Strength::Empty);
    }

    #[test]
    fn test_classify_underscore_only() {
        // underscore is a word character but neither letter nor digit
        assert_eq!(classify("___"), Strength::Empty);
    }

    #[test]
    fn test_classify_single_class_with_spaces() {
        // fails the anchored Easy match and has only one presence signal
        assert_eq!(classify("abc def"), Strength::Empty);
    }

    #[test]
    fn test_classify_unicode() {
        assert_eq!(classify("🔒🔑"), Strength::Easy);
        assert_eq!(classify("héllo"), Strength::Medium);
        assert_eq!(classify("héllo1"), Strength::Strong);
    }

    #[test]
    fn test_classify_byte_order_mark_is_whitespace() {
        assert_eq!(classify("\u{FEFF}"), Strength::Empty);
        assert_eq!(classify("abc\u{FEFF}"), Strength::Empty);
    }

    #[test]
    fn test_classify_next_line_is_a_symbol() {
        assert_eq!(classify("\u{0085}"), Strength::Easy);
        assert_eq!(classify("abc\u{0085}"), Strength::Medium);
    }

    #[test]
    fn test_classify_secret() {
        let pwd = SecretString::new("abc123!@#".to_string().into());
        assert_eq!(classify_secret(&pwd), Strength::Strong);
    }

    proptest! {
        #[test]
        fn prop_classify_is_pure(s in ".*") {
            prop_assert_eq!(classify(&s), classify(&s));
        }

        #[test]
        fn prop_non_empty_class_content_is_never_empty(s in "[a-zA-Z0-9!@#$%]{1,32}") {
            prop_assert_ne!(classify(&s), Strength::Empty);
        }

        #[test]
        fn prop_whitespace_only_is_empty(s in "[ \t\n]*") {
            prop_assert_eq!(classify(&s), Strength::Empty);
        }

        #[test]
        fn prop_empty_iff_not_single_class_and_at_most_one_signal(
            s in "[ab1_!@ \t\u{FEFF}\u{85}é]{0,12}",
        ) {
            let single_class = is_all_letters(&s) || is_all_digits(&s) || is_all_symbols(&s);
            let signals = CharacterClassSignals::from_value(&s).count();
            prop_assert_eq!(
                classify(&s) == Strength::Empty,
                !single_class && signals <= 1
            );
        }

        #[test]
        fn prop_all_three_classes_is_strong(
            a in "[a-zA-Z]{1,8}",
            d in "[0-9]{1,8}",
            y in "[!@#$%^&*]{1,8}",
        ) {
            let value = format!("{a}{d}{y}");
            prop_assert_eq!(classify(&value), Strength::Strong);
        }
    }
}
