//! Password classifier - pure character-class and entropy analysis.

use secrecy::{ExposeSecret, SecretString};

use crate::metrics::{CharacterClasses, crack_time_years, entropy_bits};
use crate::report::Classification;
use crate::wordlist::contains_weak_word;

/// Classifies a password: length, character-class flags, entropy estimate,
/// weak-word flag and crack-time estimate.
///
/// Pure and infallible: no I/O, and empty input yields all-zero fields.
///
/// # Arguments
/// * `password` - The password to classify
///
/// # Returns
/// A `Classification` with full-precision values.
pub fn classify(password: &SecretString) -> Classification {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    let classes = CharacterClasses::scan(pwd);

    Classification {
        length,
        has_lower: classes.has_lower,
        has_upper: classes.has_upper,
        has_digit: classes.has_digit,
        has_symbol: classes.has_symbol,
        diversity_score: classes.diversity_score(),
        entropy_bits: entropy_bits(pwd, &classes),
        dictionary_word: contains_weak_word(pwd),
        crack_time_years: crack_time_years(length, &classes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn setup_builtin_wordlist() {
        crate::wordlist::reset_wordlist_for_testing();
    }

    #[test]
    #[serial]
    fn test_classify_common_word() {
        setup_builtin_wordlist();
        let classification = classify(&secret("password"));

        assert_eq!(classification.length, 8);
        assert!(classification.has_lower);
        assert!(!classification.has_upper);
        assert!(!classification.has_digit);
        assert!(!classification.has_symbol);
        assert_eq!(classification.diversity_score, 1);
        assert!(classification.dictionary_word);
        assert!((classification.entropy_bits - 37.6035).abs() < 0.001);
    }

    #[test]
    #[serial]
    fn test_classify_empty() {
        setup_builtin_wordlist();
        let classification = classify(&secret(""));

        assert_eq!(classification.length, 0);
        assert_eq!(classification.diversity_score, 0);
        assert_eq!(classification.entropy_bits, 0.0);
        assert_eq!(classification.crack_time_years, 0.0);
        assert!(!classification.dictionary_word);
    }

    #[test]
    #[serial]
    fn test_classify_all_classes() {
        setup_builtin_wordlist();
        let classification = classify(&secret("Tr0ub4dor&9xyz"));

        assert_eq!(classification.length, 14);
        assert_eq!(classification.diversity_score, 4);
        assert!(!classification.dictionary_word);
        assert!(classification.entropy_bits >= 50.0);
        assert!(classification.crack_time_years > 1.0);
    }

    #[test]
    #[serial]
    fn test_length_counts_characters_not_bytes() {
        setup_builtin_wordlist();
        let classification = classify(&secret("héllo"));
        assert_eq!(classification.length, 5);
    }

    #[test]
    #[serial]
    fn test_diversity_equals_flag_count() {
        setup_builtin_wordlist();
        for pwd in ["", "abc", "Abc", "Abc1", "Abc1!", "1234", "  "] {
            let c = classify(&secret(pwd));
            let flags = [c.has_lower, c.has_upper, c.has_digit, c.has_symbol]
                .iter()
                .filter(|&&b| b)
                .count() as u8;
            assert_eq!(c.diversity_score, flags, "diversity mismatch for {pwd:?}");
        }
    }

    #[test]
    #[serial]
    fn test_classify_is_idempotent() {
        setup_builtin_wordlist();
        let password = secret("S0me+Passphrase");
        assert_eq!(classify(&password), classify(&password));
    }

    #[test]
    #[serial]
    fn test_weak_word_inside_longer_password() {
        setup_builtin_wordlist();
        let classification = classify(&secret("MyAdmin2024!"));
        assert!(classification.dictionary_word);
    }
}
