//! Analysis orchestration - classification, breach lookup, tier merge.

use std::panic::{AssertUnwindSafe, catch_unwind};

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachChecker, BreachError};
use crate::classifier::classify;
use crate::report::{AnalysisReport, BreachStatus, Classification, Strength};

/// Derives the strength tier. First matching rule wins.
///
/// Only a confirmed positive breach count forces `Compromised`; a lookup
/// that failed or was never attempted neither upgrades nor downgrades the
/// tier, and the report surfaces that separately via `breach_check_success`.
pub fn strength_tier(classification: &Classification, breach: &BreachStatus) -> Strength {
    if matches!(breach, BreachStatus::Checked(count) if *count > 0) {
        Strength::Compromised
    } else if classification.dictionary_word || classification.length < 4 {
        Strength::Weak
    } else if classification.length >= 12
        && classification.diversity_score >= 3
        && classification.entropy_bits >= 50.0
    {
        Strength::VeryStrong
    } else if classification.length >= 8
        && classification.diversity_score >= 3
        && classification.entropy_bits >= 35.0
    {
        Strength::Strong
    } else if classification.length >= 6
        && classification.diversity_score >= 2
        && classification.entropy_bits >= 25.0
    {
        Strength::Medium
    } else {
        Strength::Weak
    }
}

/// Merges classification and breach outcome into the externally visible
/// report.
pub fn merge_report(classification: &Classification, breach: &BreachStatus) -> AnalysisReport {
    AnalysisReport {
        length: classification.length,
        entropy: classification.entropy_bits,
        diversity_score: classification.diversity_score,
        has_lower: classification.has_lower,
        has_upper: classification.has_upper,
        has_digit: classification.has_digit,
        has_symbol: classification.has_symbol,
        dictionary_word: classification.dictionary_word,
        crack_time_years: classification.crack_time_years,
        strength: strength_tier(classification, breach),
        breach_check_success: breach.succeeded(),
        pwned_count: breach.pwned_count(),
    }
}

/// Runs the full analysis: classification plus a single breach lookup.
///
/// The lookup is bounded by the checker's timeout and, when given, by
/// `token`; cancellation turns the breach side into `Unavailable` while the
/// classification side of the report is still complete. A classification
/// fault degrades into a zeroed report with tier `Unknown` instead of
/// propagating.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `checker` - Breach lookup client
/// * `token` - Optional cancellation token for the lookup
pub async fn analyze_password(
    password: &SecretString,
    checker: &BreachChecker,
    token: Option<CancellationToken>,
) -> AnalysisReport {
    let classification = match catch_unwind(AssertUnwindSafe(|| classify(password))) {
        Ok(classification) => classification,
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::error!("classification fault, returning degraded report");
            return AnalysisReport::degraded(password.expose_secret().chars().count());
        }
    };

    let breach = match &token {
        Some(token) if token.is_cancelled() => {
            BreachStatus::Unavailable(BreachError::Cancelled.to_string())
        }
        Some(token) => tokio::select! {
            _ = token.cancelled() => BreachStatus::Unavailable(BreachError::Cancelled.to_string()),
            status = checker.check(password) => status,
        },
        None => checker.check(password).await,
    };

    merge_report(&classification, &breach)
}

/// Channel variant that sends the report to the caller.
pub async fn analyze_password_tx(
    password: &SecretString,
    checker: &BreachChecker,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let report = analyze_password(password, checker, Some(token)).await;

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send analysis report: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn classification(length: usize, diversity: u8, entropy: f64, dictionary: bool) -> Classification {
        Classification {
            length,
            has_lower: diversity >= 1,
            has_upper: diversity >= 2,
            has_digit: diversity >= 3,
            has_symbol: diversity >= 4,
            diversity_score: diversity,
            entropy_bits: entropy,
            dictionary_word: dictionary,
            crack_time_years: 0.0,
        }
    }

    #[test]
    fn test_tier_compromised_outranks_everything() {
        let strong = classification(14, 4, 91.0, false);
        let tier = strength_tier(&strong, &BreachStatus::Checked(5000));
        assert_eq!(tier, Strength::Compromised);
    }

    #[test]
    fn test_tier_checked_zero_is_not_compromised() {
        let strong = classification(14, 4, 91.0, false);
        let tier = strength_tier(&strong, &BreachStatus::Checked(0));
        assert_eq!(tier, Strength::VeryStrong);
    }

    #[test]
    fn test_tier_dictionary_word_is_weak() {
        let c = classification(16, 4, 100.0, true);
        assert_eq!(strength_tier(&c, &BreachStatus::Checked(0)), Strength::Weak);
    }

    #[test]
    fn test_tier_short_password_is_weak() {
        let c = classification(3, 4, 60.0, false);
        assert_eq!(strength_tier(&c, &BreachStatus::NotChecked), Strength::Weak);
    }

    #[test]
    fn test_tier_very_strong_boundary() {
        let c = classification(12, 3, 50.0, false);
        assert_eq!(strength_tier(&c, &BreachStatus::NotChecked), Strength::VeryStrong);
    }

    #[test]
    fn test_tier_strong_boundary() {
        let c = classification(8, 3, 35.0, false);
        assert_eq!(strength_tier(&c, &BreachStatus::NotChecked), Strength::Strong);
    }

    #[test]
    fn test_tier_medium_boundary() {
        let c = classification(6, 2, 25.0, false);
        assert_eq!(strength_tier(&c, &BreachStatus::NotChecked), Strength::Medium);
    }

    #[test]
    fn test_tier_low_diversity_falls_through() {
        // Long and high-entropy but only two classes: rules 3 and 4 miss.
        let c = classification(12, 2, 50.0, false);
        assert_eq!(strength_tier(&c, &BreachStatus::NotChecked), Strength::Medium);
    }

    #[test]
    fn test_tier_entropy_below_strong_threshold() {
        let c = classification(8, 3, 34.9, false);
        assert_eq!(strength_tier(&c, &BreachStatus::NotChecked), Strength::Medium);
    }

    #[test]
    fn test_tier_below_medium_is_weak() {
        let c = classification(5, 2, 30.0, false);
        assert_eq!(strength_tier(&c, &BreachStatus::NotChecked), Strength::Weak);
    }

    #[test]
    fn test_tier_ignores_lookup_failure() {
        let c = classification(14, 4, 91.0, false);
        let failed = BreachStatus::Unavailable("timeout".into());
        assert_eq!(strength_tier(&c, &failed), strength_tier(&c, &BreachStatus::NotChecked));
        assert_eq!(strength_tier(&c, &failed), Strength::VeryStrong);
    }

    #[test]
    fn test_merge_copies_classification_fields() {
        let c = classification(8, 3, 40.0, false);
        let report = merge_report(&c, &BreachStatus::Checked(0));
        assert_eq!(report.length, 8);
        assert_eq!(report.diversity_score, 3);
        assert_eq!(report.entropy, 40.0);
        assert!(report.breach_check_success);
        assert_eq!(report.pwned_count, Some(0));
        assert_eq!(report.strength, Strength::Strong);
    }

    #[test]
    fn test_merge_failed_lookup_never_reports_count() {
        let c = classification(8, 3, 40.0, false);
        let report = merge_report(&c, &BreachStatus::Unavailable("connect error".into()));
        assert!(!report.breach_check_success);
        assert_eq!(report.pwned_count, None);
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    #[serial]
    async fn test_analyze_with_cancelled_token() {
        crate::wordlist::reset_wordlist_for_testing();
        let token = CancellationToken::new();
        token.cancel();

        // The cancelled token short-circuits before any request is made.
        let checker = BreachChecker::new();
        let report = analyze_password(&secret("Tr0ub4dor&9xyz"), &checker, Some(token)).await;

        assert_eq!(report.strength, Strength::VeryStrong);
        assert_eq!(report.length, 14);
        assert!(!report.breach_check_success);
        assert_eq!(report.pwned_count, None);
    }

    #[tokio::test]
    #[serial]
    async fn test_analyze_tx_delivers_report() {
        crate::wordlist::reset_wordlist_for_testing();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let checker = BreachChecker::new();
        analyze_password_tx(&secret("TestPass123!"), &checker, token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.length, 12);
        assert!(!report.breach_check_success);
    }
}
