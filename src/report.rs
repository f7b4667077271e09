//! Analysis result types
//!
//! The report is the only externally observable artifact of an analysis;
//! nothing in here is mutated after construction.

use serde::{Serialize, Serializer};

/// Character-class and entropy profile of a password.
///
/// Produced by [`crate::classify`]; carries full-precision values. Rounding
/// only happens when an [`AnalysisReport`] is serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// Count of character classes present, 0-4.
    pub diversity_score: u8,
    pub entropy_bits: f64,
    pub dictionary_word: bool,
    pub crack_time_years: f64,
}

/// Outcome of the breach-corpus lookup.
///
/// `Unavailable` and `Checked(0)` are distinct on purpose: a lookup that
/// could not complete must never be reported as "not breached".
#[derive(Debug, Clone, PartialEq)]
pub enum BreachStatus {
    /// No lookup was attempted.
    NotChecked,
    /// Lookup completed; the password appeared this many times in known
    /// breaches (0 means confirmed absent).
    Checked(u64),
    /// Lookup could not be completed; carries the failure reason.
    Unavailable(String),
}

impl BreachStatus {
    /// `true` only when the lookup actually completed.
    pub fn succeeded(&self) -> bool {
        matches!(self, BreachStatus::Checked(_))
    }

    /// The breach count, when known.
    pub fn pwned_count(&self) -> Option<u64> {
        match self {
            BreachStatus::Checked(count) => Some(*count),
            _ => None,
        }
    }
}

/// Strength tier, ordered weakest to strongest.
///
/// `Compromised` outranks every other tier regardless of entropy or length.
/// `Unknown` only appears on degraded reports and ranks below `Weak`: an
/// unevaluated password never outranks an evaluated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Unknown,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    Compromised,
}

/// The merged analysis result, serialized as the API response body.
///
/// `entropy` is rounded to 2 decimals and `crack_time_years` to 6 on
/// serialization; `pwned_count` is omitted unless the breach check completed.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub length: usize,
    #[serde(serialize_with = "two_decimals")]
    pub entropy: f64,
    pub diversity_score: u8,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub dictionary_word: bool,
    #[serde(serialize_with = "six_decimals")]
    pub crack_time_years: f64,
    pub strength: Strength,
    pub breach_check_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwned_count: Option<u64>,
}

impl AnalysisReport {
    /// Fallback report for an unexpected classification failure.
    ///
    /// Everything except the length is zeroed and the tier is `Unknown`.
    pub fn degraded(length: usize) -> Self {
        Self {
            length,
            entropy: 0.0,
            diversity_score: 0,
            has_lower: false,
            has_upper: false,
            has_digit: false,
            has_symbol: false,
            dictionary_word: false,
            crack_time_years: 0.0,
            strength: Strength::Unknown,
            breach_check_success: false,
            pwned_count: None,
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    // Values near f64::MAX would scale to infinity; leave them as-is.
    if scaled.is_finite() { scaled.round() / factor } else { value }
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 2))
}

fn six_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 6))
}
