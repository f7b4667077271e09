//! Brute-force time-to-crack estimation.
//!
//! This deliberately uses a different charset model than the entropy
//! estimate: the base space is always 26 (lowercase or unknown) and
//! `has_lower` adds nothing on top of it. The tier thresholds were tuned
//! against this exact pair of formulas, so the two models stay divergent.

use super::CharacterClasses;

const GUESSES_PER_SECOND: f64 = 1e9;
const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 24.0 * 365.0;

/// Average-case brute-force search time in years, assuming a uniform
/// distribution over the assumed keyspace and a fixed guess rate.
///
/// Zero for empty input. Long passwords push `f64` past its range; the
/// result is capped at `f64::MAX` rather than wrapping or going infinite.
pub fn crack_time_years(length: usize, classes: &CharacterClasses) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let mut charset = 26.0_f64;
    if classes.has_upper {
        charset += 26.0;
    }
    if classes.has_digit {
        charset += 10.0;
    }
    if classes.has_symbol {
        charset += 32.0;
    }

    // Average case searches half the keyspace.
    let combinations = charset.powf(length as f64) / 2.0;
    let years = combinations / GUESSES_PER_SECOND / SECONDS_PER_YEAR;
    if years.is_finite() { years } else { f64::MAX }
}
