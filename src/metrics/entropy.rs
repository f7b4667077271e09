//! Entropy estimation over the inferred character space.

use std::collections::HashSet;

use super::CharacterClasses;

/// Size of the assumed character space given the classes present.
///
/// When no class matched (empty input) the count of distinct characters is
/// used instead.
fn charset_size(password: &str, classes: &CharacterClasses) -> usize {
    let mut size = 0;
    if classes.has_lower {
        size += 26;
    }
    if classes.has_upper {
        size += 26;
    }
    if classes.has_digit {
        size += 10;
    }
    if classes.has_symbol {
        size += 32;
    }
    if size == 0 {
        size = password.chars().collect::<HashSet<_>>().len();
    }
    size
}

/// Estimated entropy in bits: length x log2(|charset|).
///
/// Zero for empty input; strictly positive otherwise. For a fixed set of
/// classes this grows linearly with length.
pub fn entropy_bits(password: &str, classes: &CharacterClasses) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 0.0;
    }
    let size = charset_size(password, classes);
    if size == 0 {
        return 0.0;
    }
    length as f64 * (size as f64).log2()
}
