//! Fuzzy name matcher
//!
//! Similarity is the upper bound on the longest-common-subsequence ratio:
//! `2·M / T`, where `M` counts the characters the two names share as
//! multisets and `T` is their combined length. Order is ignored, so the
//! ratio is cheap enough for a full cross product.

use std::collections::HashMap;

use depdiff_domain::ports::NameMatcher;
use depdiff_domain::value_objects::{CompareResult, FuzzyThresholds};

/// Multiset similarity of two strings in `[0, 1]`
///
/// Two empty strings are identical (`1.0`).
pub fn quick_ratio(lhs: &str, rhs: &str) -> f64 {
    let mut available: HashMap<char, usize> = HashMap::new();
    for c in rhs.chars() {
        *available.entry(c).or_insert(0) += 1;
    }

    let mut matches = 0usize;
    for c in lhs.chars() {
        if let Some(count) = available.get_mut(&c).filter(|count| **count > 0) {
            *count -= 1;
            matches += 1;
        }
    }

    let total = lhs.chars().count() + rhs.chars().count();
    if total == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = (2 * matches) as f64 / total as f64;
    ratio
}

/// Classifies names by [`quick_ratio`] against [`FuzzyThresholds`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyNameMatcher {
    thresholds: FuzzyThresholds,
}

impl FuzzyNameMatcher {
    /// Create a matcher with the given thresholds
    pub fn new(thresholds: FuzzyThresholds) -> Self {
        Self { thresholds }
    }
}

impl NameMatcher for FuzzyNameMatcher {
    fn name(&self) -> &str {
        "fuzzy_name"
    }

    fn match_names(&self, lhs: &str, rhs: &str) -> CompareResult {
        self.thresholds.classify(quick_ratio(lhs, rhs))
    }
}
