//! Exact name matcher

use depdiff_domain::ports::NameMatcher;
use depdiff_domain::value_objects::CompareResult;

/// Equal when both names are identical
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactNameMatcher {
    skip_left_chars: usize,
}

impl ExactNameMatcher {
    /// Plain string equality
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore the first `count` characters of the left name
    pub fn skipping_left(count: usize) -> Self {
        Self {
            skip_left_chars: count,
        }
    }
}

impl NameMatcher for ExactNameMatcher {
    fn name(&self) -> &str {
        "exact_name"
    }

    fn match_names(&self, lhs: &str, rhs: &str) -> CompareResult {
        let lhs = match lhs.char_indices().nth(self.skip_left_chars) {
            Some((offset, _)) => &lhs[offset..],
            None => "",
        };
        if lhs == rhs {
            CompareResult::Equal
        } else {
            CompareResult::NotEqual
        }
    }
}
