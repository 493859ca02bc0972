//! File path matcher

use depdiff_domain::ports::NameMatcher;
use depdiff_domain::value_objects::CompareResult;

use crate::constants::PATH_SEPARATORS;

/// Direction in which path tokens are aligned before the positional zip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenOrder {
    /// Align on the file name: `src/a/Foo.java` and `a/Foo.java` agree
    #[default]
    LeafFirst,
    /// Align on the first segment
    RootFirst,
}

/// Split a path or dotted name into its non-empty segments
pub fn path_tokens(name: &str) -> Vec<&str> {
    name.split(PATH_SEPARATORS)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Compares two file names token by token
///
/// Only the overlap of the two token sequences is compared, so a relative path
/// matches the absolute path it is a suffix of (with [`TokenOrder::LeafFirst`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePathMatcher {
    order: TokenOrder,
}

impl FilePathMatcher {
    /// Create a matcher aligning tokens in `order`
    pub fn new(order: TokenOrder) -> Self {
        Self { order }
    }
}

impl NameMatcher for FilePathMatcher {
    fn name(&self) -> &str {
        "file_path"
    }

    fn match_names(&self, lhs: &str, rhs: &str) -> CompareResult {
        let mut lhs = path_tokens(lhs);
        let mut rhs = path_tokens(rhs);
        if lhs.is_empty() || rhs.is_empty() {
            return CompareResult::NotEqual;
        }
        if self.order == TokenOrder::LeafFirst {
            lhs.reverse();
            rhs.reverse();
        }

        if lhs.iter().zip(rhs.iter()).all(|(l, r)| l == r) {
            CompareResult::Equal
        } else {
            CompareResult::NotEqual
        }
    }
}
