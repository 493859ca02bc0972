//! Generic-stripping matcher
//!
//! Type names differ between tools mostly in how they print generic
//! arguments. Dropping everything between `<` and `>` before splitting on `.`
//! makes `java.util.List<String>` and `java.util.List` comparable.

use depdiff_domain::ports::NameMatcher;
use depdiff_domain::value_objects::CompareResult;

use crate::constants::{GENERIC_CLOSE, GENERIC_OPEN, QUALIFIED_NAME_SEPARATOR};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    DisposeGeneric,
}

/// Remove generic argument lists from `name`
///
/// The scan has two states and no depth counter: a `>` always resumes copying,
/// so after nested arguments the text following the first inner `>` is kept.
pub fn strip_generics(name: &str) -> String {
    let mut state = ScanState::Scanning;
    let mut stripped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            GENERIC_OPEN => state = ScanState::DisposeGeneric,
            GENERIC_CLOSE => state = ScanState::Scanning,
            _ if state == ScanState::Scanning => stripped.push(c),
            _ => {}
        }
    }
    stripped
}

/// Non-empty qualified-name segments of `name` with generics removed
pub fn generic_tokens(name: &str) -> Vec<String> {
    strip_generics(name)
        .split(QUALIFIED_NAME_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Equal when both names have the same segments once generics are dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericStrippingMatcher;

impl NameMatcher for GenericStrippingMatcher {
    fn name(&self) -> &str {
        "generic_stripping"
    }

    fn match_names(&self, lhs: &str, rhs: &str) -> CompareResult {
        if generic_tokens(lhs) == generic_tokens(rhs) {
            CompareResult::Equal
        } else {
            CompareResult::NotEqual
        }
    }
}
