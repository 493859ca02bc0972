//! Name Matchers
//!
//! Name-level halves of the comparators. Each matcher sees two qualified names
//! and nothing else; family compatibility is decided before it is called.
//!
//! | Matcher | Decision |
//! |---------|----------|
//! | [`FilePathMatcher`] | Positional token equality over path segments |
//! | [`ExactNameMatcher`] | String equality, optionally skipping a left prefix |
//! | [`FuzzyNameMatcher`] | Character-multiset similarity against thresholds |
//! | [`GenericStrippingMatcher`] | Segment equality after dropping generic arguments |

pub mod exact_name;
pub mod file_path;
pub mod fuzzy_name;
pub mod generic;

pub use exact_name::ExactNameMatcher;
pub use file_path::{FilePathMatcher, TokenOrder, path_tokens};
pub use fuzzy_name::{FuzzyNameMatcher, quick_ratio};
pub use generic::{GenericStrippingMatcher, generic_tokens, strip_generics};
