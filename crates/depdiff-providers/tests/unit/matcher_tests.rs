//! Tests for the name matchers

use depdiff_domain::ports::NameMatcher;
use depdiff_domain::value_objects::{CompareResult, FuzzyThresholds};
use depdiff_providers::matchers::{
    ExactNameMatcher, FilePathMatcher, FuzzyNameMatcher, GenericStrippingMatcher, TokenOrder,
    generic_tokens, path_tokens, quick_ratio, strip_generics,
};
use proptest::prelude::*;

#[cfg(test)]
mod file_path_tests {
    use super::*;

    #[test]
    fn test_tokens_split_on_every_separator() {
        assert_eq!(
            path_tokens("src\\main/java/Foo.java"),
            vec!["src", "main", "java", "Foo", "java"]
        );
        assert_eq!(path_tokens("//a..b/"), vec!["a", "b"]);
    }

    #[test]
    fn test_leaf_first_aligns_on_file_name() {
        let matcher = FilePathMatcher::new(TokenOrder::LeafFirst);
        assert_eq!(
            matcher.match_names("pkg.Foo.java", "/home/u/project/pkg/Foo.java"),
            CompareResult::Equal
        );
        assert_eq!(
            matcher.match_names("pkg.Bar.java", "project/pkg/Foo.java"),
            CompareResult::NotEqual
        );
    }

    #[test]
    fn test_root_first_aligns_on_first_segment() {
        let matcher = FilePathMatcher::new(TokenOrder::RootFirst);
        assert_eq!(matcher.match_names("a/b", "a/b/c.java"), CompareResult::Equal);
        assert_eq!(matcher.match_names("b/c.java", "a/b/c.java"), CompareResult::NotEqual);
    }

    #[test]
    fn test_empty_side_is_not_equal() {
        let matcher = FilePathMatcher::default();
        assert_eq!(matcher.match_names("", "a/b.java"), CompareResult::NotEqual);
        assert_eq!(matcher.match_names("a/b.java", "//"), CompareResult::NotEqual);
    }
}

#[cfg(test)]
mod exact_name_tests {
    use super::*;

    #[test]
    fn test_exact_equality() {
        let matcher = ExactNameMatcher::new();
        assert_eq!(matcher.match_names("pkg.Foo", "pkg.Foo"), CompareResult::Equal);
        assert_eq!(matcher.match_names("pkg.Foo", "pkg.foo"), CompareResult::NotEqual);
    }

    #[test]
    fn test_left_prefix_is_skipped() {
        let matcher = ExactNameMatcher::skipping_left(1);
        assert_eq!(matcher.match_names(".org.demo", "org.demo"), CompareResult::Equal);
        assert_eq!(matcher.match_names("org.demo", "org.demo"), CompareResult::NotEqual);
        assert_eq!(matcher.match_names("", ""), CompareResult::Equal);
    }
}

#[cfg(test)]
mod fuzzy_name_tests {
    use super::*;

    #[test]
    fn test_quick_ratio_counts_shared_characters() {
        assert!((quick_ratio("abcd", "abcd") - 1.0).abs() < f64::EPSILON);
        assert!((quick_ratio("abcd", "dcba") - 1.0).abs() < f64::EPSILON);
        assert!((quick_ratio("aab", "abb") - 2.0 * 2.0 / 6.0).abs() < 1e-12);
        assert!(quick_ratio("abc", "xyz").abs() < f64::EPSILON);
    }

    #[test]
    fn test_two_empty_names_are_identical() {
        assert!((quick_ratio("", "") - 1.0).abs() < f64::EPSILON);
        assert!(quick_ratio("", "a").abs() < f64::EPSILON);
    }

    #[test]
    fn test_thresholds_partition_the_ratio() {
        let matcher = FuzzyNameMatcher::new(FuzzyThresholds::default());
        // 20 vs 20 chars, 19 shared: ratio 0.95
        assert_eq!(
            matcher.match_names("abcdefghijklmnopqrsX", "abcdefghijklmnopqrsY"),
            CompareResult::Equal
        );
        // 10 vs 10 chars, 9 shared: ratio 0.90
        assert_eq!(matcher.match_names("abcdefghiX", "abcdefghiY"), CompareResult::MaybeEqual);
        // 10 vs 10 chars, 8 shared: ratio 0.80
        assert_eq!(matcher.match_names("abcdefghXY", "abcdefghZW"), CompareResult::NotEqual);
    }

    #[test]
    fn test_custom_thresholds() {
        let matcher = FuzzyNameMatcher::new(FuzzyThresholds {
            equal: 1.0,
            maybe: 0.5,
        });
        assert_eq!(matcher.match_names("ab", "ac"), CompareResult::MaybeEqual);
        assert_eq!(matcher.match_names("ab", "ba"), CompareResult::Equal);
    }

    proptest! {
        #[test]
        fn prop_quick_ratio_is_bounded_and_symmetric(a in "[a-e.]{0,12}", b in "[a-e.]{0,12}") {
            let forward = quick_ratio(&a, &b);
            let backward = quick_ratio(&b, &a);
            prop_assert!((0.0..=1.0).contains(&forward));
            prop_assert!((forward - backward).abs() < 1e-12);
        }

        #[test]
        fn prop_identical_names_are_equal(a in "[a-zA-Z.<>]{0,16}") {
            let matcher = FuzzyNameMatcher::default();
            prop_assert_eq!(matcher.match_names(&a, &a), CompareResult::Equal);
        }
    }
}

#[cfg(test)]
mod generic_tests {
    use super::*;

    #[test]
    fn test_generic_arguments_are_dropped() {
        assert_eq!(generic_tokens("List<String>"), vec!["List"]);
        assert_eq!(generic_tokens("a.b<X>.c"), vec!["a", "b", "c"]);
        assert_eq!(generic_tokens(".a..b."), vec!["a", "b"]);
    }

    #[test]
    fn test_scan_has_no_nesting_depth() {
        assert_eq!(strip_generics("Map<K, List<V>>"), "Map");
        assert_eq!(strip_generics("Map<List<V>, K>"), "Map, K");
    }

    #[test]
    fn test_matcher_compares_stripped_segments() {
        let matcher = GenericStrippingMatcher;
        assert_eq!(
            matcher.match_names("java.util.List<T>", "java.util.List"),
            CompareResult::Equal
        );
        assert_eq!(matcher.match_names("util.List", "java.util.List"), CompareResult::NotEqual);
        assert_eq!(matcher.match_names("a.B<X>", "a.C"), CompareResult::NotEqual);
    }
}
