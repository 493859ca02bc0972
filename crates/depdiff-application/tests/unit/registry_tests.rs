//! Tests for the comparator and format adapter registries
//!
//! Uses `extern crate depdiff_providers` to force linkme registration of the
//! real comparators and adapters.

// Force linkme registration of all providers from depdiff-providers
extern crate depdiff_providers;

use std::sync::Arc;

use depdiff_application::registry::{
    ComparatorConfig, list_comparators, list_format_adapters, resolve_comparator,
    resolve_format_adapter,
};
use depdiff_application::use_cases::EntityMatcher;
use depdiff_domain::error::Error;
use depdiff_domain::value_objects::{CompareKind, Taxonomy, ToolKind};

use crate::test_utils::{left, right, small_taxonomy};

fn config(left: ToolKind, right: ToolKind) -> ComparatorConfig {
    ComparatorConfig::new(left, right, Arc::new(small_taxonomy()))
}

#[test]
fn test_all_tool_pairs_are_registered() {
    let labels: Vec<String> = list_comparators().into_iter().map(|(l, _)| l).collect();

    for expected in [
        "code2graph->depends:entity",
        "enre->depends:entity",
        "enre->understand:entity",
        "sourcetrail->depends:entity",
        "understand->depends:entity",
    ] {
        assert!(
            labels.iter().any(|l| l == expected),
            "{expected} missing from {labels:?}"
        );
    }
}

#[test]
fn test_unregistered_triple_lists_alternatives() {
    let err = resolve_comparator(&config(ToolKind::Depends, ToolKind::Enre), CompareKind::Entity)
        .expect_err("no depends->enre comparator");

    match &err {
        Error::UnregisteredComparator { left, right, kind, available } => {
            assert_eq!(left, "depends");
            assert_eq!(right, "enre");
            assert_eq!(kind, "entity");
            assert!(available.iter().any(|a| a == "enre->depends:entity"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("depends -> enre"));
}

#[test]
fn test_missing_taxonomy_table_is_configuration_error() {
    let config = ComparatorConfig::new(ToolKind::Enre, ToolKind::Depends, Arc::new(Taxonomy::default()));
    let err = resolve_comparator(&config, CompareKind::Entity).expect_err("no tables");

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_class_matches_type_with_same_name() {
    let comparator =
        resolve_comparator(&config(ToolKind::Enre, ToolKind::Depends), CompareKind::Entity)
            .expect("registered");
    let outcome = EntityMatcher::new(comparator)
        .run(&[left(1, "pkg.Foo", "Class")], &[right(10, "pkg.Foo", "Type")]);

    assert_eq!(outcome.eq.len(), 1);
    assert_eq!((outcome.eq[0].0.entity_id, outcome.eq[0].1.entity_id), (1, 10));
    assert!(outcome.ne.is_empty());
}

#[test]
fn test_incompatible_families_are_unmatched() {
    let comparator =
        resolve_comparator(&config(ToolKind::Enre, ToolKind::Depends), CompareKind::Entity)
            .expect("registered");
    let outcome = EntityMatcher::new(comparator)
        .run(&[left(1, "a.x", "Variable")], &[right(2, "a.x", "Function")]);

    assert!(outcome.eq.is_empty());
    assert!(outcome.maybe_eq.is_empty());
    assert_eq!(outcome.ne.len(), 2);
}

#[test]
fn test_format_adapters_are_registered() {
    let tools: Vec<ToolKind> = list_format_adapters().into_iter().map(|(t, _)| t).collect();

    for tool in [ToolKind::Enre, ToolKind::Understand, ToolKind::Depends, ToolKind::Sourcetrail] {
        assert!(tools.contains(&tool), "{tool} adapter missing");
    }
    assert!(resolve_format_adapter(ToolKind::Code2Graph).is_err());
}
