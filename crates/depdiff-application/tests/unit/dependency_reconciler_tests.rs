//! Tests for the dependency reconciler

use depdiff_application::use_cases::{DependencyReconciler, ReconcileOptions};
use depdiff_domain::entities::{Dependency, DependencyIndex};
use depdiff_domain::value_objects::EquivalenceMapping;

use crate::test_utils::small_taxonomy;

fn index(dataset: &str, edges: &[(&str, i64, i64)]) -> DependencyIndex {
    DependencyIndex::group_by_source(
        dataset,
        edges
            .iter()
            .map(|(kind, src, dest)| Dependency::new(*kind, *src, *dest).with_dataset(dataset)),
    )
}

fn mapping(pairs: &[(i64, i64)]) -> EquivalenceMapping {
    let mut mapping = EquivalenceMapping::new("enre");
    for (l, r) in pairs {
        mapping.insert(*l, *r);
    }
    mapping
}

fn edge_ids(pairs: &[(Dependency, Dependency)]) -> Vec<((i64, i64), (i64, i64))> {
    pairs
        .iter()
        .map(|(l, r)| {
            (
                (l.dependency_src_id, l.dependency_dest_id),
                (r.dependency_src_id, r.dependency_dest_id),
            )
        })
        .collect()
}

#[test]
fn test_translated_edge_pairs_with_right_edge() {
    let left = index("enre", &[("Call", 1, 2)]);
    let right = index("depends", &[("Call", 10, 20)]);

    let (outcome, stats) = DependencyReconciler::default().reconcile(
        &left,
        &right,
        &mapping(&[(1, 10), (2, 20)]),
    );

    assert_eq!(edge_ids(&outcome.eq), vec![((1, 2), (10, 20))]);
    assert_eq!(stats.mapped_sources, 1);
    assert_eq!(stats.dropped_edges, 0);
}

#[test]
fn test_unmapped_destination_is_dropped() {
    let left = index("enre", &[("Call", 1, 2), ("Call", 1, 3)]);
    let right = index("depends", &[("Call", 10, 20)]);

    let (outcome, stats) = DependencyReconciler::default().reconcile(
        &left,
        &right,
        &mapping(&[(1, 10), (2, 20)]),
    );

    assert_eq!(outcome.eq.len(), 1);
    assert_eq!(stats.dropped_edges, 1);
}

#[test]
fn test_source_without_counterpart_is_skipped() {
    let left = index("enre", &[("Call", 5, 2)]);
    let right = index("depends", &[("Call", 10, 20)]);

    let (outcome, stats) = DependencyReconciler::default().reconcile(
        &left,
        &right,
        &mapping(&[(1, 10), (2, 20)]),
    );

    assert!(outcome.eq.is_empty());
    assert_eq!(stats.mapped_sources, 0);
}

#[test]
fn test_silent_counterpart_is_counted() {
    let left = index("enre", &[("Call", 1, 2)]);
    let right = index("depends", &[("Call", 99, 20)]);

    let (outcome, stats) = DependencyReconciler::default().reconcile(
        &left,
        &right,
        &mapping(&[(1, 10), (2, 20)]),
    );

    assert!(outcome.eq.is_empty());
    assert_eq!(stats.silent_counterparts, 1);
}

#[test]
fn test_every_left_edge_to_same_destination_is_paired() {
    let left = index("enre", &[("Call", 1, 2), ("Use", 1, 2)]);
    let right = index("depends", &[("Call", 10, 20)]);

    let (outcome, _) = DependencyReconciler::default().reconcile(
        &left,
        &right,
        &mapping(&[(1, 10), (2, 20)]),
    );

    let kinds: Vec<&str> = outcome
        .eq
        .iter()
        .map(|(l, _)| l.dependency_type.as_str())
        .collect();
    assert_eq!(kinds, vec!["Call", "Use"]);
}

#[test]
fn test_ambiguous_mapping_tries_every_counterpart() {
    let left = index("enre", &[("Call", 1, 2)]);
    let right = index("depends", &[("Call", 10, 20), ("Call", 11, 20)]);

    let (outcome, _) = DependencyReconciler::default().reconcile(
        &left,
        &right,
        &mapping(&[(1, 10), (1, 11), (2, 20)]),
    );

    assert_eq!(
        edge_ids(&outcome.eq),
        vec![((1, 2), (10, 20)), ((1, 2), (11, 20))]
    );
}

#[test]
fn test_kind_filter_rejects_different_kinds() {
    let taxonomy = small_taxonomy();
    let reconciler = DependencyReconciler::new(ReconcileOptions {
        require_same_kind: true,
    })
    .with_tables(
        taxonomy.tools["enre"].clone(),
        taxonomy.tools["depends"].clone(),
    );
    let left = index("enre", &[("Call", 1, 2), ("Use", 1, 2)]);
    let right = index("depends", &[("Call", 10, 20)]);

    let (outcome, stats) = reconciler.reconcile(&left, &right, &mapping(&[(1, 10), (2, 20)]));

    assert_eq!(outcome.eq.len(), 1);
    assert_eq!(outcome.eq[0].0.dependency_type, "Call");
    assert_eq!(stats.kind_mismatches, 1);
}

#[test]
fn test_reconciled_pairs_are_sound() {
    let left = index(
        "enre",
        &[("Call", 1, 2), ("Call", 1, 3), ("Use", 2, 3), ("Call", 3, 1)],
    );
    let right = index(
        "depends",
        &[("Call", 10, 20), ("Use", 20, 30), ("Call", 30, 10), ("Call", 10, 40)],
    );
    let map = mapping(&[(1, 10), (2, 20), (3, 30)]);

    let (outcome, _) = DependencyReconciler::default().reconcile(&left, &right, &map);

    assert!(!outcome.eq.is_empty());
    for (l, r) in &outcome.eq {
        let sources = map.counterparts(l.dependency_src_id).expect("mapped source");
        let dests = map.counterparts(l.dependency_dest_id).expect("mapped destination");
        assert!(sources.contains(&r.dependency_src_id));
        assert!(dests.contains(&r.dependency_dest_id));
    }
}
