//! Unit tests for the equivalence mapping

use depdiff_domain::entities::Entity;
use depdiff_domain::value_objects::EquivalenceMapping;

fn pair(left: i64, right: i64) -> (Entity, Entity) {
    (
        Entity::new(left, "n", "Class").with_dataset("enre"),
        Entity::new(right, "n", "Type").with_dataset("depends"),
    )
}

#[test]
fn test_mapping_orients_pairs_by_anchor() {
    let (l, r) = pair(1, 10);
    // Right member listed first
    let mapping = EquivalenceMapping::from_pairs("enre", [(&r, &l)]).expect("valid pair");

    assert_eq!(mapping.anchor(), "enre");
    assert!(mapping.contains(1));
    assert!(!mapping.contains(10));
    assert_eq!(
        mapping.counterparts(1).map(|c| c.iter().copied().collect::<Vec<_>>()),
        Some(vec![10])
    );
}

#[test]
fn test_mapping_keeps_every_counterpart() {
    let pairs = [pair(1, 10), pair(1, 11), pair(2, 20)];
    let mapping =
        EquivalenceMapping::from_pairs("enre", pairs.iter().map(|(l, r)| (l, r))).expect("valid");

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.ambiguous_count(), 1);
    assert_eq!(mapping.counterparts(1).map(|c| c.len()), Some(2));
}

#[test]
fn test_mapping_rejects_pair_without_anchor() {
    let a = Entity::new(1, "n", "Class").with_dataset("understand");
    let b = Entity::new(2, "n", "Type").with_dataset("depends");

    let err = EquivalenceMapping::from_pairs("enre", [(&a, &b)]).expect_err("no anchor member");
    assert!(err.to_string().contains("eq[0]"));
}

#[test]
fn test_mapping_rejects_pair_with_two_anchors() {
    let a = Entity::new(1, "n", "Class").with_dataset("enre");
    let b = Entity::new(2, "n", "Class").with_dataset("enre");

    assert!(EquivalenceMapping::from_pairs("enre", [(&a, &b)]).is_err());
}
