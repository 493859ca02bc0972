//! Unit tests for canonical records

use depdiff_domain::entities::{Dependency, DependencyIndex, Entity, EntityDocument};
use depdiff_domain::value_objects::EntityKey;

#[test]
fn test_entity_defaults_missing_positions() {
    let json = r#"{"entityID": 7, "entityName": "pkg.Foo", "entityType": "Class"}"#;
    let entity: Entity = serde_json::from_str(json).expect("entity should parse");

    assert_eq!(entity.entity_id, 7);
    assert_eq!(entity.entity_file, None);
    assert_eq!(entity.start_line, -1);
    assert_eq!(entity.end_column, -1);
    assert!(entity.dataset.is_empty());
}

#[test]
fn test_entity_serializes_schema_keys() {
    let entity = Entity::new(1, "pkg.Foo", "Class").with_dataset("enre");
    let value = serde_json::to_value(&entity).expect("serialization should succeed");

    assert_eq!(value["entityID"], 1);
    assert_eq!(value["entityName"], "pkg.Foo");
    assert_eq!(value["entityType"], "Class");
    assert!(value["entityFile"].is_null());
    assert_eq!(value["startLine"], -1);
    assert_eq!(value["dataset"], "enre");
}

#[test]
fn test_entity_without_dataset_omits_tag() {
    let value = serde_json::to_value(Entity::new(1, "a", "File")).expect("serialize");
    assert!(value.get("dataset").is_none());
}

#[test]
fn test_entity_missing_name_is_rejected() {
    let json = r#"{"entityID": 7, "entityType": "Class"}"#;
    let err = serde_json::from_str::<Entity>(json).expect_err("name is required");
    assert!(err.to_string().contains("entityName"));
}

#[test]
fn test_entity_key_includes_dataset() {
    let a = Entity::new(1, "x", "Class").with_dataset("enre");
    let b = Entity::new(1, "x", "Class").with_dataset("depends");

    assert_ne!(a.key(), b.key());
    assert_eq!(a.key(), EntityKey::new(1, "enre"));
}

#[test]
fn test_dependency_accepts_legacy_dest_key() {
    let json = r#"{"dependencyType": "Call", "dependencySrcID": 1, "dependencydestID": 2}"#;
    let dep: Dependency = serde_json::from_str(json).expect("legacy key should parse");
    assert_eq!(dep.dependency_dest_id, 2);
}

#[test]
fn test_dependency_index_groups_by_source() {
    let index = DependencyIndex::group_by_source(
        "enre",
        vec![
            Dependency::new("Call", 1, 2),
            Dependency::new("Use", 3, 1),
            Dependency::new("Use", 1, 4),
        ],
    );

    assert_eq!(index.dataset(), "enre");
    assert_eq!(index.source_count(), 2);
    assert_eq!(index.edge_count(), 3);
    let from_one = index.outgoing(1).expect("source 1 has edges");
    assert_eq!(from_one.len(), 2);
    assert_eq!(from_one[0].dependency_dest_id, 2);
    assert!(index.outgoing(2).is_none());
}

#[test]
fn test_entity_document_envelope() {
    let doc = EntityDocument::new("halo", vec![Entity::new(1, "a", "File")]);
    let value = serde_json::to_value(&doc).expect("serialize");

    assert_eq!(value["schemaVersion"], 1.0);
    assert_eq!(value["projectName"], "halo");
    assert_eq!(value["entity"].as_array().map(Vec::len), Some(1));
}
