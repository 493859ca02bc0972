//! Tests for the native format adapters

use std::fs;
use std::path::PathBuf;

use depdiff_application::registry::resolve_format_adapter;
use depdiff_domain::error::Error;
use depdiff_domain::ports::AdapterInput;
use depdiff_domain::value_objects::{TaxonomyTable, ToolKind};
use depdiff_providers::adapters::depends::parse_entity_line;
use depdiff_providers::adapters::sourcetrail::clean_name;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn test_enre_stops_at_first_external_variable() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "enre.json",
        r#"{
            "variables": [
                {"id": 1, "qualifiedName": "demo", "category": "Package"},
                {"id": 2, "qualifiedName": "demo.Foo", "category": "Class", "external": false},
                {"id": 3, "qualifiedName": "java.lang.String", "category": "Class", "external": true},
                {"id": 4, "qualifiedName": "demo.Bar", "category": "Class"}
            ],
            "cells": [
                {"src": 2, "dest": 1, "values": {"Contain": 1}},
                {"src": 2, "dest": 3, "values": {"Call": 2, "Use": 1}}
            ]
        }"#,
    );
    let adapter = resolve_format_adapter(ToolKind::Enre).expect("registered");
    let converted = adapter
        .convert(&AdapterInput::new("demo").with_entity_input(&path))
        .expect("valid export");

    let entities = converted.entities.expect("entity document").entity;
    let ids: Vec<i64> = entities.iter().map(|e| e.entity_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(entities[1].entity_name, "demo.Foo");

    let deps = converted.dependencies.expect("dependency document");
    assert_eq!(deps.project_name, "demo");
    let kinds: Vec<&str> = deps.dependency.iter().map(|d| d.dependency_type.as_str()).collect();
    assert_eq!(kinds, vec!["Contain", "Call", "Use"]);
}

#[test]
fn test_understand_reads_dependency_details_only() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "und.json",
        r#"{"cells": [
            {"details": [
                {"type": "Java Call", "src": {"object": 5}, "dest": {"object": 6}},
                {"type": "Java Use", "src": {"object": 5}, "dest": {"object": 7}}
            ]},
            {}
        ]}"#,
    );
    let adapter = resolve_format_adapter(ToolKind::Understand).expect("registered");
    let converted = adapter
        .convert(&AdapterInput::new("demo").with_dependency_input(&path))
        .expect("valid export");

    assert!(converted.entities.is_none());
    let deps = converted.dependencies.expect("dependency document").dependency;
    assert_eq!(deps.len(), 2);
    assert_eq!((deps[0].dependency_src_id, deps[0].dependency_dest_id), (5, 6));
    assert_eq!(deps[1].dependency_type, "Java Use");
}

#[test]
fn test_depends_entity_lines() {
    assert_eq!(
        parse_entity_line("12/demo.Foo/depends.entity.TypeEntity"),
        Some(("12", "demo.Foo", "Type".to_string()))
    );
    assert_eq!(
        parse_entity_line("3/src/demo/Foo.java/depends.entity.FileEntity"),
        Some(("3", "src/demo/Foo.java", "File".to_string()))
    );
    assert_eq!(parse_entity_line("garbage"), None);
}

#[test]
fn test_depends_converts_dump_and_matrix() {
    let dir = TempDir::new().expect("temp dir");
    let entities = write(
        &dir,
        "entities.txt",
        "1/demo/depends.entity.PackageEntity\n2/demo.Foo/depends.entity.TypeEntity\n\nbroken\n",
    );
    let deps = write(
        &dir,
        "deps.json",
        r#"{"cells": [{"src": 2, "dest": 1, "values": {"Contain": 1.0, "Import": 1.0}}]}"#,
    );
    let adapter = resolve_format_adapter(ToolKind::Depends).expect("registered");
    let converted = adapter
        .convert(
            &AdapterInput::new("demo")
                .with_entity_input(&entities)
                .with_dependency_input(&deps),
        )
        .expect("valid export");

    let entity_types: Vec<String> = converted
        .entities
        .expect("entity document")
        .entity
        .into_iter()
        .map(|e| e.entity_type)
        .collect();
    assert_eq!(entity_types, vec!["Package", "Type"]);
    assert_eq!(converted.dependencies.expect("dependency document").dependency.len(), 2);
    assert_eq!(converted.warnings.len(), 1);
}

#[test]
fn test_depends_rejects_non_numeric_id() {
    let dir = TempDir::new().expect("temp dir");
    let entities = write(&dir, "entities.txt", "x/demo/depends.entity.PackageEntity\n");
    let deps = write(&dir, "deps.json", r#"{"cells": []}"#);
    let adapter = resolve_format_adapter(ToolKind::Depends).expect("registered");

    let err = adapter
        .convert(
            &AdapterInput::new("demo")
                .with_entity_input(&entities)
                .with_dependency_input(&deps),
        )
        .expect_err("invalid id");
    assert!(matches!(err, Error::MalformedInput { .. }));
    assert!(err.to_string().contains("entities.txt"));
}

#[test]
fn test_sourcetrail_name_markers_are_removed() {
    assert_eq!(clean_name("org\tndemo\tnFoo\ts\tp"), "org.demo.Foo");
    assert_eq!(clean_name("run\tm"), "run");
}

#[test]
fn test_sourcetrail_codes_are_translated() {
    let dir = TempDir::new().expect("temp dir");
    let nodes = write(
        &dir,
        "nodes.csv",
        "id,type,serialized_name\n1,131072,org\tndemo\tnFoo\ts\tp\n2,8192,run\tm\n3,99,odd\n",
    );
    let edges = write(
        &dir,
        "edges.csv",
        "type,source_node_id,target_node_id\n8,2,1\n7,1,2\n",
    );
    let mut table = TaxonomyTable::default();
    table.entity_codes.insert("131072".to_string(), "class".to_string());
    table.entity_codes.insert("8192".to_string(), "method".to_string());
    table.dependency_codes.insert("8".to_string(), "call".to_string());

    let adapter = resolve_format_adapter(ToolKind::Sourcetrail).expect("registered");
    let converted = adapter
        .convert(
            &AdapterInput::new("demo")
                .with_entity_input(&nodes)
                .with_dependency_input(&edges)
                .with_table(table),
        )
        .expect("valid export");

    let entities = converted.entities.expect("entity document").entity;
    assert_eq!(entities[0].entity_name, "org.demo.Foo");
    assert_eq!(entities[0].entity_type, "class");
    assert_eq!(entities[2].entity_type, "99");
    let deps = converted.dependencies.expect("dependency document").dependency;
    assert_eq!(deps[0].dependency_type, "call");
    assert_eq!(deps[1].dependency_type, "7");
    assert_eq!(converted.warnings.len(), 2);
}

#[test]
fn test_missing_input_is_reported() {
    let adapter = resolve_format_adapter(ToolKind::Understand).expect("registered");
    let err = adapter
        .convert(&AdapterInput::new("demo"))
        .expect_err("no dependency input");
    assert!(err.to_string().contains("understand"));
}
