//! Unit tests for taxonomy tables

use depdiff_domain::value_objects::{
    DependencyKind, MatchMode, Taxonomy, TaxonomyRule, TaxonomyTable, ToolKind, TypeFamily,
    TypeLookup,
};

fn understand_like() -> TaxonomyTable {
    TaxonomyTable {
        entity: vec![
            TaxonomyRule::new("ENUM", MatchMode::Contains, TypeFamily::Enum),
            TaxonomyRule::new("CLASS", MatchMode::Contains, TypeFamily::Class),
            TaxonomyRule::new("METHOD", MatchMode::Suffix, TypeFamily::Method),
        ],
        dependency: vec![
            TaxonomyRule::new("Use Partial", MatchMode::Exact, DependencyKind::Use),
            TaxonomyRule::new("Call", MatchMode::Exact, DependencyKind::Call),
        ],
        ..Default::default()
    }
}

#[test]
fn test_rules_match_case_insensitively() {
    let table = understand_like();
    assert_eq!(
        table.dependency_kind("use partial"),
        TypeLookup::Mapped(DependencyKind::Use)
    );
    assert_eq!(
        table.entity_family("Java Class Type Public Member"),
        TypeLookup::Mapped(TypeFamily::Class)
    );
    assert_eq!(
        table.entity_family("Public Method"),
        TypeLookup::Mapped(TypeFamily::Method)
    );
}

#[test]
fn test_first_matching_rule_wins() {
    let table = understand_like();
    assert_eq!(
        table.entity_family("Java Enum Class Type"),
        TypeLookup::Mapped(TypeFamily::Enum)
    );
}

#[test]
fn test_unmatched_value_is_unmapped() {
    let table = understand_like();
    assert!(table.entity_family("Lambda").is_unmapped());
    assert_eq!(table.dependency_kind("Throw").mapped(), None);
    // Suffix rules do not match in the middle
    assert!(table.entity_family("Method Reference").is_unmapped());
}

#[test]
fn test_taxonomy_parses_from_toml() {
    let text = r#"
        version = 1

        [tools.depends]
        entity = [
            { pattern = "Type", canonical = "TYPE" },
            { pattern = "Var", canonical = "VAR" },
        ]
        dependency = [{ pattern = "Call", canonical = "CALL" }]

        [tools.sourcetrail.entity_codes]
        "8192" = "method"
    "#;
    let taxonomy: Taxonomy = toml::from_str(text).expect("taxonomy should parse");
    taxonomy.validate().expect("taxonomy should be valid");

    let depends = taxonomy.require(ToolKind::Depends).expect("depends table");
    assert_eq!(depends.entity_family("type"), TypeLookup::Mapped(TypeFamily::Type));
    let sourcetrail = taxonomy.table(ToolKind::Sourcetrail).expect("sourcetrail table");
    assert_eq!(sourcetrail.entity_code("8192"), Some("method"));
    assert!(taxonomy.require(ToolKind::Enre).is_err());
}

#[test]
fn test_validate_rejects_wrong_version() {
    let taxonomy = Taxonomy {
        version: 99,
        ..Default::default()
    };
    assert!(taxonomy.validate().is_err());
}

#[test]
fn test_validate_rejects_unknown_tool() {
    let mut taxonomy = Taxonomy {
        version: 1,
        ..Default::default()
    };
    taxonomy.tools.insert("doxygen".to_string(), TaxonomyTable::default());
    assert!(taxonomy.validate().is_err());
}
