//! Unit tests for tool and kind identities

use depdiff_domain::value_objects::{CompareKind, CompareResult, ToolKind};

#[test]
fn test_tool_round_trips_through_name() {
    for tool in ToolKind::ALL {
        let parsed: ToolKind = tool.as_str().parse().expect("known tool");
        assert_eq!(parsed, tool);
    }
}

#[test]
fn test_tool_parse_is_case_insensitive() {
    assert_eq!("ENRE".parse::<ToolKind>().ok(), Some(ToolKind::Enre));
    assert_eq!(" Code2Graph ".parse::<ToolKind>().ok(), Some(ToolKind::Code2Graph));
}

#[test]
fn test_unknown_tool_is_rejected() {
    let err = "doxygen".parse::<ToolKind>().expect_err("unknown tool");
    assert!(err.to_string().contains("doxygen"));
}

#[test]
fn test_compare_kind_parse() {
    assert_eq!("entity".parse::<CompareKind>().ok(), Some(CompareKind::Entity));
    assert_eq!("Dependency".parse::<CompareKind>().ok(), Some(CompareKind::Dependency));
    assert!("edge".parse::<CompareKind>().is_err());
}

#[test]
fn test_compare_result_ordering() {
    assert!(CompareResult::Equal > CompareResult::MaybeEqual);
    assert!(CompareResult::MaybeEqual > CompareResult::NotEqual);
}

#[test]
fn test_fuzzy_threshold_boundaries() {
    use depdiff_domain::value_objects::FuzzyThresholds;

    let thresholds = FuzzyThresholds::default();
    assert_eq!(thresholds.classify(0.95), CompareResult::Equal);
    assert_eq!(thresholds.classify(1.0), CompareResult::Equal);
    assert_eq!(thresholds.classify(0.9499), CompareResult::MaybeEqual);
    assert_eq!(thresholds.classify(0.90), CompareResult::MaybeEqual);
    assert_eq!(thresholds.classify(0.8999), CompareResult::NotEqual);
}
