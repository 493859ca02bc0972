//! Logging tests

use depdiff_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").expect("valid"), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").expect("valid"), Level::DEBUG);
    assert_eq!(parse_log_level("warning").expect("valid"), Level::WARN);
    assert_eq!(parse_log_level("error").expect("valid"), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("verbose").expect_err("unknown level");
    assert!(err.to_string().contains("verbose"));
}
