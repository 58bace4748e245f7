//! Unit tests for logging utilities

use backoffice_domain::Error;
use backoffice_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_valid_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("Warn").unwrap(), Level::WARN);
}

#[test]
fn test_parse_invalid_level() {
    let error = parse_log_level("verbose").expect_err("should reject unknown level");
    match error {
        Error::Config { message, .. } => assert!(message.contains("verbose")),
        _ => panic!("Expected Config error"),
    }
}
