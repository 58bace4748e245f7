//! Unit tests for domain error types

use backoffice_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("twig");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "twig"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_config_error() {
    let error = Error::config("Missing template override");
    match error {
        Error::Config { message, source } => {
            assert_eq!(message, "Missing template override");
            assert!(source.is_none());
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_template_error() {
    let error = Error::template("Unknown template name");
    match error {
        Error::Template { message, source } => {
            assert_eq!(message, "Unknown template name");
            assert!(source.is_none());
        }
        _ => panic!("Expected Template error"),
    }
}

#[test]
fn test_template_error_preserves_source() {
    let original = Error::not_found("product");
    let error = Error::template_with_source("Render failed", Box::new(original));
    match &error {
        Error::Template { source, .. } => {
            let source = source.as_ref().expect("source should be preserved");
            assert!(source.to_string().contains("product"));
        }
        _ => panic!("Expected Template error"),
    }
    // Also reachable through the std error chain
    let chained = std::error::Error::source(&error).expect("chained source");
    assert!(chained.to_string().contains("product"));
}

#[test]
fn test_registry_error() {
    let error = Error::registry("Service 'db' already registered");
    match error {
        Error::Registry { message } => assert_eq!(message, "Service 'db' already registered"),
        _ => panic!("Expected Registry error"),
    }
}

#[test]
fn test_internal_error() {
    let error = Error::internal("Lock poisoned");
    match error {
        Error::Internal { message } => assert_eq!(message, "Lock poisoned"),
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let error: Error = io_error.into();
    let display_str = format!("{}", error);
    assert!(display_str.contains("I/O error"));
}
