//! Unit tests for the two-tier service registry

use backoffice_domain::Error;
use backoffice_infrastructure::ServiceRegistry;
use std::sync::Arc;

#[derive(Debug)]
struct Mailer {
    from: String,
}

struct Clock;

#[test]
fn test_resolve_public_service() {
    let registry = ServiceRegistry::new();
    registry
        .register("mailer", Arc::new(Mailer { from: "admin@example.com".to_string() }))
        .expect("register should succeed");

    let mailer = registry
        .resolve_as::<Mailer>("mailer")
        .expect("public service should resolve");
    assert_eq!(mailer.from, "admin@example.com");
}

#[test]
fn test_resolve_falls_back_to_private_tier() {
    let registry = ServiceRegistry::new();
    registry
        .register_private("clock", Arc::new(Clock))
        .expect("private register should succeed");

    // Missing from the public tier, present privately
    let service = registry.resolve("clock").expect("private fallback should resolve");
    assert!(service.downcast::<Clock>().is_ok());
}

#[test]
fn test_public_tier_shadows_private() {
    let registry = ServiceRegistry::new();
    registry
        .register("mailer", Arc::new(Mailer { from: "public@example.com".to_string() }))
        .expect("register should succeed");
    registry
        .register_private("mailer", Arc::new(Mailer { from: "private@example.com".to_string() }))
        .expect("private register should succeed");

    let mailer = registry
        .resolve_as::<Mailer>("mailer")
        .expect("should resolve");
    assert_eq!(mailer.from, "public@example.com");
}

#[test]
fn test_resolve_missing_everywhere_is_not_found() {
    let registry = ServiceRegistry::new();
    let error = registry.resolve("svc").expect_err("should fail");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "svc"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_duplicate_registration_rejected() {
    let registry = ServiceRegistry::new();
    registry
        .register("clock", Arc::new(Clock))
        .expect("first register should succeed");

    let error = registry
        .register("clock", Arc::new(Clock))
        .expect_err("duplicate register should fail");
    match error {
        Error::Registry { message } => assert!(message.contains("clock")),
        _ => panic!("Expected Registry error"),
    }
}

#[test]
fn test_resolve_as_rejects_wrong_type() {
    let registry = ServiceRegistry::new();
    registry
        .register("clock", Arc::new(Clock))
        .expect("register should succeed");

    let error = registry
        .resolve_as::<Mailer>("clock")
        .expect_err("downcast should fail");
    match error {
        Error::Registry { message } => assert!(message.contains("clock")),
        _ => panic!("Expected Registry error"),
    }
}

#[test]
fn test_list_shows_only_public_services() {
    let registry = ServiceRegistry::new();
    registry.register("mailer", Arc::new(Clock)).expect("register");
    registry.register_private("clock", Arc::new(Clock)).expect("register_private");

    let names = registry.list().expect("list should succeed");
    assert_eq!(names, vec!["mailer".to_string()]);
}

#[test]
fn test_registry_clones_share_state() {
    let registry = ServiceRegistry::new();
    let clone = registry.clone();
    registry.register("clock", Arc::new(Clock)).expect("register");

    assert!(clone.resolve("clock").is_ok());
}
