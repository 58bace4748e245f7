//! Unit tests for the panel exception taxonomy

use backoffice_domain::PanelException;

#[test]
fn test_entity_not_found_status_code() {
    let exc = PanelException::EntityNotFound {
        entity: "product".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(exc.status_code(), 404);
}

#[test]
fn test_undefined_entity_status_code() {
    let exc = PanelException::UndefinedEntity {
        entity: "invoice".to_string(),
    };
    assert_eq!(exc.status_code(), 404);
}

#[test]
fn test_forbidden_action_status_code() {
    let exc = PanelException::ForbiddenAction {
        action: "delete".to_string(),
        entity: "user".to_string(),
    };
    assert_eq!(exc.status_code(), 403);
}

#[test]
fn test_no_entities_configured_status_code() {
    assert_eq!(PanelException::NoEntitiesConfigured.status_code(), 500);
}

#[test]
fn test_display_includes_entity_and_id() {
    let exc = PanelException::EntityNotFound {
        entity: "product".to_string(),
        id: "42".to_string(),
    };
    let message = format!("{}", exc);
    assert!(message.contains("product"));
    assert!(message.contains("42"));
}

#[test]
fn test_titles_are_stable() {
    let exc = PanelException::ForbiddenAction {
        action: "edit".to_string(),
        entity: "user".to_string(),
    };
    assert_eq!(exc.title(), "Forbidden action");
    assert_eq!(PanelException::NoEntitiesConfigured.title(), "No entities configured");
}

#[test]
fn test_exception_is_cloneable() {
    let exc = PanelException::UndefinedEntity {
        entity: "invoice".to_string(),
    };
    let cloned = exc.clone();
    assert_eq!(exc, cloned);
}
