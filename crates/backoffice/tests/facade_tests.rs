//! Facade integration test: the full bundle wired through the public API

use backoffice::domain::PanelException;
use backoffice::infrastructure::{PanelConfig, ServiceRegistry};
use backoffice::{ErrorPageRenderer, PanelState};
use std::sync::Arc;

#[test]
fn test_bundle_wires_through_facade() {
    let registry = ServiceRegistry::new();
    registry
        .register("greeting", Arc::new("hello".to_string()))
        .expect("register");
    registry
        .register_private("secret", Arc::new(42u32))
        .expect("register_private");

    let renderer = Arc::new(
        ErrorPageRenderer::new(Arc::new(PanelConfig::default())).expect("renderer"),
    );
    let state = PanelState::new(renderer, registry);

    // Public lookup, private fallback, and renderer selection all reachable
    assert_eq!(
        *state.registry.resolve_as::<String>("greeting").expect("resolve"),
        "hello"
    );
    assert_eq!(*state.registry.resolve_as::<u32>("secret").expect("resolve"), 42);

    let (exception, layout) = state.renderer.resolve_templates(None);
    assert_eq!(exception, "default/exception.html");
    assert_eq!(layout, "default/layout.html");

    assert_eq!(PanelException::NoEntitiesConfigured.status_code(), 500);
}
