//! Shared panel state and router glue

use axum::middleware;
use axum::Router;
use backoffice_infrastructure::ServiceRegistry;
use std::sync::Arc;

use crate::middleware::error_page_middleware;
use crate::renderer::ErrorPageRenderer;

/// Shared state for the panel middleware and handlers
#[derive(Clone)]
pub struct PanelState {
    /// Error-page renderer
    pub renderer: Arc<ErrorPageRenderer>,
    /// Service registry for dependency lookup
    pub registry: ServiceRegistry,
}

impl PanelState {
    /// Create panel state from its parts
    pub fn new(renderer: Arc<ErrorPageRenderer>, registry: ServiceRegistry) -> Self {
        Self { renderer, registry }
    }
}

/// Attach the error-page middleware to a router
pub fn apply_error_pages(router: Router, state: PanelState) -> Router {
    router.layer(middleware::from_fn_with_state(state, error_page_middleware))
}
