//! # Backoffice
//!
//! Admin-panel error pages and service registry for axum applications.
//!
//! This crate provides the public facade over the Backoffice layers:
//!
//! - **Themed error pages**: panel exceptions raised by admin handlers are
//!   rendered into HTML pages whose templates are selected per entity, per
//!   application design, or from the built-in defaults.
//! - **Service registry**: a two-tier name-to-instance registry whose
//!   `resolve` falls back from the public tier to the private tier before
//!   failing with a not-found error.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum::{routing::get, Router};
//! use backoffice::infrastructure::{ConfigLoader, ServiceRegistry};
//! use backoffice::server::{apply_error_pages, ErrorPageRenderer, PanelState};
//!
//! let config = Arc::new(ConfigLoader::new().load()?);
//! let renderer = Arc::new(ErrorPageRenderer::new(config)?);
//! let state = PanelState::new(renderer, ServiceRegistry::new());
//! let app = apply_error_pages(Router::new().route("/", get(dashboard)), state);
//! ```
//!
//! ## Architecture
//!
//! The codebase follows Clean Architecture principles:
//!
//! - `domain` - Panel exceptions, operational errors, and domain constants
//! - `infrastructure` - Configuration loading, logging, and the service registry
//! - `server` - Error-page renderer and axum middleware

/// Domain layer - panel exceptions and core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use backoffice_domain::*;
}

/// Infrastructure layer - config, logging, and the service registry
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use backoffice_infrastructure::*;
}

/// Server layer - error-page rendering middleware
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use backoffice_server::*;
}

// Convenience re-exports of the most used types
pub use backoffice_domain::{Error, PanelException, Result};
pub use backoffice_infrastructure::{ConfigLoader, PanelConfig, ServiceRegistry};
pub use backoffice_server::{apply_error_pages, ErrorPageRenderer, PanelState};
