//! # Server Layer
//!
//! Themed error pages for axum applications.
//!
//! A [`PanelException`](backoffice_domain::PanelException) returned by any
//! handler (through [`PanelError`]) is intercepted by
//! [`error_page_middleware`] and rendered into an HTML error page by
//! [`ErrorPageRenderer`]. Responses without a panel exception pass through
//! untouched, so the hosting application's own error handling is never
//! displaced.
//!
//! ```ignore
//! use backoffice_server::{apply_error_pages, ErrorPageRenderer, PanelState};
//!
//! let renderer = ErrorPageRenderer::new(config)?;
//! let state = PanelState::new(Arc::new(renderer), registry);
//! let app = apply_error_pages(Router::new().route("/", get(dashboard)), state);
//! ```

pub mod middleware;
pub mod renderer;
pub mod state;

pub use middleware::{error_page_middleware, LogSeverity, PanelError};
pub use renderer::ErrorPageRenderer;
pub use state::{apply_error_pages, PanelState};
