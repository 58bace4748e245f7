//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns supporting the Backoffice bundle.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//!
//! ### Dependency Lookup
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Two-tier (public/private) service registry |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Utilities
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension methods for domain errors |
//! | [`locks`] | Poisoned-lock handling helpers |

pub mod config;
pub mod error_ext;
pub mod locks;
pub mod logging;
pub mod registry;

pub use config::{ConfigLoader, PanelConfig};
pub use registry::ServiceRegistry;
