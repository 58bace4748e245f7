//! Configuration management
//!
//! TOML + environment configuration for the panel, loaded through Figment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{DesignConfig, EntityConfig, LoggingConfig, PanelConfig, TemplatesConfig};
