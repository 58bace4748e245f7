//! Panel configuration types
//!
//! The template-selection chain reads these structures at request time:
//! per-entity overrides take precedence over the global design defaults,
//! which in turn fall back to the built-in templates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level panel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Per-entity configuration, keyed by entity name
    #[serde(default)]
    pub entities: HashMap<String, EntityConfig>,

    /// Global design defaults
    #[serde(default)]
    pub design: DesignConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PanelConfig {
    /// Look up the configuration block for an entity, if any
    pub fn entity(&self, name: &str) -> Option<&EntityConfig> {
        self.entities.get(name)
    }
}

/// Configuration for a single entity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Template overrides for this entity
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Global design defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignConfig {
    /// Template overrides applying to every entity without its own override
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Template path overrides
///
/// `None` means "no override at this level"; the selection chain moves on to
/// the next tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Template rendered for exception pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,

    /// Layout template the exception page extends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Emit JSON-formatted log lines
    pub json_format: bool,

    /// Optional log file path; daily-rotated when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
