//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables, and
//! default values, merged through Figment.

use crate::config::types::{PanelConfig, TemplatesConfig};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use backoffice_domain::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use backoffice_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `PanelConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `BACKOFFICE__LOGGING__LEVEL`)
    pub fn load(&self) -> Result<PanelConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(PanelConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            // Try to find default config file
            if let Some(default_path) = Self::find_default_config_path() {
                if default_path.exists() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // Add environment variables
        // Double underscore separates nested keys (e.g., BACKOFFICE__LOGGING__LEVEL)
        figment = figment.merge(Env::prefixed(&format!("{}__", self.env_prefix)).split("__"));

        // Extract and deserialize configuration
        let panel_config: PanelConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        // Validate configuration
        Self::validate_config(&panel_config)?;

        Ok(panel_config)
    }

    /// Reload configuration (useful for hot-reloading)
    pub fn reload(&self) -> Result<PanelConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &PanelConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .config_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        // Try various common config file locations
        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }

    /// Validate configuration values
    fn validate_config(config: &PanelConfig) -> Result<()> {
        parse_log_level(&config.logging.level)?;

        Self::validate_templates(&config.design.templates, "design")?;
        for (entity, entity_config) in &config.entities {
            Self::validate_templates(&entity_config.templates, entity)?;
        }

        Ok(())
    }

    /// Reject empty template override strings
    ///
    /// An absent override falls through to the next tier; an empty one would
    /// silently select a template the engine cannot find.
    fn validate_templates(templates: &TemplatesConfig, scope: &str) -> Result<()> {
        if let Some(exception) = &templates.exception {
            if exception.trim().is_empty() {
                return Err(Error::config(format!(
                    "Empty 'templates.exception' override in '{}'",
                    scope
                )));
            }
        }
        if let Some(layout) = &templates.layout {
            if layout.trim().is_empty() {
                return Err(Error::config(format!(
                    "Empty 'templates.layout' override in '{}'",
                    scope
                )));
            }
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
