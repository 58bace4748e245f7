//! Domain layer constants
//!
//! Contains constants that are part of the panel's domain logic and are used
//! by the infrastructure and server layers.

// ============================================================================
// TEMPLATE CONSTANTS
// ============================================================================

/// Built-in template used to render an exception page when no override is
/// configured
pub const DEFAULT_EXCEPTION_TEMPLATE: &str = "default/exception.html";

/// Built-in layout template the default exception page extends
pub const DEFAULT_LAYOUT_TEMPLATE: &str = "default/layout.html";

// ============================================================================
// REQUEST CONSTANTS
// ============================================================================

/// Query string parameter naming the entity the current request operates on
pub const ENTITY_QUERY_PARAM: &str = "entity";

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable prefix for configuration overrides
/// (double underscore separates nested keys, e.g. `BACKOFFICE__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "BACKOFFICE";

/// Environment variable consulted for the tracing filter
pub const LOG_FILTER_ENV: &str = "BACKOFFICE_LOG";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "backoffice.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "backoffice";
