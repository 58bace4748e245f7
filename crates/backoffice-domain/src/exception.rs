//! Panel exception taxonomy
//!
//! Panel exceptions are the errors this bundle owns and renders as themed
//! error pages. Unlike the operational [`Error`](crate::error::Error) type,
//! every panel exception carries an HTTP status code and is cloneable so it
//! can travel through response extensions to the error-page middleware.

use serde::Serialize;
use thiserror::Error;

/// Domain exceptions raised by admin-panel operations
///
/// Any error that is not a `PanelException` is outside this bundle's
/// responsibility and is left to the hosting application's own handling.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PanelException {
    /// The requested entity instance does not exist
    #[error("The \"{entity}\" entity with id = \"{id}\" does not exist")]
    EntityNotFound {
        /// Configured entity name
        entity: String,
        /// Primary key of the missing instance
        id: String,
    },

    /// The requested entity name is not present in the panel configuration
    #[error("The \"{entity}\" entity is not defined in the panel configuration")]
    UndefinedEntity {
        /// Requested entity name
        entity: String,
    },

    /// The requested action is disabled for the entity
    #[error("The \"{action}\" action is not allowed for the \"{entity}\" entity")]
    ForbiddenAction {
        /// Requested action name
        action: String,
        /// Configured entity name
        entity: String,
    },

    /// The panel configuration defines no entities at all
    #[error("The panel configuration does not define any entities")]
    NoEntitiesConfigured,
}

impl PanelException {
    /// HTTP status code this exception translates to
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EntityNotFound { .. } | Self::UndefinedEntity { .. } => 404,
            Self::ForbiddenAction { .. } => 403,
            Self::NoEntitiesConfigured => 500,
        }
    }

    /// Short human-readable title for error pages
    pub fn title(&self) -> &'static str {
        match self {
            Self::EntityNotFound { .. } => "Entity not found",
            Self::UndefinedEntity { .. } => "Undefined entity",
            Self::ForbiddenAction { .. } => "Forbidden action",
            Self::NoEntitiesConfigured => "No entities configured",
        }
    }
}
