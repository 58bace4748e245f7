//! # Domain Layer
//!
//! Core types for the Backoffice admin-panel bundle: the panel exception
//! taxonomy, the operational error type, and domain constants.
//!
//! This crate is a pure library with no framework dependencies. HTTP and
//! template concerns live in `backoffice-server`; configuration loading and
//! the service registry live in `backoffice-infrastructure`.

pub mod constants;
pub mod error;
pub mod exception;

pub use error::{Error, Result};
pub use exception::PanelException;
