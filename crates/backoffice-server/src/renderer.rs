//! Error-page rendering
//!
//! Resolves the exception and layout templates for the current entity and
//! renders them with Tera. Template selection checks, in order: the entity's
//! own `templates` overrides, the global `design.templates` overrides, and
//! finally the built-in defaults.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use backoffice_domain::constants::{DEFAULT_EXCEPTION_TEMPLATE, DEFAULT_LAYOUT_TEMPLATE};
use backoffice_domain::error::{Error, Result};
use backoffice_domain::PanelException;
use backoffice_infrastructure::PanelConfig;
use serde::Serialize;
use std::sync::Arc;
use tera::{Context, Tera};

// Embed the built-in templates at compile time so the crate is self-contained
const TPL_EXCEPTION: &str = include_str!("templates/exception.html");
const TPL_LAYOUT: &str = include_str!("templates/layout.html");

/// Exception fields exposed to templates
#[derive(Debug, Serialize)]
struct ExceptionView {
    status_code: u16,
    title: &'static str,
    message: String,
}

impl From<&PanelException> for ExceptionView {
    fn from(exception: &PanelException) -> Self {
        Self {
            status_code: exception.status_code(),
            title: exception.title(),
            message: exception.to_string(),
        }
    }
}

/// Renders panel exceptions into themed HTML error pages
pub struct ErrorPageRenderer {
    templates: Arc<Tera>,
    config: Arc<PanelConfig>,
}

impl ErrorPageRenderer {
    /// Create a renderer with only the built-in templates
    pub fn new(config: Arc<PanelConfig>) -> Result<Self> {
        Self::with_templates(config, Tera::default())
    }

    /// Create a renderer over a caller-provided Tera instance
    ///
    /// Custom templates named by configuration overrides must already be
    /// registered in `templates`. The built-in defaults are added under their
    /// reserved names unless the caller registered replacements.
    pub fn with_templates(config: Arc<PanelConfig>, mut templates: Tera) -> Result<Self> {
        let registered: Vec<String> = templates
            .get_template_names()
            .map(String::from)
            .collect();
        for (name, content) in [
            (DEFAULT_EXCEPTION_TEMPLATE, TPL_EXCEPTION),
            (DEFAULT_LAYOUT_TEMPLATE, TPL_LAYOUT),
        ] {
            if !registered.iter().any(|n| n == name) {
                templates.add_raw_template(name, content).map_err(|err| {
                    Error::template_with_source(
                        format!("Failed to register built-in template '{}'", name),
                        Box::new(err),
                    )
                })?;
            }
        }

        Ok(Self {
            templates: Arc::new(templates),
            config,
        })
    }

    /// Get the templates instance
    pub fn templates(&self) -> Arc<Tera> {
        Arc::clone(&self.templates)
    }

    /// Resolve the (exception, layout) template paths for an entity
    ///
    /// Checks the entity override first, then the global design override,
    /// then the built-in defaults.
    pub fn resolve_templates(&self, entity: Option<&str>) -> (String, String) {
        let entity_templates = entity
            .and_then(|name| self.config.entity(name))
            .map(|entity_config| &entity_config.templates);

        let exception = entity_templates
            .and_then(|templates| templates.exception.clone())
            .or_else(|| self.config.design.templates.exception.clone())
            .unwrap_or_else(|| DEFAULT_EXCEPTION_TEMPLATE.to_string());

        let layout = entity_templates
            .and_then(|templates| templates.layout.clone())
            .or_else(|| self.config.design.templates.layout.clone())
            .unwrap_or_else(|| DEFAULT_LAYOUT_TEMPLATE.to_string());

        (exception, layout)
    }

    /// Render the error page for an exception
    ///
    /// The response status code equals the exception's declared status code.
    /// The exception template renders first; its output is then placed into
    /// the resolved layout as `content`. (Tera resolves `extends` parents at
    /// registration time, so the dynamic layout selection is expressed as a
    /// two-pass render instead of template inheritance.)
    pub fn render_error_page(
        &self,
        entity: Option<&str>,
        exception: &PanelException,
    ) -> Result<Response> {
        let (exception_path, layout_path) = self.resolve_templates(entity);
        let view = ExceptionView::from(exception);

        let mut context = Context::new();
        context.insert("exception", &view);
        context.insert("layout_template_path", &layout_path);
        let content = self
            .templates
            .render(&exception_path, &context)
            .map_err(|err| {
                Error::template_with_source(
                    format!("Failed to render exception template '{}'", exception_path),
                    Box::new(err),
                )
            })?;

        let mut layout_context = Context::new();
        layout_context.insert("exception", &view);
        layout_context.insert("content", &content);
        let markup = self
            .templates
            .render(&layout_path, &layout_context)
            .map_err(|err| {
                Error::template_with_source(
                    format!("Failed to render layout template '{}'", layout_path),
                    Box::new(err),
                )
            })?;

        let status = StatusCode::from_u16(exception.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Ok((status, Html(markup)).into_response())
    }
}
