//! Exception interception middleware
//!
//! Handlers surface panel exceptions by returning [`PanelError`], whose
//! `IntoResponse` impl plants the exception in the response extensions. The
//! middleware inspects every response: when the extension is present it logs
//! the exception and replaces the response with a themed error page; when it
//! is absent the response passes through untouched and the hosting
//! application's own error handling applies.

use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use backoffice_domain::constants::ENTITY_QUERY_PARAM;
use backoffice_domain::error::Error;
use backoffice_domain::PanelException;
use std::collections::HashMap;
use tracing::{error, warn};

use crate::state::PanelState;

/// Handler-side wrapper turning a panel exception into a response
///
/// The plain-text body is a placeholder; the middleware rewrites the response
/// into a themed page before it leaves the service.
#[derive(Debug, Clone)]
pub struct PanelError(pub PanelException);

impl From<PanelException> for PanelError {
    fn from(exception: PanelException) -> Self {
        Self(exception)
    }
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.0.to_string()).into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Log severity tier for a panel exception
///
/// Server-side failures are a defect in the panel itself; client-side status
/// codes only record misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSeverity {
    /// Status codes below 500
    Error,
    /// Status codes 500 and above
    Critical,
}

impl LogSeverity {
    /// Severity tier for an HTTP status code
    pub fn for_status(status: u16) -> Self {
        if status >= 500 {
            Self::Critical
        } else {
            Self::Error
        }
    }
}

/// Log a panel exception at the severity its status code demands
///
/// tracing has no critical level: `Critical` maps to `error!`, `Error`
/// to `warn!`.
fn log_exception(exception: &PanelException) {
    let status = exception.status_code();
    match LogSeverity::for_status(status) {
        LogSeverity::Critical => {
            error!(status, exception = %exception, "Panel exception");
        }
        LogSeverity::Error => {
            warn!(status, exception = %exception, "Panel exception");
        }
    }
}

/// Extract the current entity name from the request query string
fn entity_from_request(request: &Request) -> Option<String> {
    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(request.uri()).ok()?;
    params
        .get(ENTITY_QUERY_PARAM)
        .filter(|value| !value.is_empty())
        .cloned()
}

/// Render themed error pages for panel exceptions
///
/// Apply with `axum::middleware::from_fn_with_state` (see
/// [`apply_error_pages`](crate::state::apply_error_pages)).
pub async fn error_page_middleware(
    State(state): State<PanelState>,
    request: Request,
    next: Next,
) -> Response {
    let entity = entity_from_request(&request);
    let response = next.run(request).await;

    // Non-panel responses are none of our business
    let Some(exception) = response.extensions().get::<PanelException>().cloned() else {
        return response;
    };

    log_exception(&exception);

    match state.renderer.render_error_page(entity.as_deref(), &exception) {
        Ok(page) => page,
        Err(render_error) => {
            // A failure while handling an exception must stay causally linked
            // to the exception it was handling, and must never be swallowed.
            let chained = Error::template_with_source(
                format!("Exception thrown when rendering an error page ({})", render_error),
                Box::new(exception),
            );
            error!(error = %chained, "Error-page rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, chained.to_string()).into_response()
        }
    }
}
