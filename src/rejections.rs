use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

/// Application-level error responses. Anything unexpected is logged at the
/// point of failure and surfaced as a generic error page.
#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    BadRequest(&'static str),
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (code, error_page(message)).into_response()
    }
}

/// Attach context to a fallible operation and convert it into an internal
/// error response, logging the underlying report.
pub trait ResultExt<T> {
    fn reject(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: Into<color_eyre::Report>> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            let report = e.into();
            tracing::error!("{context}: {report:?}");
            AppError::Internal(context)
        })
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            p { a href="/" { "Back to home" } }
        },
        None,
    )
}
