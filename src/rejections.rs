use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

#[derive(Debug)]
pub enum AppError {
    Input(&'static str),
    NotFound,
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Input(_) => (StatusCode::BAD_REQUEST, "INPUT_ERROR"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Input(context) => tracing::debug!("rejected input: {context}"),
            AppError::NotFound => {}
        }

        let (code, message) = self.status_and_message();
        (code, error_page(message)).into_response()
    }
}

/// Logs the underlying error and maps it onto an [`AppError`].
pub trait ResultExt<T> {
    fn reject_input(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject_input(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{context}: {e}");
            AppError::Input(context)
        })
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            p { a href="/" { "Back to the quiz" } }
        },
    )
}
