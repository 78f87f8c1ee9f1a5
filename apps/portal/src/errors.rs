use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures a page handler cannot turn into a rendered page.
///
/// Backend failures are not in here: every view has its own fallback for
/// those (empty listing, redirect, alert) and never bubbles them up.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid form submission: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Multipart(e) => (e.status(), "INVALID_FORM", e.body_text()),
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
