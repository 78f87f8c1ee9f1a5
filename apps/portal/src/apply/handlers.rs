use axum::{
    extract::{Multipart, Path, State},
    response::Response,
};
use tracing::info;

use crate::apply::form::read_application_form;
use crate::apply::page::ApplyPage;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /apply/:id
///
/// Shows the job's details and the empty application form.
pub async fn handle_apply_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let mut page = ApplyPage::enter(&raw_id);
    if let Some(job_id) = page.pending_job() {
        page = page.job_loaded(state.board.get_job(job_id).await);
    }
    page.render()
}

/// POST /apply/:id
///
/// Validates the posted form locally and forwards it to the backend only when
/// every field passes. The body is not read when the job cannot be shown.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let mut page = ApplyPage::enter(&raw_id);
    if let Some(job_id) = page.pending_job() {
        page = page.job_loaded(state.board.get_job(job_id).await);
    }

    if page.is_ready() {
        page = match read_application_form(multipart).await {
            Ok(form) => page.submit(form),
            Err(unreadable) if unreadable.is_too_large() => {
                page.upload_too_large(unreadable.partial)
            }
            Err(unreadable) => return Err(unreadable.source.into()),
        };
    }

    let outcome = match page.pending_submission() {
        Some(submission) => {
            info!("Submitting application for job ID: {}", submission.job_id);
            Some(state.board.submit_application(submission).await)
        }
        None => None,
    };
    if let Some(result) = outcome {
        page = page.submission_finished(result);
    }

    page.render()
}
