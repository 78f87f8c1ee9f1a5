use askama::Template;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::{error, info, warn};

use crate::apply::form::ApplicationForm;
use crate::apply::validation::{into_submission, FieldErrors, Invalid, RESUME_TOO_LARGE};
use crate::backend::BackendError;
use crate::errors::AppError;
use crate::listing::page::LoadingTemplate;
use crate::models::job::{Job, JobId};
use crate::models::submission::{ApplicationSubmission, SubmissionReceipt};

pub const SUBMIT_FAILED_ALERT: &str = "Failed to submit resume. Please try again.";

/// Lifecycle of the application page.
///
/// `Loading -> Ready -> Submitting -> Submitted`, with `Submitting -> Ready`
/// when the backend refuses the application. A malformed id or a failed job
/// lookup ends in `Redirect` instead of `Ready`. Transitions called from the
/// wrong state leave the page unchanged.
#[derive(Debug)]
pub enum ApplyPage {
    Loading {
        job_id: JobId,
    },
    Ready {
        job: Job,
        form: ApplicationForm,
        errors: FieldErrors,
        alert: Option<&'static str>,
    },
    Submitting {
        job: Job,
        submission: ApplicationSubmission,
    },
    Submitted {
        job: Job,
    },
    Redirect,
}

impl ApplyPage {
    /// Entry point for a route parameter. Malformed ids never reach `Loading`.
    pub fn enter(raw_id: &str) -> Self {
        match raw_id.parse::<JobId>() {
            Ok(job_id) => ApplyPage::Loading { job_id },
            Err(e) => {
                warn!("{e}; redirecting to job listing");
                ApplyPage::Redirect
            }
        }
    }

    /// The job whose details still need fetching, if any.
    pub fn pending_job(&self) -> Option<JobId> {
        match self {
            ApplyPage::Loading { job_id } => Some(*job_id),
            _ => None,
        }
    }

    /// The application waiting to be sent, if any.
    pub fn pending_submission(&self) -> Option<&ApplicationSubmission> {
        match self {
            ApplyPage::Submitting { submission, .. } => Some(submission),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ApplyPage::Ready { .. })
    }

    pub fn job_loaded(self, result: Result<Job, BackendError>) -> Self {
        match self {
            ApplyPage::Loading { job_id } => match result {
                Ok(job) => ApplyPage::Ready {
                    job,
                    form: ApplicationForm::default(),
                    errors: FieldErrors::default(),
                    alert: None,
                },
                Err(e) => {
                    error!("Error fetching job {job_id}: {e}");
                    ApplyPage::Redirect
                }
            },
            other => other,
        }
    }

    /// Validates the posted form. Invalid input stays in `Ready` with inline errors.
    pub fn submit(self, form: ApplicationForm) -> Self {
        match self {
            ApplyPage::Ready { job, .. } => match into_submission(form, job.job_id) {
                Ok(submission) => ApplyPage::Submitting { job, submission },
                Err(Invalid { form, errors }) => ApplyPage::Ready {
                    job,
                    form,
                    errors,
                    alert: None,
                },
            },
            other => other,
        }
    }

    /// The upload ran past the body limit. Stays in `Ready` with a resume
    /// error and whatever name and email were read before the cut-off.
    pub fn upload_too_large(self, partial: ApplicationForm) -> Self {
        match self {
            ApplyPage::Ready { job, .. } => {
                warn!("Resume upload for job {} exceeded the size limit", job.job_id);
                ApplyPage::Ready {
                    job,
                    form: ApplicationForm {
                        name: partial.name,
                        email: partial.email,
                        resume: None,
                    },
                    errors: FieldErrors {
                        resume: Some(RESUME_TOO_LARGE),
                        ..FieldErrors::default()
                    },
                    alert: None,
                }
            }
            other => other,
        }
    }

    /// Settles a `Submitting` page. Both HTTP failures and in-body errors go back to `Ready`.
    pub fn submission_finished(self, result: Result<SubmissionReceipt, BackendError>) -> Self {
        match self {
            ApplyPage::Submitting { job, submission } => {
                match result.and_then(SubmissionReceipt::into_result) {
                    Ok(receipt) => {
                        info!(
                            "Application for job {} ({}) accepted: {}",
                            job.job_id,
                            receipt.job_title.as_deref().unwrap_or(&job.job_title),
                            receipt.message.as_deref().unwrap_or("no message")
                        );
                        ApplyPage::Submitted { job }
                    }
                    Err(e) => {
                        error!("Error submitting resume: {e}");
                        ApplyPage::Ready {
                            job,
                            form: ApplicationForm {
                                name: submission.name,
                                email: submission.email,
                                resume: None,
                            },
                            errors: FieldErrors::default(),
                            alert: Some(SUBMIT_FAILED_ALERT),
                        }
                    }
                }
            }
            other => other,
        }
    }

    pub fn render(&self) -> Result<Response, AppError> {
        let html = match self {
            ApplyPage::Loading { .. } => LoadingTemplate {}.render()?,
            ApplyPage::Ready {
                job,
                form,
                errors,
                alert,
            } => ApplyTemplate::new(job, &form.name, &form.email, errors, *alert, false).render()?,
            ApplyPage::Submitting { job, submission } => {
                let no_errors = FieldErrors::default();
                ApplyTemplate::new(job, &submission.name, &submission.email, &no_errors, None, true)
                    .render()?
            }
            ApplyPage::Submitted { job } => SubmittedTemplate { job }.render()?,
            ApplyPage::Redirect => return Ok(Redirect::to("/").into_response()),
        };
        Ok(Html(html).into_response())
    }
}

#[derive(Template)]
#[template(path = "apply.html")]
struct ApplyTemplate<'a> {
    job: &'a Job,
    additional: Option<&'a str>,
    name: &'a str,
    email: &'a str,
    errors: &'a FieldErrors,
    alert: Option<&'a str>,
    submitting: bool,
}

impl<'a> ApplyTemplate<'a> {
    fn new(
        job: &'a Job,
        name: &'a str,
        email: &'a str,
        errors: &'a FieldErrors,
        alert: Option<&'a str>,
        submitting: bool,
    ) -> Self {
        Self {
            job,
            additional: job
                .additional_requirements
                .as_deref()
                .filter(|extra| !extra.trim().is_empty()),
            name,
            email,
            errors,
            alert,
            submitting,
        }
    }
}

#[derive(Template)]
#[template(path = "submitted.html")]
struct SubmittedTemplate<'a> {
    job: &'a Job,
}
