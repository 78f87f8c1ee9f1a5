use bytes::Bytes;
use serde::Deserialize;

use crate::backend::BackendError;
use crate::models::job::JobId;

pub const PDF_MIME: &str = "application/pdf";

/// An uploaded resume as received from the applicant's browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn is_pdf(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(PDF_MIME)
    }
}

/// Payload of one `POST /submit-resume` call. Not retained afterwards.
#[derive(Debug, Clone)]
pub struct ApplicationSubmission {
    pub name: String,
    pub email: String,
    pub job_id: JobId,
    pub resume: ResumeFile,
}

/// Response envelope of `POST /submit-resume`.
///
/// The backend answers 200 even when processing failed and reports the
/// failure in `error`, so a successful HTTP status alone proves nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
}

impl SubmissionReceipt {
    /// Turns an in-body error into `BackendError::Rejected`. Blank errors count as success.
    pub fn into_result(self) -> Result<Self, BackendError> {
        match self.error.as_deref().map(str::trim) {
            Some(reason) if !reason.is_empty() => Err(BackendError::Rejected(reason.to_string())),
            _ => Ok(self),
        }
    }
}
