//! Backend client: the single point of entry for every call to the scoring backend.
//!
//! ARCHITECTURAL RULE: views never build HTTP requests themselves. They hold an
//! `Arc<dyn JobBoard>` and go through it for listing jobs, fetching one job,
//! listing candidates and submitting applications.
//!
//! Each call is exactly one request. There are no retries, no timeouts and no caching.
use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::candidate::Candidate;
use crate::models::job::{Job, JobId};
use crate::models::submission::{ApplicationSubmission, SubmissionReceipt};

/// Storage prefix the backend puts in front of saved resume paths.
const UPLOADS_PREFIX: &str = "/uploads/";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend responded with {status} {status_text}")]
    Network { status: u16, status_text: String },

    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Everything the portal needs from the backend.
#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Base URL the client talks to, without a trailing slash.
    fn base_url(&self) -> &str;

    async fn list_jobs(&self) -> Result<Vec<Job>, BackendError>;

    async fn get_job(&self, id: JobId) -> Result<Job, BackendError>;

    async fn list_candidates(&self) -> Result<Vec<Candidate>, BackendError>;

    /// Sends the multipart application. The receipt can still carry an
    /// in-body error; see `SubmissionReceipt::into_result`.
    async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<SubmissionReceipt, BackendError>;

    fn resume_download_url(&self, path: &str) -> String {
        resume_download_url(self.base_url(), path)
    }
}

/// Builds the backend download link for a stored resume path.
pub fn resume_download_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/download/{}", path.replacen(UPLOADS_PREFIX, "", 1))
}

/// reqwest-backed `JobBoard` talking JSON and multipart to the backend REST API.
#[derive(Clone)]
pub struct HttpJobBoard {
    client: Client,
    base_url: String,
}

impl HttpJobBoard {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        debug!("GET {path}");
        let response = self.client.get(self.url(path)).send().await?;
        read_json(response).await
    }
}

/// Decodes a list body row by row. A row that does not fit `T` is logged and
/// skipped so one bad record cannot hide the rest. `null` reads as empty.
fn decode_rows<T: DeserializeOwned>(rows: Option<Vec<serde_json::Value>>, kind: &str) -> Vec<T> {
    rows.unwrap_or_default()
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping malformed {kind} row: {e}");
                None
            }
        })
        .collect()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Network {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl JobBoard for HttpJobBoard {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, BackendError> {
        let rows = self.get_json("/job-details").await?;
        Ok(decode_rows(rows, "job"))
    }

    async fn get_job(&self, id: JobId) -> Result<Job, BackendError> {
        self.get_json(&format!("/job-details/{}", id.get())).await
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>, BackendError> {
        let rows = self.get_json("/candidates").await?;
        Ok(decode_rows(rows, "candidate"))
    }

    async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<SubmissionReceipt, BackendError> {
        let resume = multipart::Part::bytes(submission.resume.bytes.to_vec())
            .file_name(submission.resume.file_name.clone())
            .mime_str(&submission.resume.content_type)?;

        let form = multipart::Form::new()
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("job_id", submission.job_id.to_string())
            .part("resume", resume);

        debug!("POST /submit-resume (job {})", submission.job_id);
        let response = self
            .client
            .post(self.url("/submit-resume"))
            .multipart(form)
            .send()
            .await?;

        read_json(response).await
    }
}
