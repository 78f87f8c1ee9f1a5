use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::deserialize_optional_timestamp;

/// Backend identifier of a job posting.
///
/// Route parameters only become a `JobId` through `FromStr`, which accepts
/// plain positive decimal integers. Anything else is rejected before a
/// request could be built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(i64);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid job id")]
pub struct InvalidJobId(pub String);

impl JobId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for JobId {
    type Err = InvalidJobId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidJobId(raw.to_string());
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(JobId(id)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An open position as published by the backend. Read-only on this side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub job_id: JobId,
    pub job_title: String,
    pub job_details: String,
    pub skills_requirement: String,
    pub education_requirement: String,
    pub experience_requirement: String,
    #[serde(default)]
    pub additional_requirements: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}
