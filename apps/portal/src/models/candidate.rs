use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::deserialize_lenient_timestamp;
use crate::models::job::JobId;

/// Total score at or above which the backend sends an interview invitation.
pub const INVITATION_THRESHOLD: f64 = 70.0;

/// An applicant together with whatever scores the backend has computed so far.
/// Every score is independently optional. `job_id` and `created_at` are display
/// only, so a missing or malformed value leaves them empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: i64,
    #[serde(default)]
    pub job_id: Option<JobId>,
    pub user_name: String,
    pub user_email: String,
    pub resume_url: String,
    #[serde(default)]
    pub parameter_score: Option<f64>,
    #[serde(default)]
    pub job_similarity_score: Option<f64>,
    #[serde(default)]
    pub github_score: Option<f64>,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub match_percentage: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

/// The notification the backend is assumed to have sent. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InterviewInvited,
    Rejected,
}

impl Outcome {
    pub fn from_total(total: f64) -> Self {
        if total >= INVITATION_THRESHOLD {
            Outcome::InterviewInvited
        } else {
            Outcome::Rejected
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::InterviewInvited => "Interview Invitation Sent",
            Outcome::Rejected => "Rejection Feedback Sent",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Outcome::InterviewInvited => "status-invited",
            Outcome::Rejected => "status-rejected",
        }
    }
}

impl Candidate {
    /// `None` while the total score is still pending.
    pub fn outcome(&self) -> Option<Outcome> {
        self.total_score
            .filter(|total| total.is_finite())
            .map(Outcome::from_total)
    }
}
