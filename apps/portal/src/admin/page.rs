use askama::Template;
use tracing::{debug, error};

use crate::admin::cards::CandidateCard;
use crate::backend::{BackendError, JobBoard};
use crate::listing::page::LoadingTemplate;
use crate::models::candidate::Candidate;

pub const FETCH_FAILED_NOTICE: &str = "Failed to fetch candidates";

/// Lifecycle of the admin dashboard.
#[derive(Debug)]
pub enum AdminPage {
    Loading,
    Loaded {
        candidates: Vec<Candidate>,
        notice: Option<&'static str>,
    },
}

impl AdminPage {
    /// Settles a `Loading` dashboard. A failed fetch shows no candidates and a transient notice.
    pub fn resolve(self, result: Result<Vec<Candidate>, BackendError>) -> Self {
        match self {
            AdminPage::Loading => match result {
                Ok(candidates) => {
                    debug!("Fetched {} candidates", candidates.len());
                    AdminPage::Loaded {
                        candidates,
                        notice: None,
                    }
                }
                Err(e) => {
                    error!("Error fetching candidates: {e}");
                    AdminPage::Loaded {
                        candidates: Vec::new(),
                        notice: Some(FETCH_FAILED_NOTICE),
                    }
                }
            },
            loaded => loaded,
        }
    }

    pub fn render(&self, board: &dyn JobBoard) -> Result<String, askama::Error> {
        match self {
            AdminPage::Loading => LoadingTemplate {}.render(),
            AdminPage::Loaded { candidates, notice } => AdminTemplate {
                total: candidates.len(),
                cards: candidates
                    .iter()
                    .map(|candidate| CandidateCard::new(candidate, board))
                    .collect(),
                notice: *notice,
            }
            .render(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    total: usize,
    cards: Vec<CandidateCard>,
    notice: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HttpJobBoard;
    use serde_json::json;

    fn candidate(id: i64, total: Option<f64>) -> Candidate {
        serde_json::from_value(json!({
            "id": id,
            "job_id": 1,
            "user_name": format!("Candidate {id}"),
            "user_email": format!("c{id}@example.com"),
            "resume_url": format!("/uploads/c{id}.pdf"),
            "parameter_score": total,
            "job_similarity_score": total,
            "github_score": total,
            "total_score": total
        }))
        .unwrap()
    }

    fn rendered(candidates: Vec<Candidate>) -> String {
        let board = HttpJobBoard::new("http://localhost:8000");
        AdminPage::Loading
            .resolve(Ok(candidates))
            .render(&board)
            .unwrap()
    }

    #[test]
    fn test_high_total_renders_invitation() {
        let html = rendered(vec![candidate(1, Some(72.3))]);
        assert!(html.contains("72.3"));
        assert!(html.contains("Interview Invitation Sent"));
        assert!(!html.contains("Rejection Feedback Sent"));
    }

    #[test]
    fn test_low_total_renders_rejection() {
        let html = rendered(vec![candidate(1, Some(65.0))]);
        assert!(html.contains("65.0"));
        assert!(html.contains("Rejection Feedback Sent"));
        assert!(!html.contains("Interview Invitation Sent"));
    }

    #[test]
    fn test_pending_scores_render_placeholder_without_label() {
        let html = rendered(vec![candidate(1, None)]);
        assert_eq!(html.matches("N/A").count(), 4);
        assert!(!html.contains("Interview Invitation Sent"));
        assert!(!html.contains("Rejection Feedback Sent"));
    }

    #[test]
    fn test_header_counts_applications() {
        let html = rendered(vec![candidate(1, None), candidate(2, Some(90.0))]);
        assert!(html.contains("Total Applications"));
        assert!(html.contains("Candidate 1"));
        assert!(html.contains("Candidate 2"));
    }

    #[test]
    fn test_failed_fetch_shows_notice_and_empty_list() {
        let board = HttpJobBoard::new("http://localhost:8000");
        let page = AdminPage::Loading.resolve(Err(BackendError::Rejected("boom".into())));
        match &page {
            AdminPage::Loaded { candidates, notice } => {
                assert!(candidates.is_empty());
                assert_eq!(*notice, Some(FETCH_FAILED_NOTICE));
            }
            other => panic!("expected loaded, got {other:?}"),
        }
        assert!(page.render(&board).unwrap().contains(FETCH_FAILED_NOTICE));
    }
}
