use crate::backend::JobBoard;
use crate::models::candidate::{Candidate, Outcome};

/// Placeholder for a score the backend has not produced yet.
pub const SCORE_PENDING: &str = "N/A";

/// Display-ready view of one candidate on the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateCard {
    pub anchor: String,
    pub initial: String,
    pub name: String,
    pub email: String,
    pub job_id: String,
    pub parameter_score: String,
    pub job_match_score: String,
    pub github_score: String,
    pub total_score: String,
    pub match_percentage: Option<String>,
    pub download_url: String,
    pub download_name: String,
    pub applied_on: Option<String>,
    pub outcome: Option<Outcome>,
}

impl CandidateCard {
    pub fn new(candidate: &Candidate, board: &dyn JobBoard) -> Self {
        Self {
            anchor: format!("candidate-{}", candidate.id),
            initial: candidate
                .user_name
                .trim()
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect::<String>())
                .unwrap_or_else(|| "?".to_string()),
            name: candidate.user_name.clone(),
            email: candidate.user_email.clone(),
            job_id: candidate
                .job_id
                .map_or_else(|| SCORE_PENDING.to_string(), |id| id.to_string()),
            parameter_score: format_score(candidate.parameter_score),
            job_match_score: format_score(candidate.job_similarity_score),
            github_score: format_score(candidate.github_score),
            total_score: format_score(candidate.total_score),
            match_percentage: candidate
                .match_percentage
                .filter(|pct| pct.is_finite())
                .map(|pct| format!("{pct:.0}%")),
            download_url: board.resume_download_url(&candidate.resume_url),
            download_name: format!("{}_resume.pdf", candidate.user_name),
            applied_on: candidate
                .created_at
                .map(|ts| ts.format("%b %-d, %Y").to_string()),
            outcome: candidate.outcome(),
        }
    }
}

/// One decimal place, or `N/A` while the score is pending.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) if value.is_finite() => format!("{value:.1}"),
        _ => SCORE_PENDING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HttpJobBoard;
    use serde_json::json;

    fn candidate(name: &str, total: Option<f64>) -> Candidate {
        serde_json::from_value(json!({
            "id": 9,
            "job_id": 3,
            "user_name": name,
            "user_email": "lin@example.com",
            "resume_url": "/uploads/lin_resume.pdf",
            "parameter_score": 80.34,
            "job_similarity_score": null,
            "github_score": 41.0,
            "total_score": total,
            "match_percentage": 72.6,
            "created_at": "2025-06-03T14:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(72.3)), "72.3");
        assert_eq!(format_score(Some(65.0)), "65.0");
        assert_eq!(format_score(Some(f64::NAN)), SCORE_PENDING);
        assert_eq!(format_score(None), SCORE_PENDING);
    }

    #[test]
    fn test_card_formats_each_score_independently() {
        let board = HttpJobBoard::new("http://localhost:8000");
        let card = CandidateCard::new(&candidate("lin", Some(72.3)), &board);

        assert_eq!(card.anchor, "candidate-9");
        assert_eq!(card.job_id, "3");
        assert_eq!(card.initial, "L");
        assert_eq!(card.applied_on.as_deref(), Some("Jun 3, 2025"));
        assert_eq!(card.parameter_score, "80.3");
        assert_eq!(card.job_match_score, SCORE_PENDING);
        assert_eq!(card.github_score, "41.0");
        assert_eq!(card.total_score, "72.3");
        assert_eq!(card.match_percentage.as_deref(), Some("73%"));
        assert_eq!(card.outcome, Some(Outcome::InterviewInvited));
    }

    #[test]
    fn test_card_download_link() {
        let board = HttpJobBoard::new("http://localhost:8000");
        let card = CandidateCard::new(&candidate("Lin Wei", None), &board);

        assert_eq!(card.download_url, "http://localhost:8000/download/lin_resume.pdf");
        assert_eq!(card.download_name, "Lin Wei_resume.pdf");
        assert!(card.outcome.is_none());
    }

    #[test]
    fn test_missing_job_id_and_date_render_empty() {
        let board = HttpJobBoard::new("http://localhost:8000");
        let c: Candidate = serde_json::from_value(json!({
            "id": 11,
            "job_id": null,
            "user_name": "Noor",
            "user_email": "noor@example.com",
            "resume_url": "/uploads/noor.pdf",
            "created_at": "31/12/2024"
        }))
        .unwrap();
        let card = CandidateCard::new(&c, &board);

        assert_eq!(card.job_id, SCORE_PENDING);
        assert!(card.applied_on.is_none());
    }

    #[test]
    fn test_blank_name_gets_placeholder_initial() {
        let board = HttpJobBoard::new("http://localhost:8000");
        let card = CandidateCard::new(&candidate("  ", None), &board);
        assert_eq!(card.initial, "?");
    }
}
