use askama::Template;
use tracing::error;

use crate::backend::BackendError;
use crate::models::job::Job;

/// Lifecycle of the job listing page.
#[derive(Debug)]
pub enum ListingPage {
    Loading,
    Loaded(Vec<Job>),
}

impl ListingPage {
    /// Settles a `Loading` page. A failed fetch is logged and shown as an empty listing.
    pub fn resolve(self, result: Result<Vec<Job>, BackendError>) -> Self {
        match self {
            ListingPage::Loading => match result {
                Ok(jobs) => ListingPage::Loaded(jobs),
                Err(e) => {
                    error!("Error fetching jobs: {e}");
                    ListingPage::Loaded(Vec::new())
                }
            },
            loaded => loaded,
        }
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        match self {
            ListingPage::Loading => LoadingTemplate {}.render(),
            ListingPage::Loaded(jobs) => ListingTemplate {
                blurb: openings_blurb(jobs.len()),
                jobs,
            }
            .render(),
        }
    }
}

/// Intro sentence that follows the product pitch on the listing page.
pub fn openings_blurb(count: usize) -> String {
    if count == 1 {
        "Explore our current opening and take the next step in your career journey.".to_string()
    } else {
        format!("Explore our {count} open positions and take the next step in your career journey.")
    }
}

#[derive(Template)]
#[template(path = "listing.html")]
struct ListingTemplate<'a> {
    blurb: String,
    jobs: &'a [Job],
}

/// Spinner shown while a page's data is still on its way.
#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {}
