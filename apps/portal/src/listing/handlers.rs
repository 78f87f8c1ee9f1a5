use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::listing::page::ListingPage;
use crate::state::AppState;

/// GET /
///
/// Lists every open position. Backend failures degrade to an empty listing.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = ListingPage::Loading.resolve(state.board.list_jobs().await);
    Ok(Html(page.render()?))
}
