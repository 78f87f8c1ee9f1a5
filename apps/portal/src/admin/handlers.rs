use axum::{
    extract::State,
    response::{Html, Redirect},
};
use tracing::info;

use crate::admin::page::AdminPage;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /admin
///
/// Candidate dashboard. There is no authentication in front of it.
pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = AdminPage::Loading.resolve(state.board.list_candidates().await);
    Ok(Html(page.render(state.board.as_ref())?))
}

/// POST /admin/logout
///
/// No session exists at this layer, so logging out is just a trip home.
pub async fn handle_logout() -> Redirect {
    info!("Admin logout requested");
    Redirect::to("/")
}
