pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::admin::handlers as admin;
use crate::apply::handlers as apply;
use crate::listing::handlers as listing;
use crate::state::AppState;

/// Room for the name/email parts and multipart framing on top of the resume itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Public job board
        .route("/", get(listing::handle_list_jobs))
        .route(
            "/apply/:id",
            get(apply::handle_apply_form).post(apply::handle_submit_application),
        )
        // Admin dashboard (no auth at this layer)
        .route("/admin", get(admin::handle_dashboard))
        .route("/admin/logout", post(admin::handle_logout))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
