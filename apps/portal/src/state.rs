use std::sync::Arc;

use crate::backend::JobBoard;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-view data; each request fetches what it renders.
#[derive(Clone)]
pub struct AppState {
    /// The only path to the backend. `HttpJobBoard` in production.
    pub board: Arc<dyn JobBoard>,
    pub config: Config,
}
