//! HTTP routes served next to the Dioxus app.

use std::sync::Arc;

use axum::{extract::State, response::Redirect, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub application_url: Arc<str>,
}

impl ServerState {
    pub fn new(config: &Config) -> Self {
        Self {
            application_url: Arc::from(config.application_url.as_str()),
        }
    }
}

/// GET / - send the browser into the single-page app
pub async fn index_handler(State(state): State<ServerState>) -> Redirect {
    tracing::debug!(to = %state.application_url, "redirecting to application");
    Redirect::to(&state.application_url)
}

/// Routes owned by the server rather than the client router.
pub fn router(config: &Config) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(ServerState::new(config))
}
