use std::{path::Path, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    docs::{dto::ApiDoc, handler::api_docs},
    health::handler::health,
    state::ServerState,
    summarize::handler::summarize,
};

/// Relay routes plus the static UI as fallback for every other path.
pub fn router(state: Arc<ServerState>, public_dir: &Path) -> Router {
    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/summarize", post(summarize))
        .route("/health", get(health))
        .route("/docs", get(api_docs))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
