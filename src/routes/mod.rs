//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page is a static site plus a WASM bundle; the only dynamic
//! endpoint is the tracking beacon, kept at the path the page posts to.
//! Everything that is not a route falls through to the static directory.

pub mod track;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router serving `static_dir` at `/`.
pub fn app(static_dir: &Path) -> Router {
    let site = ServeDir::new(static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/api.php", post(track::track))
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
