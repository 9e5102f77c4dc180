//! HTTP front-end: page, download API and static files.

mod handlers;
mod page;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vdm_core::config::VdmConfig;
use vdm_core::library::DOWNLOADS_ROUTE;
use vdm_core::orchestrator::Downloader;

pub use page::IndexPage;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub downloader: Arc<Downloader>,
    pub page: IndexPage,
}

impl AppState {
    pub fn new(cfg: &VdmConfig) -> Result<Self> {
        Ok(Self {
            downloader: Arc::new(Downloader::new(cfg)),
            page: IndexPage::new()?,
        })
    }
}

pub fn create_app(state: SharedState) -> Router {
    let downloads = ServeDir::new(state.downloader.download_dir());
    Router::new()
        .route("/", get(handlers::home))
        .route("/download", post(handlers::download))
        .route("/api/videos", get(handlers::videos))
        .route("/healthcheck", get(health_check))
        .nest_service(DOWNLOADS_ROUTE, downloads)
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// axum handler for any request that fails to match the router routes.
/// This implementation responds with HTTP status code NOT FOUND (404).
pub async fn fallback(uri: axum::http::Uri) -> impl axum::response::IntoResponse {
    tracing::debug!(%uri, "no route");
    (axum::http::StatusCode::NOT_FOUND, uri.to_string())
}

pub async fn health_check() -> Result<String, axum::http::StatusCode> {
    Ok("Health : Ok".into())
}
