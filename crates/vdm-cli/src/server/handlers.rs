use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use vdm_core::error::DownloadError;
use vdm_core::library::{self, LibraryEntry};
use vdm_core::orchestrator::DownloadReport;

use super::SharedState;

/// Body of `POST /download`. A missing `urls` field counts as empty.
#[derive(Debug, Deserialize)]
pub struct DownloadBody {
    #[serde(default)]
    pub urls: String,
}

type HandlerError = (StatusCode, String);

fn internal(context: &str, err: impl std::fmt::Display) -> HandlerError {
    tracing::error!("{}: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("{}: {}", context, err),
    )
}

async fn library_entries(state: &SharedState) -> Result<Vec<LibraryEntry>, HandlerError> {
    let downloader = &state.downloader;
    library::list_library(downloader.download_dir(), downloader.container_ext())
        .await
        .map_err(|e| internal("list downloads", e))
}

/// `GET /` – the page with the submit form and the library listing.
pub async fn home(State(state): State<SharedState>) -> Result<Html<String>, HandlerError> {
    let videos = library_entries(&state).await?;
    let html = state
        .page
        .render(&videos)
        .map_err(|e| internal("render page", e))?;
    Ok(Html(html))
}

/// `GET /api/videos` – the library listing as JSON.
pub async fn videos(
    State(state): State<SharedState>,
) -> Result<Json<Vec<LibraryEntry>>, HandlerError> {
    Ok(Json(library_entries(&state).await?))
}

/// `POST /download` – runs one batch and returns one report per URL.
///
/// The body is parsed as JSON whatever `Content-Type` says. Always answers
/// 200 with a JSON array; request-level problems become a single-element
/// array holding the error.
pub async fn download(State(state): State<SharedState>, body: Bytes) -> Json<Vec<DownloadReport>> {
    tracing::info!("=== download request ===");
    let body: DownloadBody = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            let err = DownloadError::Request(e.to_string());
            tracing::error!(kind = err.kind(), "rejected download request: {}", err);
            return Json(vec![DownloadReport::failure(&err)]);
        }
    };
    tracing::debug!(urls = %body.urls, "received download request");

    // The batch runs on its own task; other requests keep being served.
    let downloader = Arc::clone(&state.downloader);
    let task = tokio::spawn(async move { downloader.download_request(&body.urls).await });
    let reports = match task.await {
        Ok(Ok(results)) => results.iter().map(DownloadReport::from).collect(),
        Ok(Err(err)) => vec![DownloadReport::failure(&err)],
        Err(join_err) => {
            let err = DownloadError::Request(join_err.to_string());
            tracing::error!(kind = err.kind(), "download task failed: {}", err);
            vec![DownloadReport::failure(&err)]
        }
    };
    Json(reports)
}
