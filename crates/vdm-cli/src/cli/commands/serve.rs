//! `vdm serve` – run the web front-end.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use vdm_core::config::VdmConfig;

use crate::server::{self, AppState};

pub async fn run_serve(cfg: VdmConfig) -> Result<()> {
    tokio::fs::create_dir_all(&cfg.download_dir)
        .await
        .with_context(|| format!("create download dir {}", cfg.download_dir.display()))?;

    let state = Arc::new(AppState::new(&cfg)?);
    let app = server::create_app(state);

    let listener = TcpListener::bind(&cfg.bind)
        .await
        .with_context(|| format!("bind {}", cfg.bind))?;
    tracing::info!(
        download_dir = %cfg.download_dir.display(),
        "vdm listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;
    tracing::info!("vdm stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("ctrl-c handler: {}", e);
        std::future::pending::<()>().await;
    }
}
