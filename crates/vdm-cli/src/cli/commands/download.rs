//! `vdm download <url>...` – run one batch from the command line.

use anyhow::Result;
use vdm_core::config::VdmConfig;
use vdm_core::orchestrator::{DownloadReport, Downloader};

/// Downloads `urls` as a single batch and prints the results as JSON, in the
/// same shape the web front-end returns. Fails if any URL failed.
pub async fn run_download(cfg: &VdmConfig, urls: &[String]) -> Result<()> {
    let downloader = Downloader::new(cfg);
    let reports: Vec<DownloadReport> = match downloader.download_request(&urls.join("\n")).await {
        Ok(results) => results.iter().map(DownloadReport::from).collect(),
        Err(err) => vec![DownloadReport::failure(&err)],
    };
    println!("{}", serde_json::to_string_pretty(&reports)?);

    let failed = reports
        .iter()
        .filter(|r| matches!(r, DownloadReport::Failure { .. }))
        .count();
    if failed > 0 {
        anyhow::bail!("{} of {} download(s) failed", failed, reports.len());
    }
    Ok(())
}
