//! Batch download orchestration.
//!
//! A batch is processed strictly in order, one yt-dlp run at a time, and every
//! URL gets exactly one result. Failures are captured per URL and never stop
//! the rest of the batch. Batches themselves are serialized by a gate because
//! the download directory is shared and attribution by modification time
//! would otherwise race.

use crate::config::{Attribution, VdmConfig};
use crate::error::DownloadError;
use crate::library::{self, VideoFile};
use crate::tool::{ToolOutput, YtDlp};
use crate::url_model::{normalize_url, split_urls};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::instrument;

/// A file produced by a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedVideo {
    pub title: String,
    pub filename: String,
    pub size_bytes: u64,
    /// Human-readable size, e.g. `"12.3 MB"`.
    pub size: String,
}

impl From<VideoFile> for DownloadedVideo {
    fn from(video: VideoFile) -> Self {
        let size = video.size();
        Self {
            title: video.title,
            filename: video.filename,
            size_bytes: video.size_bytes,
            size,
        }
    }
}

/// Outcome for one URL of a batch.
pub type DownloadResult = Result<DownloadedVideo, DownloadError>;

/// JSON shape of a [`DownloadResult`] as returned to the browser.
///
/// Success: `{"title", "filepath", "filesize", "status": "success"}`.
/// Failure: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DownloadReport {
    Success {
        title: String,
        filepath: String,
        filesize: String,
        status: &'static str,
    },
    Failure {
        error: String,
    },
}

impl DownloadReport {
    pub fn failure(err: &DownloadError) -> Self {
        DownloadReport::Failure {
            error: err.to_string(),
        }
    }
}

impl From<&DownloadResult> for DownloadReport {
    fn from(result: &DownloadResult) -> Self {
        match result {
            Ok(video) => DownloadReport::Success {
                title: video.title.clone(),
                filepath: video.filename.clone(),
                filesize: video.size.clone(),
                status: "success",
            },
            Err(err) => DownloadReport::failure(err),
        }
    }
}

/// Runs yt-dlp for batches of URLs against one download directory.
pub struct Downloader {
    download_dir: PathBuf,
    container_ext: String,
    tool: YtDlp,
    batch_gate: Mutex<()>,
}

impl Downloader {
    pub fn new(cfg: &VdmConfig) -> Self {
        Self {
            download_dir: cfg.download_dir.clone(),
            container_ext: cfg.container_ext().to_string(),
            tool: YtDlp::new(cfg.tool.clone()),
            batch_gate: Mutex::new(()),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn container_ext(&self) -> &str {
        &self.container_ext
    }

    /// Splits a newline-delimited request and downloads every URL in it.
    ///
    /// Returns [`DownloadError::EmptyBatch`] if no non-blank line remains.
    pub async fn download_request(&self, raw: &str) -> Result<Vec<DownloadResult>, DownloadError> {
        let urls = split_urls(raw);
        tracing::info!(count = urls.len(), urls = ?urls, "parsed download request");
        if urls.is_empty() {
            tracing::warn!("no valid URL supplied");
            return Err(DownloadError::EmptyBatch);
        }
        Ok(self.download_batch(&urls).await)
    }

    /// Downloads `urls` one after another. The result has the same length and
    /// order as `urls`.
    pub async fn download_batch(&self, urls: &[String]) -> Vec<DownloadResult> {
        let _gate = self.batch_gate.lock().await;
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            let result = self.download_one(url).await;
            match &result {
                Ok(video) => tracing::info!(%url, file = %video.filename, size = %video.size, "download finished"),
                Err(err) => tracing::error!(%url, kind = err.kind(), "download failed: {}", err),
            }
            results.push(result);
        }
        results
    }

    /// Downloads a single URL, waiting for any running batch to finish first.
    pub async fn download(&self, url: &str) -> DownloadResult {
        let _gate = self.batch_gate.lock().await;
        self.download_one(url).await
    }

    #[instrument(skip_all, fields(url = %raw_url))]
    async fn download_one(&self, raw_url: &str) -> DownloadResult {
        let url = normalize_url(raw_url);
        tracing::info!(normalized = %url, "starting download");

        self.probe_tool().await?;

        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(DownloadError::Prepare)?;
        tracing::debug!(dir = %self.download_dir.display(), "download directory ready");

        let output = self
            .tool
            .fetch(&self.download_dir, &url)
            .await
            .map_err(DownloadError::Invoke)?;
        if !output.status.success() {
            tracing::error!(status = %output.status, stderr = %output.stderr, "yt-dlp failed");
            return Err(DownloadError::ToolFailed {
                code: output.status.code(),
                stderr: output.stderr,
            });
        }
        tracing::debug!(stdout = %output.stdout, "yt-dlp output");

        let video = self.attribute(&output).await?;
        Ok(video.into())
    }

    async fn probe_tool(&self) -> Result<(), DownloadError> {
        match self.tool.version().await {
            Ok(out) if out.status.success() => {
                tracing::info!(version = %out.stdout.trim(), "yt-dlp version");
                Ok(())
            }
            Ok(out) => {
                tracing::warn!(status = %out.status, stderr = %out.stderr.trim(), "yt-dlp --version exited non-zero");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::error!(program = %self.tool.config().program.display(), "yt-dlp is not installed");
                Err(DownloadError::ToolMissing)
            }
            Err(e) => Err(DownloadError::Prepare(e)),
        }
    }

    /// Finds the file a successful fetch produced.
    async fn attribute(&self, output: &ToolOutput) -> Result<VideoFile, DownloadError> {
        if self.tool.config().attribution == Attribution::Printed {
            if let Some(video) = self.printed_video(output).await {
                return Ok(video);
            }
            tracing::debug!("printed path unusable; falling back to newest file");
        }
        library::newest_video(&self.download_dir, &self.container_ext)
            .await
            .map_err(DownloadError::Invoke)?
            .ok_or_else(|| {
                tracing::error!(dir = %self.download_dir.display(), "no downloaded video file found");
                DownloadError::NoOutputFile
            })
    }

    async fn printed_video(&self, output: &ToolOutput) -> Option<VideoFile> {
        let printed = Path::new(output.printed_path()?);
        let parent = tokio::fs::canonicalize(printed.parent()?).await.ok()?;
        let dir = tokio::fs::canonicalize(&self.download_dir).await.ok()?;
        if parent != dir || printed.extension()? != self.container_ext.as_str() {
            return None;
        }
        VideoFile::inspect(printed).await.ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_missing_tool(dir: &Path) -> VdmConfig {
        let mut cfg = VdmConfig::default();
        cfg.download_dir = dir.to_path_buf();
        cfg.tool.program = PathBuf::from("/nonexistent/vdm-test/yt-dlp");
        cfg
    }

    #[tokio::test]
    async fn empty_request_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(&config_with_missing_tool(dir.path()));
        let err = downloader.download_request(" \n\t\n").await.unwrap_err();
        assert!(matches!(err, DownloadError::EmptyBatch));
    }

    #[tokio::test]
    async fn missing_tool_fails_each_url_independently() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(&config_with_missing_tool(dir.path()));
        let results = downloader
            .download_request("https://x.com/BV1abc?p=2\n\nhttps://x.com/BV1abc/\nhttps://youtu.be/x")
            .await
            .unwrap();
        assert_eq!(results.len(), 3);
        for r in &results {
            assert!(matches!(r, Err(DownloadError::ToolMissing)));
        }
    }

    #[test]
    fn report_shapes() {
        let ok: DownloadResult = Ok(DownloadedVideo {
            title: "clip".to_string(),
            filename: "clip.mp4".to_string(),
            size_bytes: 1500,
            size: "1.5 kB".to_string(),
        });
        assert_eq!(
            serde_json::to_value(DownloadReport::from(&ok)).unwrap(),
            serde_json::json!({
                "title": "clip",
                "filepath": "clip.mp4",
                "filesize": "1.5 kB",
                "status": "success"
            })
        );
        let err: DownloadResult = Err(DownloadError::NoOutputFile);
        assert_eq!(
            serde_json::to_value(DownloadReport::from(&err)).unwrap(),
            serde_json::json!({"error": "下载完成但未找到视频文件"})
        );
    }
}
