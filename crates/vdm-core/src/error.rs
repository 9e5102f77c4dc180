//! Per-URL and per-batch download errors.
//!
//! The `Display` text of each variant is exactly what the web page shows the
//! user, so keep the wording stable.

use thiserror::Error;

/// Everything that can go wrong while turning a URL into a file on disk.
///
/// Per-URL variants are stored in that URL's result slot; `EmptyBatch` and
/// `Request` describe a whole batch and are reported as a single entry.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The tool executable could not be found on `PATH` (or at the configured path).
    #[error("请先安装 yt-dlp: pip install yt-dlp")]
    ToolMissing,

    /// The tool ran but exited non-zero. `stderr` is what it printed.
    #[error("下载失败: {stderr}")]
    ToolFailed { code: Option<i32>, stderr: String },

    /// The tool reported success but no container file could be attributed to it.
    #[error("下载完成但未找到视频文件")]
    NoOutputFile,

    /// The request contained no usable URL.
    #[error("请提供有效的视频链接")]
    EmptyBatch,

    /// Failure before the fetch started (version probe spawn, output dir creation).
    #[error("处理出错: {0}")]
    Prepare(#[source] std::io::Error),

    /// Failure while running the fetch or inspecting its output.
    #[error("下载出错: {0}")]
    Invoke(#[source] std::io::Error),

    /// Batch-level failure outside per-URL processing (malformed body, task panic).
    #[error("发生错误: {0}")]
    Request(String),
}

impl DownloadError {
    /// Short machine-readable tag, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            DownloadError::ToolMissing => "tool_missing",
            DownloadError::ToolFailed { .. } => "tool_failed",
            DownloadError::NoOutputFile => "no_output_file",
            DownloadError::EmptyBatch => "empty_batch",
            DownloadError::Prepare(_) => "prepare",
            DownloadError::Invoke(_) => "invoke",
            DownloadError::Request(_) => "request",
        }
    }
}
