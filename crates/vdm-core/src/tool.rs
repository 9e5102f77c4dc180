//! yt-dlp adapter: builds the command lines and runs them as child processes.
//!
//! Output is captured, never streamed. There is no timeout; a fetch runs
//! until yt-dlp exits.

use crate::config::{Attribution, ToolConfig};
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Captured result of one yt-dlp run.
#[derive(Debug)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    fn from_output(output: std::process::Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Last non-empty stdout line; with `--print after_move:filepath` this is the final path.
    pub fn printed_path(&self) -> Option<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .next_back()
    }
}

/// A configured yt-dlp executable.
#[derive(Debug, Clone)]
pub struct YtDlp {
    cfg: ToolConfig,
}

impl YtDlp {
    pub fn new(cfg: ToolConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.cfg
    }

    /// Arguments for fetching `url` into `output_dir`.
    pub fn fetch_args(&self, output_dir: &Path, url: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--format".into(),
            self.cfg.format.clone().into(),
            "--merge-output-format".into(),
            self.cfg.merge_output_format.clone().into(),
            "--no-warnings".into(),
        ];
        if self.cfg.attribution == Attribution::Printed {
            args.push("--print".into());
            args.push("after_move:filepath".into());
        }
        args.push("-o".into());
        args.push(output_dir.join(&self.cfg.output_template).into_os_string());
        args.push(url.into());
        args
    }

    /// Human-readable command line for logs.
    pub fn display_command(&self, args: &[OsString]) -> String {
        let mut line = self.cfg.program.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    async fn run(&self, args: &[OsString]) -> io::Result<ToolOutput> {
        let output = Command::new(&self.cfg.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await?;
        Ok(ToolOutput::from_output(output))
    }

    /// Runs `<program> --version`.
    ///
    /// A spawn error with kind `NotFound` means yt-dlp is not installed.
    pub async fn version(&self) -> io::Result<ToolOutput> {
        self.run(&["--version".into()]).await
    }

    /// Runs the fetch for `url`, blocking this task until yt-dlp exits.
    pub async fn fetch(&self, output_dir: &Path, url: &str) -> io::Result<ToolOutput> {
        let args = self.fetch_args(output_dir, url);
        tracing::info!(command = %self.display_command(&args), "running yt-dlp");
        self.run(&args).await
    }
}
