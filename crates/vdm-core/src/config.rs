use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How a successful fetch is matched to the file it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribution {
    /// Pick the most recently modified container file in the download directory.
    #[default]
    Newest,
    /// Ask yt-dlp to print the final path; fall back to `Newest` if it is unusable.
    Printed,
}

/// yt-dlp invocation settings (`[tool]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Executable name (looked up on PATH) or absolute path.
    pub program: PathBuf,
    /// Value passed to `--format`.
    pub format: String,
    /// Value passed to `--merge-output-format`; also the extension the library lists.
    pub merge_output_format: String,
    /// Output filename template, relative to the download directory.
    pub output_template: String,
    pub attribution: Attribution,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("yt-dlp"),
            format: "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best".to_string(),
            merge_output_format: "mp4".to_string(),
            output_template: "%(title)s.%(ext)s".to_string(),
            attribution: Attribution::Newest,
        }
    }
}

/// Global configuration loaded from `~/.config/vdm/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VdmConfig {
    /// Address the web front-end listens on.
    pub bind: String,
    /// Flat directory holding downloaded videos; served under `/downloads`.
    pub download_dir: PathBuf,
    /// Log file path. Defaults to `~/.local/state/vdm/vdm.log` when unset.
    pub log_file: Option<PathBuf>,
    pub tool: ToolConfig,
}

impl Default for VdmConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            download_dir: PathBuf::from("downloads"),
            log_file: None,
            tool: ToolConfig::default(),
        }
    }
}

impl VdmConfig {
    /// File extension (without dot) of the videos this configuration produces.
    pub fn container_ext(&self) -> &str {
        self.tool.merge_output_format.trim_start_matches('.')
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vdm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VdmConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VdmConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<VdmConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: VdmConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
