//! CLI for the VDM video downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vdm_core::config::{self, VdmConfig};
use vdm_core::logging;

use commands::{run_download, run_list, run_serve};

/// Top-level CLI for VDM.
#[derive(Debug, Parser)]
#[command(name = "vdm")]
#[command(about = "VDM: web front-end for yt-dlp video downloads", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/vdm/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the web front-end.
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8000 (overrides `bind` in config).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
        /// Directory for downloaded videos (overrides `download_dir` in config).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },

    /// Download one batch of URLs and print the JSON results.
    Download {
        /// Directory for downloaded videos (overrides `download_dir` in config).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
        /// Video page URLs, processed in the order given.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// List videos in the download directory.
    List {
        /// Directory to list (overrides `download_dir` in config).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },
}

fn override_download_dir(cfg: &mut VdmConfig, download_dir: Option<PathBuf>) {
    if let Some(dir) = download_dir {
        cfg.download_dir = dir;
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };

        // Fall back to stderr so an unwritable log dir doesn't stop the server.
        if let Err(err) = logging::init_logging(cfg.log_file.as_deref()) {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable: {:#}", err);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve { bind, download_dir } => {
                if let Some(bind) = bind {
                    cfg.bind = bind;
                }
                override_download_dir(&mut cfg, download_dir);
                run_serve(cfg).await?;
            }
            CliCommand::Download { download_dir, urls } => {
                override_download_dir(&mut cfg, download_dir);
                run_download(&cfg, &urls).await?;
            }
            CliCommand::List { download_dir } => {
                override_download_dir(&mut cfg, download_dir);
                run_list(&cfg).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
