//! `vdm list` – show videos in the download directory.

use anyhow::{Context, Result};
use vdm_core::config::VdmConfig;
use vdm_core::library;

pub async fn run_list(cfg: &VdmConfig) -> Result<()> {
    let entries = library::list_library(&cfg.download_dir, cfg.container_ext())
        .await
        .with_context(|| format!("list {}", cfg.download_dir.display()))?;
    if entries.is_empty() {
        println!("No videos in {}.", cfg.download_dir.display());
    } else {
        println!("{:<10} {}", "SIZE", "TITLE");
        for e in entries {
            println!("{:<10} {}", e.size, e.title);
        }
    }
    Ok(())
}
