//! Stand-in for yt-dlp used by integration tests.
//!
//! Writes a small `/bin/sh` script that answers `--version`, finds the `-o`
//! template and the trailing URL, then runs a scenario-specific body with
//! `$dir` (output directory) and `$url` set.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vdm_core::config::{Attribution, VdmConfig};

const PRELUDE: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "2024.12.06"
  exit 0
fi
out=""
prev=""
url=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then out="$arg"; fi
  prev="$arg"
  url="$arg"
done
dir=$(dirname "$out")
"#;

/// Writes `<dir>/<last URL path segment>.mp4`, prints its path, exits 0.
pub const WRITES_FILE: &str = r#"name=$(basename "$url")
printf 'video-bytes' > "$dir/$name.mp4"
echo "[download] Destination: $dir/$name.mp4"
echo "$dir/$name.mp4"
"#;

/// Fails with a yt-dlp style error on stderr.
pub const FAILS: &str = r#"echo "ERROR: [BiliBili] unable to download video data: HTTP Error 404" >&2
exit 1
"#;

/// Claims success without producing anything.
pub const WRITES_NOTHING: &str = "exit 0\n";

/// Fails for URLs containing `bad`, otherwise behaves like [`WRITES_FILE`].
pub const FAILS_ON_BAD: &str = r#"case "$url" in
  *bad*) echo "ERROR: Unsupported URL: $url" >&2; exit 2 ;;
esac
name=$(basename "$url")
printf 'video-bytes' > "$dir/$name.mp4"
echo "$dir/$name.mp4"
"#;

/// Records every invocation's URL into `calls.log` next to the output dir.
pub const RECORDS_CALLS: &str = r#"echo "$url" >> "$dir/../calls.log"
name=$(basename "$url")
printf 'x' > "$dir/$name.mp4"
echo "$dir/$name.mp4"
"#;

pub struct FakeTool {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn install(body: &str) -> FakeTool {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yt-dlp");
    fs::write(&path, format!("{PRELUDE}{body}")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    FakeTool { _dir: dir, path }
}

pub fn config(download_dir: &Path, tool: &FakeTool, attribution: Attribution) -> VdmConfig {
    let mut cfg = VdmConfig::default();
    cfg.download_dir = download_dir.to_path_buf();
    cfg.tool.program = tool.path.clone();
    cfg.tool.attribution = attribution;
    cfg
}
