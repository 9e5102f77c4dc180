//! The download library: a read-only view over the download directory.
//!
//! Nothing is persisted besides the files themselves. Every listing rescans
//! the directory, so files added or removed by hand show up immediately.

mod size;

pub use size::natural_size;

use serde::Serialize;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// URL prefix under which the download directory is served.
pub const DOWNLOADS_ROUTE: &str = "/downloads";

/// A container file found in the download directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    /// Bare file name, e.g. `My Video.mp4`.
    pub filename: String,
    /// File name without extension.
    pub title: String,
    pub size_bytes: u64,
    pub modified: SystemTime,
}

impl VideoFile {
    /// Reads metadata for `path`. Returns `Ok(None)` if it is not a regular file.
    pub async fn inspect(path: &Path) -> io::Result<Option<Self>> {
        let meta = tokio::fs::metadata(path).await?;
        if !meta.is_file() {
            return Ok(None);
        }
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return Ok(None),
        };
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| filename.clone());
        Ok(Some(Self {
            filename,
            title,
            size_bytes: meta.len(),
            modified: meta.modified()?,
        }))
    }

    /// Human-readable size, e.g. `"12.3 MB"`.
    pub fn size(&self) -> String {
        natural_size(self.size_bytes)
    }
}

/// One row of the library listing as shown on the page and by `/api/videos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    pub title: String,
    /// Link under [`DOWNLOADS_ROUTE`] with the file name percent-encoded,
    /// e.g. `/downloads/My%20Video.mp4`.
    #[serde(rename = "filepath")]
    pub path: String,
    #[serde(rename = "filesize")]
    pub size: String,
}

impl From<&VideoFile> for LibraryEntry {
    fn from(video: &VideoFile) -> Self {
        Self {
            title: video.title.clone(),
            path: format!("{}/{}", DOWNLOADS_ROUTE, urlencoding::encode(&video.filename)),
            size: video.size(),
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

/// Lists regular files in `dir` (non-recursive) whose extension is exactly
/// `ext`, in directory iteration order.
pub async fn scan_videos(dir: &Path, ext: &str) -> io::Result<Vec<VideoFile>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut videos = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !has_extension(&path, ext) {
            continue;
        }
        match VideoFile::inspect(&path).await {
            Ok(Some(video)) => videos.push(video),
            Ok(None) => {}
            // Removed between read_dir and stat.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(videos)
}

/// Returns the most recently modified container file in `dir`.
///
/// On equal modification times the first one seen wins. This is a heuristic
/// for "the file the last download produced" and is only reliable while a
/// single batch writes to the directory at a time.
pub async fn newest_video(dir: &Path, ext: &str) -> io::Result<Option<VideoFile>> {
    let videos = scan_videos(dir, ext).await?;
    Ok(videos.into_iter().fold(None, |best: Option<VideoFile>, v| match best {
        Some(b) if b.modified >= v.modified => Some(b),
        _ => Some(v),
    }))
}

/// Builds the library listing, sorted by file name so repeated calls over an
/// unchanged directory return identical results. A missing directory lists as empty.
pub async fn list_library(dir: &Path, ext: &str) -> io::Result<Vec<LibraryEntry>> {
    let mut videos = match scan_videos(dir, ext).await {
        Ok(v) => v,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e),
    };
    videos.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(videos.iter().map(LibraryEntry::from).collect())
}
