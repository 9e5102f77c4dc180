//! URL modeling for incoming download requests.
//!
//! Splits a newline-delimited request into individual URLs and rewrites
//! Bilibili links that carry a `BV` identifier into the canonical video URL
//! yt-dlp recognises.

mod batch;
mod bilibili;

pub use batch::split_urls;
pub use bilibili::{extract_bv_id, BILIBILI_VIDEO_BASE, BV_MARKER};

use std::borrow::Cow;

/// Normalizes a single URL before it is handed to the download tool.
///
/// If `raw` contains a `BV` identifier, the result is
/// `https://www.bilibili.com/video/BV<id>`; otherwise `raw` is returned
/// unchanged. There is no further validation: a bare `BV` marker with nothing
/// after it yields `https://www.bilibili.com/video/BV`.
///
/// # Examples
///
/// - `normalize_url("https://b23.tv/BV1abc?p=2")` → `"https://www.bilibili.com/video/BV1abc"`
/// - `normalize_url("https://youtu.be/xyz")` → `"https://youtu.be/xyz"`
pub fn normalize_url(raw: &str) -> Cow<'_, str> {
    match extract_bv_id(raw) {
        Some(id) => Cow::Owned(format!("{BILIBILI_VIDEO_BASE}{BV_MARKER}{id}")),
        None => Cow::Borrowed(raw),
    }
}
