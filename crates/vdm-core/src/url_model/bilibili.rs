//! Bilibili `BV` identifier extraction.

/// Marker that starts a Bilibili video identifier.
pub const BV_MARKER: &str = "BV";

/// Canonical video page prefix; the identifier (with its marker) is appended.
pub const BILIBILI_VIDEO_BASE: &str = "https://www.bilibili.com/video/";

/// Returns the identifier following the first `BV` marker in `url`, without
/// the marker itself.
///
/// The identifier ends at the first `?`, `/`, or further `BV`, whichever
/// comes first, so `…/BV1abc/?p=2` yields `"1abc"`. Returns `None` when the
/// marker is absent and `Some("")` when nothing follows it.
pub fn extract_bv_id(url: &str) -> Option<&str> {
    let start = url.find(BV_MARKER)? + BV_MARKER.len();
    let rest = &url[start..];
    let rest = rest.find(BV_MARKER).map_or(rest, |next| &rest[..next]);
    let end = rest.find(|c: char| c == '?' || c == '/').unwrap_or(rest.len());
    Some(&rest[..end])
}
