//! Splitting of newline-delimited download requests.

/// Splits a newline-delimited request body into trimmed, non-empty URLs,
/// preserving input order.
///
/// Lines are trimmed of surrounding whitespace, so Windows line endings and
/// indented pastes are accepted.
pub fn split_urls(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
