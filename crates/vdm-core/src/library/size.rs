//! Human-readable byte sizes (decimal units).

const BASE: f64 = 1000.0;
const SUFFIXES: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count with decimal (SI) units and one decimal place.
///
/// - `0` → `"0 Bytes"`, `1` → `"1 Byte"`, `999` → `"999 Bytes"`
/// - `1500` → `"1.5 kB"`, `1_000_000` → `"1.0 MB"`
pub fn natural_size(bytes: u64) -> String {
    if bytes == 1 {
        return "1 Byte".to_string();
    }
    if (bytes as f64) < BASE {
        return format!("{bytes} Bytes");
    }
    let value = bytes as f64;
    let mut unit = BASE;
    for suffix in SUFFIXES {
        unit *= BASE;
        if value < unit {
            return format!("{:.1} {}", BASE * value / unit, suffix);
        }
    }
    format!("{:.1} {}", BASE * value / unit, SUFFIXES[SUFFIXES.len() - 1])
}
