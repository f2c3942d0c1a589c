//! Formatting helpers for file sizes and names.

/// Bytes per kibibyte.
pub const BYTES_PER_KIB: f64 = 1024.0;

/// Unit label shown after kibibyte sizes.
pub const KIB_LABEL: &str = "KB";

/// Format a byte count as kibibytes with one decimal place (e.g. "2.0 KB").
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1} {}", bytes as f64 / BYTES_PER_KIB, KIB_LABEL)
}

/// Lower-cased extension after the last dot in `name`, or `""` if it has none.
pub fn extension(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}
