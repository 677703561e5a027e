//! Display label sanitization
//!
//! Attribute values from annotation files are free text. Labels shown on a
//! track are restricted to alphanumerics plus `_`, `-` and `.`.

/// Maximum label length in characters
pub const MAX_LABEL_LEN: usize = 64;

/// Label used when nothing printable survives sanitization
pub const UNKNOWN_LABEL: &str = "unknown";

#[inline]
fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Sanitize arbitrary text into a bounded display label
///
/// # Examples
/// ```
/// use genome_view::core::label::sanitize_label;
///
/// assert_eq!(sanitize_label("BRCA1 (human)"), "BRCA1human");
/// assert_eq!(sanitize_label("gene-1.2_a"), "gene-1.2_a");
/// assert_eq!(sanitize_label("%%%"), "unknown");
/// ```
pub fn sanitize_label(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|&c| is_label_char(c))
        .take(MAX_LABEL_LEN)
        .collect();

    if cleaned.is_empty() {
        UNKNOWN_LABEL.to_string()
    } else {
        cleaned
    }
}
