//! GFF attribute column handling
//!
//! Derives a display name from the `key=value;key=value` column.

use crate::core::label::{sanitize_label, UNKNOWN_LABEL};

/// Keys consulted for a display name, highest priority first
pub const NAME_KEYS: [&str; 4] = ["Name", "gene", "locus_tag", "ID"];

/// Characters of raw attribute text used when no name key is present
pub const FALLBACK_PREFIX_LEN: usize = 32;

/// Split an attribute column into trimmed `(key, value)` pairs
///
/// Pieces without `=` are ignored. Only the first `=` separates key from
/// value, so values may contain `=`.
pub fn parse_attributes(attr: &str) -> Vec<(&str, &str)> {
    attr.split(';')
        .filter_map(|piece| piece.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect()
}

/// Look up an attribute value; a repeated key resolves to its last value
pub fn attribute_value<'a>(pairs: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    pairs.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Derive a sanitized display name from an attribute column
///
/// # Examples
/// ```
/// use genome_view::formats::attributes::name_from_attributes;
///
/// assert_eq!(name_from_attributes("ID=gene0001;Name=thrL"), "thrL");
/// assert_eq!(name_from_attributes("ID=cds-1;locus_tag=b0001"), "b0001");
/// assert_eq!(name_from_attributes(""), "unknown");
/// ```
pub fn name_from_attributes(attr: &str) -> String {
    let pairs = parse_attributes(attr);

    for key in NAME_KEYS {
        if let Some(value) = attribute_value(&pairs, key) {
            if !value.is_empty() {
                return sanitize_label(value);
            }
        }
    }

    if attr.is_empty() {
        return sanitize_label(UNKNOWN_LABEL);
    }
    let prefix: String = attr.chars().take(FALLBACK_PREFIX_LEN).collect();
    sanitize_label(&prefix)
}
