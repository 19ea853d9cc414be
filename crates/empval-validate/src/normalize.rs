//! Canonical form for city and builder lookups.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase, accent-stripped, trimmed form of `text`.
///
/// Applies Unicode compatibility decomposition (NFKD), drops combining
/// marks, lowercases, and trims surrounding whitespace, so that
/// "  São Paulo " and "sao paulo" key the same mapping entry. Pure and
/// infallible.
pub fn normalize(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_string()
}

/// [`normalize`] with absent input mapped to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
