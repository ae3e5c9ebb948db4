use unicode_normalization::UnicodeNormalization;

/// Canonicalize a query or catalog field before script conversion: trim,
/// NFKC normalization, line breaks dropped, case folded.
pub fn clean(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    trimmed
        .nfkc()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .flat_map(char::to_lowercase)
        .collect()
}
