//! Slug derivation for file names and URLs.
use deunicode::deunicode;

/// Lowercase, ASCII-only, hyphen-separated identifier for a title.
///
/// German umlauts and ß keep their conventional digraph forms; everything
/// else non-ASCII goes through transliteration. Runs of non-alphanumeric
/// characters collapse into a single hyphen.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut expanded = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match ch {
            'ä' => expanded.push_str("ae"),
            'ö' => expanded.push_str("oe"),
            'ü' => expanded.push_str("ue"),
            'ß' => expanded.push_str("ss"),
            _ => expanded.push(ch),
        }
    }

    let ascii = deunicode(&expanded);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}
