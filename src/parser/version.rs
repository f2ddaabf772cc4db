use once_cell::sync::Lazy;
use regex::Regex;

use super::text::clean_text;

// "4.1.3", "10.0.0.1", "4.0.2 BU". Needs at least one dot so beta rounds like "17" stay out.
static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(?:\.\d+){1,3}(?: BU)?$").expect("version pattern is valid")
});

const PATCH_PREFIX: &str = "patch ";

/// Extracts the canonical version from a patch cell.
///
/// `"Patch 4.1.3"` becomes `"4.1.3"` and `"Patch 4.0.2 BU"` becomes
/// `"4.0.2 BU"`. Anything that is not a dotted version returns `None`.
pub fn extract_version(text: &str) -> Option<String> {
    let text = clean_text(text);

    let candidate = match text.get(..PATCH_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PATCH_PREFIX) => text[PATCH_PREFIX.len()..].trim(),
        _ => text.as_str(),
    };

    if VERSION_PATTERN.is_match(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}
