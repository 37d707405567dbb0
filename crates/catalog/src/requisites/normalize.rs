use crate::util::collapse_whitespace;
use lazy_static::lazy_static;
use regex::Regex;

/// Appended to text that was cut off after a trailing "and"
pub const INCOMPLETE_MARKER: &str = "(incomplete)";

/// Phrases that state there is no requisite at all
const NO_REQUIREMENT_PHRASES: [&str; 5] = [
    "none",
    "n/a",
    "permission of instructor",
    "permission of the instructor",
    "instructor permission",
];

lazy_static! {
    static ref TRAILING_NOISE: Regex = Regex::new(r"(?:\s*[,;]|\s+(?:Print|Help))+$").unwrap();
    static ref DANGLING_AND: Regex = Regex::new(r"(?i)\band\.*$").unwrap();
}

/// Cleans up raw requisite text scraped from a course page.
///
/// Whitespace runs collapse to a single space, trailing separators and page
/// labels are dropped, and text that ends in a bare "and" is flagged with
/// [`INCOMPLETE_MARKER`] instead of being silently repaired.
///
/// # Arguments
/// * `raw` - Text following a "Prerequisite(s):" or "Corequisite(s):" label
///
/// # Returns
/// `None` if there is nothing to compile (empty text or a "no requirement"
/// phrase), otherwise the cleaned text
pub fn normalize(raw: &str) -> Option<String> {
    let collapsed = collapse_whitespace(raw);
    let text = TRAILING_NOISE.replace(&collapsed, "");
    let text = text.trim();

    if text.is_empty() || is_no_requirement(text) {
        return None;
    }

    if DANGLING_AND.is_match(text) {
        let text = text.trim_end_matches('.');
        return Some(format!("{text} {INCOMPLETE_MARKER}"));
    }

    Some(text.to_string())
}

/// Whether normalized text was flagged as truncated
pub fn is_incomplete(text: &str) -> bool {
    text.ends_with(INCOMPLETE_MARKER)
}

fn is_no_requirement(text: &str) -> bool {
    let bare = text.trim_end_matches('.').trim_end();
    NO_REQUIREMENT_PHRASES
        .iter()
        .any(|phrase| bare.eq_ignore_ascii_case(phrase))
}
