//! Affiliation line classification
//!
//! Whole-run affiliation replacement is coarse: a run that mixes an
//! affiliation with other text is replaced entirely.

/// Keywords looked for among the first three words of a candidate line
const LEADING_KEYWORDS: &[&str] = &["department", "university", "institute", "college", "dept."];

/// Keywords that must appear somewhere in a line before it is replaced
const INSTITUTION_KEYWORDS: &[&str] = &[
    "university",
    "department",
    "institute",
    "college",
    "school",
    "center",
    "centre",
];

/// Cheap pre-filter for affiliation lines
///
/// True when the trimmed text is 10 to 300 characters long and either starts
/// with a digit (including superscript footnote markers such as `¹`) or names
/// an institution within its first three words.
pub fn is_likely_affiliation(text: &str) -> bool {
    let stripped = text.trim();
    let len = stripped.chars().count();

    if !(10..=300).contains(&len) {
        return false;
    }

    if stripped.chars().next().is_some_and(is_marker_digit) {
        return true;
    }

    let first_words = stripped
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    LEADING_KEYWORDS
        .iter()
        .any(|keyword| first_words.contains(keyword))
}

/// ASCII or superscript digit, as used for affiliation footnote markers
fn is_marker_digit(c: char) -> bool {
    c.is_ascii_digit() || "⁰¹²³⁴⁵⁶⁷⁸⁹".contains(c)
}

/// Full affiliation test applied to a run's original text
///
/// Requires [`is_likely_affiliation`], an institution keyword anywhere in the
/// text, a trimmed length under 200 characters, and no terminating period
/// (which would suggest running prose).
pub fn is_affiliation_line(text: &str) -> bool {
    if !is_likely_affiliation(text) {
        return false;
    }

    let lower = text.to_lowercase();
    INSTITUTION_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
        && text.trim().chars().count() < 200
        && !text.ends_with('.')
}
