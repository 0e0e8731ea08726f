use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+([,;:!?])").unwrap());
static NO_SPACE_AFTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([,;:!?])(\S)").unwrap());

/// Collapse whitespace and space `, ; : ! ?` as in running text.
///
/// The period is not touched: it separates hours from minutes.
pub fn normalize_spaces_and_punctuation(text: &str) -> String {
    let text = WHITESPACE_RE.replace_all(text, " ");
    let text = SPACE_BEFORE_RE.replace_all(&text, "${1}");
    let text = NO_SPACE_AFTER_RE.replace_all(&text, "${1} ${2}");
    text.trim().to_string()
}
