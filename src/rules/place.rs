use regex::Regex;
use std::sync::LazyLock;

/// Known spellings of municipalities in the export, checked in this order.
static PLACE_ALIASES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bUrmond\s+Gemeente\s+Stein\b", "Urmond"),
        (r"(?i)\bValkenburg\s+aan\s+de\s+Geul\b", "Valkenburg"),
        (r"(?i)\bValkenburg\s+a/d\s+Geul\b", "Valkenburg"),
        (r"(?i)\bElsoo\s+Lb\b", "Elsloo"),
        (r"(?i)\bGemeente\s+Stein\b", "Stein"),
    ]
    .into_iter()
    .map(|(pattern, canonical)| (Regex::new(pattern).unwrap(), canonical))
    .collect()
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Rewrite place-name variants to their canonical form and collapse whitespace.
///
/// Used for the place field itself and, as a pipeline stage, for place names
/// mentioned inside the free text.
pub fn normalize_place_name(text: &str) -> String {
    let mut result = text.trim().to_string();
    for (pattern, canonical) in PLACE_ALIASES.iter() {
        result = pattern.replace_all(&result, *canonical).into_owned();
    }
    WHITESPACE_RE.replace_all(&result, " ").trim().to_string()
}
