use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::strip_leading_zeros;

static HOUSE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\s*([A-Za-z])\b").unwrap());

/// Join a house number and its letter suffix: `12 A` becomes `12a`, `07b` becomes `7b`.
pub fn normalize_house_numbers(text: &str) -> String {
    HOUSE_NUMBER_RE
        .replace_all(text, |caps: &Captures| {
            format!(
                "{}{}",
                strip_leading_zeros(&caps[1]),
                caps[2].to_lowercase()
            )
        })
        .into_owned()
}
