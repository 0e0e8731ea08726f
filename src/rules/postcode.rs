use regex::{Captures, Regex};
use std::sync::LazyLock;

static POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\s*([A-Za-z]{2})\b").unwrap());

/// Format Dutch postal codes as `DDDD LL`.
pub fn normalize_postal_codes(text: &str) -> String {
    POSTCODE_RE
        .replace_all(text, |caps: &Captures| {
            format!("{} {}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_postcode() {
        assert_eq!(normalize_postal_codes("6191AB"), "6191 AB");
    }

    #[test]
    fn test_lowercase_postcode() {
        assert_eq!(normalize_postal_codes("6191 ab"), "6191 AB");
    }

    #[test]
    fn test_postcode_inside_address() {
        assert_eq!(
            normalize_postal_codes("Markt 1, 6171eh Stein"),
            "Markt 1, 6171 EH Stein"
        );
    }

    #[test]
    fn test_non_matching_text_untouched() {
        assert_eq!(normalize_postal_codes("in 2024 begonnen"), "in 2024 begonnen");
        assert_eq!(normalize_postal_codes("12345AB"), "12345AB");
        assert_eq!(normalize_postal_codes("6191ABC"), "6191ABC");
    }
}
