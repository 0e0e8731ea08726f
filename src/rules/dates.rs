use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

pub const MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Month name to calendar index (januari = 1).
static MONTH_INDEX: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    MONTHS
        .iter()
        .zip(1u32..)
        .map(|(name, index)| (*name, index))
        .collect()
});

const WEEKDAYS: &str = "(?:ma|di|wo|do|vr|za|zo)";

/// Suffix appended to a closing date that falls in the following year.
const YEAR_WRAP_SUFFIX: &str = "-26";

// * zo 22-6 * 14.00 uur tot zo 13-7 * 18.00 uur
static NUMERIC_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\*\s*{wd}\s+\d{{1,2}}-\d{{1,2}}\s*\*\s*[^*]*?(?:tot|t/m)\s*({wd})\s+(\d{{1,2}}-\d{{1,2}})\s*\*[^*]*",
        wd = WEEKDAYS
    ))
    .unwrap()
});

// 22 juni tot 13 juli, 28 december 2025 t/m 4 januari 2026
static MONTH_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let months = MONTHS.join("|");
    Regex::new(&format!(
        r"(?i)(\d{{1,2}})\s+({m})(?:\s+(\d{{2,4}}))?\s+(?:tot|t/m)\s+(\d{{1,2}})\s+({m})(?:\s+(\d{{2,4}}))?",
        m = months
    ))
    .unwrap()
});

pub fn month_index(name: &str) -> Option<u32> {
    MONTH_INDEX.get(name.to_lowercase().as_str()).copied()
}

/// Collapse date ranges to their closing date.
///
/// Weekday ranges keep `* t/m <weekday> D-M `, month-name ranges become
/// `* t/m D <month> [year] *`. Anything else is returned unchanged.
pub fn simplify_date_ranges(text: &str) -> String {
    let text = NUMERIC_RANGE_RE.replace_all(text, |caps: &Captures| {
        format!("* t/m {} {} ", &caps[1], &caps[2])
    });

    MONTH_RANGE_RE
        .replace_all(&text, |caps: &Captures| {
            let month_from = &caps[2];
            let day_to = &caps[4];
            let month_to = &caps[5];

            let closing = match caps.get(6) {
                Some(year) => format!("{} {} {}", day_to, month_to, year.as_str()),
                None => match (month_index(month_from), month_index(month_to)) {
                    (Some(from), Some(to)) if to < from => {
                        format!("{} {} {}", day_to, month_to, YEAR_WRAP_SUFFIX)
                    }
                    _ => format!("{} {}", day_to, month_to),
                },
            };

            format!("* t/m {} *", closing)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_index_table() {
        assert_eq!(month_index("januari"), Some(1));
        assert_eq!(month_index("December"), Some(12));
        assert_eq!(month_index("juni"), Some(6));
        assert_eq!(month_index("june"), None);
    }

    #[test]
    fn test_numeric_weekday_range() {
        assert_eq!(
            simplify_date_ranges("* zo 22-6 * 14.00 uur tot zo 13-7 * 18.00 uur"),
            "* t/m zo 13-7 "
        );
    }

    #[test]
    fn test_numeric_weekday_range_keeps_following_marker() {
        assert_eq!(
            simplify_date_ranges("Kermis * za 5-7 * 12.00 uur t/m ma 7-7 * 23.00 uur * Markt"),
            "Kermis * t/m ma 7-7 * Markt"
        );
    }

    #[test]
    fn test_month_range() {
        assert_eq!(
            simplify_date_ranges("Expositie 22 juni tot 13 juli in het museum"),
            "Expositie * t/m 13 juli * in het museum"
        );
    }

    #[test]
    fn test_month_range_with_year() {
        assert_eq!(
            simplify_date_ranges("28 december 2025 t/m 4 januari 2026"),
            "* t/m 4 januari 2026 *"
        );
    }

    #[test]
    fn test_month_range_crossing_year_gets_suffix() {
        assert_eq!(
            simplify_date_ranges("20 december tot 6 januari"),
            "* t/m 6 januari -26 *"
        );
    }

    #[test]
    fn test_month_case_is_preserved() {
        assert_eq!(
            simplify_date_ranges("1 Mei t/m 3 Juni"),
            "* t/m 3 Juni *"
        );
    }

    #[test]
    fn test_unrelated_text_untouched() {
        let text = "Zondag 22 juni om 14.00 uur";
        assert_eq!(simplify_date_ranges(text), text);
        assert_eq!(simplify_date_ranges(""), "");
    }
}
