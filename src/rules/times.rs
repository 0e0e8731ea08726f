use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::strip_leading_zeros;

// 10. 00 -> 10.00
static DOT_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\.\s*(\d{2})").unwrap());

// 10-14.30 uur
static HOUR_TO_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([01]?\d|2[0-3])-(\d{1,2}\.\d{2})\s*uur\b").unwrap());

// 8-10 uur
static HOUR_TO_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([01]?\d|2[0-3])-(\d{1,2})\s*uur\b").unwrap());

// 9 uur
static BARE_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([01]?\d|2[0-3])\s*uur\b").unwrap());

// 12u
static SHORT_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([01]?\d|2[0-3])u\b").unwrap());

/// Replace every match of `pattern`, except matches directly preceded by a dot.
///
/// A dot in front means the digits are the minutes of a time that is already
/// formatted (`15.35 uur`).
fn replace_unless_after_dot<F>(pattern: &Regex, text: &str, rewrite: F) -> String
where
    F: Fn(&Captures) -> String,
{
    pattern
        .replace_all(text, |caps: &Captures| {
            let start = caps.get(0).map_or(0, |m| m.start());
            if text[..start].ends_with('.') {
                caps[0].to_string()
            } else {
                rewrite(caps)
            }
        })
        .into_owned()
}

/// Write clock times as `H.MM uur`.
///
/// Minutes are never changed and a time that already has minutes is never
/// given a second `.00`.
pub fn normalize_times(text: &str) -> String {
    let text = DOT_SPACE_RE.replace_all(text, "${1}.${2}");

    let text = replace_unless_after_dot(&HOUR_TO_TIME_RE, &text, |caps| {
        format!("{}.00-{} uur", strip_leading_zeros(&caps[1]), &caps[2])
    });

    let text = replace_unless_after_dot(&HOUR_TO_HOUR_RE, &text, |caps| {
        format!(
            "{}.00-{}.00 uur",
            strip_leading_zeros(&caps[1]),
            strip_leading_zeros(&caps[2])
        )
    });

    let text = replace_unless_after_dot(&BARE_HOUR_RE, &text, |caps| {
        format!("{}.00 uur", strip_leading_zeros(&caps[1]))
    });

    replace_unless_after_dot(&SHORT_HOUR_RE, &text, |caps| {
        format!("{}.00 uur", strip_leading_zeros(&caps[1]))
    })
}
