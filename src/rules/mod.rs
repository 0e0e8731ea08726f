//! Text rewrite rules for agenda entries.
//!
//! Every rule is a pure `&str -> String` function. [`TEXT_PIPELINE`] lists the
//! order in which they run over an entry's free text; later rules rely on the
//! shape produced by earlier ones (times are only dotted after date ranges have
//! been collapsed, for instance).

pub mod dates;
pub mod house_number;
pub mod markers;
pub mod place;
pub mod postcode;
pub mod punctuation;
pub mod times;

pub use dates::simplify_date_ranges;
pub use house_number::normalize_house_numbers;
pub use markers::strip_trailing_markers;
pub use place::normalize_place_name;
pub use postcode::normalize_postal_codes;
pub use punctuation::normalize_spaces_and_punctuation;
pub use times::normalize_times;

pub type Rule = fn(&str) -> String;

/// A named step of the text pipeline.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub rule: Rule,
}

pub const TEXT_PIPELINE: [Stage; 7] = [
    Stage {
        name: "postal_codes",
        rule: normalize_postal_codes,
    },
    Stage {
        name: "house_numbers",
        rule: normalize_house_numbers,
    },
    Stage {
        name: "place_names",
        rule: normalize_place_name,
    },
    Stage {
        name: "date_ranges",
        rule: simplify_date_ranges,
    },
    Stage {
        name: "times",
        rule: normalize_times,
    },
    Stage {
        name: "punctuation",
        rule: normalize_spaces_and_punctuation,
    },
    Stage {
        name: "trailing_markers",
        rule: strip_trailing_markers,
    },
];

/// Run an entry's free text through every stage of [`TEXT_PIPELINE`].
pub fn normalize_text(text: &str) -> String {
    TEXT_PIPELINE
        .iter()
        .fold(text.to_string(), |current, stage| (stage.rule)(&current))
}

/// Integer re-parse of a digit run, without overflow for long runs.
pub(crate) fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    }
}
