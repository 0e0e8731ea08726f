use agenda_export::normalize_text;
use agenda_export::rules::{
    normalize_house_numbers, normalize_place_name, normalize_postal_codes, normalize_times,
    strip_trailing_markers,
};

#[test]
fn test_postal_codes() {
    assert_eq!(normalize_postal_codes("6191AB"), "6191 AB");
    assert_eq!(normalize_postal_codes("6191 ab"), "6191 AB");
}

#[test]
fn test_house_numbers() {
    assert_eq!(normalize_house_numbers("12A"), "12a");
    assert_eq!(normalize_house_numbers("07b"), "7b");
}

#[test]
fn test_times() {
    assert_eq!(normalize_times("9 uur"), "9.00 uur");
    assert_eq!(normalize_times("8-10 uur"), "8.00-10.00 uur");
    assert_eq!(normalize_times("15.35 uur"), "15.35 uur");
    assert_eq!(normalize_times("12u"), "12.00 uur");
}

#[test]
fn test_place_aliases() {
    assert_eq!(normalize_place_name("Gemeente Stein"), "Stein");
    assert_eq!(normalize_place_name("Sittard"), "Sittard");
}

#[test]
fn test_trailing_markers() {
    assert_eq!(strip_trailing_markers("tekst * *"), "tekst");
}

#[test]
fn test_realistic_entries_are_idempotent() {
    let entries = [
        "Zomerkermis op de Markt 07A, 6171eh Gemeente Stein * za 5-7 * 14 uur t/m ma 7-7 * 23 uur",
        "Tentoonstelling 15 november tot 12 januari , open 10-17 uur",
        "Wandeling vanaf Valkenburg aan de Geul , start 9. 30 uur ! Info:VVV",
        "Optreden 20u , zaal open 19.30 uur * *",
    ];

    for entry in entries {
        let once = normalize_text(entry);
        assert_eq!(normalize_text(&once), once, "entry: {}", entry);
    }
}

#[test]
fn test_year_wrapping_exhibition() {
    assert_eq!(
        normalize_text("Tentoonstelling 15 november tot 12 januari , open 10-17 uur"),
        "Tentoonstelling * t/m 12 januari -26 *, open 10.00-17.00 uur"
    );
}
