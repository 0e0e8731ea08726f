use crate::domain::model::PlaceGroup;

/// Render the grouped events in the DTP import format.
///
/// The `<SU>` tag is opened for every event and never closed; the layout
/// software that reads this format expects it that way.
pub fn render_report(groups: &[PlaceGroup]) -> String {
    let mut lines = vec!["<body>".to_string()];

    for group in groups {
        lines.push(format!("<l_region>{}</l_region>", group.place_name));
        for event in &group.events {
            lines.push("<EP>".to_string());
            lines.push("<l_info>".to_string());
            lines.push(format!("<bold>{}</bold>", event.genre));
            lines.push(format!("<SU>{}", event.text));
            lines.push("</l_info>".to_string());
        }
    }

    lines.push("</body>".to_string());
    lines.join("\n")
}
