/// Remove `*` markers (and the whitespace around them) from the end of the text.
pub fn strip_trailing_markers(text: &str) -> String {
    let mut result = text.trim_end();
    while let Some(rest) = result.strip_suffix('*') {
        result = rest.trim_end();
    }
    result.to_string()
}
