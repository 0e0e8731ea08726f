/// Decode an uploaded agenda export.
///
/// UTF-8 is tried first. Exports saved by older tools are Latin-1, so invalid UTF-8 falls
/// back to mapping every byte onto the code point of the same value, which cannot fail.
pub fn decode_document(bytes: &[u8]) -> String {
    let decoded = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(
                "Input is not valid UTF-8 (at byte {}), decoding as Latin-1",
                e.valid_up_to()
            );
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passes_through() {
        assert_eq!(decode_document("Café 't Pleintje".as_bytes()), "Café 't Pleintje");
    }

    #[test]
    fn test_latin1_fallback() {
        // "Caf\xe9" is Latin-1 for "Café"
        assert_eq!(decode_document(b"Caf\xe9"), "Café");
    }

    #[test]
    fn test_bom_is_dropped() {
        assert_eq!(decode_document(b"\xef\xbb\xbf<agenda/>"), "<agenda/>");
    }
}
