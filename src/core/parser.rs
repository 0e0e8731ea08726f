use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::domain::model::{DocumentSchema, EventRecord, ParsedDocument};
use crate::rules::{normalize_place_name, normalize_text};
use crate::utils::error::{AgendaError, Result};

/// Element as kept in memory: its name, the text before its first child, and its children.
#[derive(Debug)]
struct Node {
    name: String,
    text: String,
    children: Vec<usize>,
}

/// Read the document into a flat list of elements.
///
/// Elements are stored in the order their start tags appear, so walking the
/// list front to back is a pre-order walk of the tree.
fn build_tree(document: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(document);
    let mut nodes: Vec<Node> = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    let mut root_closed = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            AgendaError::parse(format!("{} (at byte {})", e, reader.buffer_position()))
        })?;

        match event {
            Event::Start(start) => {
                let index = open_element(&mut nodes, &open, &start, root_closed)?;
                open.push(index);
            }
            Event::Empty(start) => {
                open_element(&mut nodes, &open, &start, root_closed)?;
                if open.is_empty() {
                    root_closed = true;
                }
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                match open.pop() {
                    Some(index) if nodes[index].name == name => {}
                    Some(index) => {
                        return Err(AgendaError::parse(format!(
                            "closing tag </{}> does not match <{}>",
                            name, nodes[index].name
                        )));
                    }
                    None => {
                        return Err(AgendaError::parse(format!(
                            "unexpected closing tag </{}>",
                            name
                        )));
                    }
                }
                if open.is_empty() {
                    root_closed = true;
                }
            }
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map_err(|e| AgendaError::parse(format!("invalid text content: {}", e)))?;
                append_text(&mut nodes, &open, &value)?;
            }
            Event::CData(cdata) => {
                let value = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                append_text(&mut nodes, &open, &value)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(&index) = open.last() {
        return Err(AgendaError::parse(format!(
            "unclosed element <{}>",
            nodes[index].name
        )));
    }
    if nodes.is_empty() {
        return Err(AgendaError::parse("no root element found"));
    }

    Ok(nodes)
}

fn open_element(
    nodes: &mut Vec<Node>,
    open: &[usize],
    start: &BytesStart,
    root_closed: bool,
) -> Result<usize> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    // Attribute syntax (quoting, `=`, duplicates) is only checked while iterating.
    for attribute in start.attributes() {
        attribute.map_err(|e| {
            AgendaError::parse(format!("invalid attribute in <{}>: {}", name, e))
        })?;
    }

    if open.is_empty() && root_closed {
        return Err(AgendaError::parse(format!(
            "element <{}> found after the root element",
            name
        )));
    }

    let index = nodes.len();
    nodes.push(Node {
        name,
        text: String::new(),
        children: Vec::new(),
    });
    if let Some(&parent) = open.last() {
        nodes[parent].children.push(index);
    }
    Ok(index)
}

fn append_text(nodes: &mut [Node], open: &[usize], value: &str) -> Result<()> {
    match open.last() {
        Some(&index) => {
            let node = &mut nodes[index];
            if node.children.is_empty() {
                node.text.push_str(value);
            }
            Ok(())
        }
        None if value.trim().is_empty() => Ok(()),
        None => Err(AgendaError::parse("text found outside the root element")),
    }
}

fn child<'a>(nodes: &'a [Node], parent: &Node, name: &str) -> Option<&'a Node> {
    parent
        .children
        .iter()
        .map(|&index| &nodes[index])
        .find(|node| node.name == name)
}

/// Extract every event from an agenda document.
///
/// Events may sit at any depth. An event lacking its place, genre or text child
/// is skipped and counted. The place name and the free text are normalized here;
/// the genre is only trimmed.
pub fn parse_document(document: &str, schema: &DocumentSchema) -> Result<ParsedDocument> {
    let nodes = build_tree(document)?;
    let mut parsed = ParsedDocument::default();

    for node in nodes.iter().filter(|node| node.name == schema.event) {
        let place = child(&nodes, node, &schema.place);
        let genre = child(&nodes, node, &schema.genre);
        let text = child(&nodes, node, &schema.text);

        match (place, genre, text) {
            (Some(place), Some(genre), Some(text)) => parsed.records.push(EventRecord {
                place: normalize_place_name(place.text.trim()),
                genre: genre.text.trim().to_string(),
                text: normalize_text(text.text.trim()),
            }),
            _ => {
                parsed.skipped += 1;
                debug!(
                    "Skipping <{}> without {}/{}/{} children",
                    schema.event, schema.place, schema.genre, schema.text
                );
            }
        }
    }

    debug!(
        "Parsed {} events ({} skipped) from {} elements",
        parsed.records.len(),
        parsed.skipped,
        nodes.len()
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(document: &str) -> Result<ParsedDocument> {
        parse_document(document, &DocumentSchema::default())
    }

    #[test]
    fn test_parse_basic_events() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<agenda>
  <evenement>
    <plaats>Gemeente Stein</plaats>
    <genre> Markt </genre>
    <tekst>9 uur concert</tekst>
  </evenement>
  <evenement>
    <plaats>Beek</plaats>
    <genre>Kermis</genre>
    <tekst>12u feest</tekst>
  </evenement>
</agenda>"#;

        let parsed = parse(xml).unwrap();

        assert_eq!(parsed.skipped, 0);
        assert_eq!(
            parsed.records,
            vec![
                EventRecord {
                    place: "Stein".to_string(),
                    genre: "Markt".to_string(),
                    text: "9.00 uur concert".to_string(),
                },
                EventRecord {
                    place: "Beek".to_string(),
                    genre: "Kermis".to_string(),
                    text: "12.00 uur feest".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_nested_events_found_in_document_order() {
        let xml = r#"<export><maand><evenement><plaats>Born</plaats><genre>A</genre><tekst>x</tekst></evenement></maand>
<evenement><plaats>Beek</plaats><genre>B</genre><tekst>y</tekst></evenement></export>"#;

        let parsed = parse(xml).unwrap();
        let places: Vec<&str> = parsed.records.iter().map(|r| r.place.as_str()).collect();
        assert_eq!(places, vec!["Born", "Beek"]);
    }

    #[test]
    fn test_missing_field_is_skipped() {
        let xml = r#"<agenda>
  <evenement><plaats>Stein</plaats><tekst>zonder genre</tekst></evenement>
  <evenement><plaats>Beek</plaats><genre>Markt</genre><tekst>met genre</tekst></evenement>
</agenda>"#;

        let parsed = parse(xml).unwrap();
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].place, "Beek");
    }

    #[test]
    fn test_empty_fields_default_to_empty_strings() {
        let xml = "<agenda><evenement><plaats/><genre></genre><tekst/></evenement></agenda>";

        let parsed = parse(xml).unwrap();
        assert_eq!(
            parsed.records,
            vec![EventRecord {
                place: String::new(),
                genre: String::new(),
                text: String::new(),
            }]
        );
    }

    #[test]
    fn test_entities_and_cdata() {
        let xml = "<agenda><evenement><plaats>Stein</plaats><genre>Eten &amp; drinken</genre>\
                   <tekst><![CDATA[Proeverij <gratis>]]></tekst></evenement></agenda>";

        let parsed = parse(xml).unwrap();
        assert_eq!(parsed.records[0].genre, "Eten & drinken");
        assert_eq!(parsed.records[0].text, "Proeverij <gratis>");
    }

    #[test]
    fn test_only_direct_children_count() {
        let xml = "<agenda><evenement><plaats>Stein</plaats><genre>Markt</genre>\
                   <info><tekst>te diep</tekst></info></evenement></agenda>";

        let parsed = parse(xml).unwrap();
        assert_eq!(parsed.skipped, 1);
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_custom_schema() {
        let schema = DocumentSchema {
            event: "event".to_string(),
            place: "place".to_string(),
            genre: "genre".to_string(),
            text: "text".to_string(),
        };
        let xml = "<events><event><place>Valkenburg aan de Geul</place><genre>Markt</genre><text>8-10 uur</text></event></events>";

        let parsed = parse_document(xml, &schema).unwrap();
        assert_eq!(parsed.records[0].place, "Valkenburg");
        assert_eq!(parsed.records[0].text, "8.00-10.00 uur");
    }

    #[test]
    fn test_unterminated_tag_is_an_error() {
        let err = parse("<agenda><evenement><plaats>Stein</plaats>").unwrap_err();
        assert!(matches!(err, AgendaError::ParseError { .. }));
    }

    #[test]
    fn test_mismatched_tags_are_an_error() {
        let err = parse("<agenda><evenement></agenda></evenement>").unwrap_err();
        assert!(matches!(err, AgendaError::ParseError { .. }));
    }

    const EVENT: &str =
        "<evenement><plaats>Stein</plaats><genre>Markt</genre><tekst>9 uur</tekst></evenement>";

    #[test]
    fn test_well_formed_attributes_accepted() {
        let xml = format!("<agenda versie=\"2\" bron='vvv'>{}</agenda>", EVENT);
        assert_eq!(parse(&xml).unwrap().records.len(), 1);
    }

    #[test]
    fn test_unquoted_attribute_is_an_error() {
        let err = parse(&format!("<agenda x=1>{}</agenda>", EVENT)).unwrap_err();
        assert!(matches!(err, AgendaError::ParseError { .. }));
    }

    #[test]
    fn test_attribute_without_value_is_an_error() {
        let err = parse(&format!("<agenda x>{}</agenda>", EVENT)).unwrap_err();
        assert!(matches!(err, AgendaError::ParseError { .. }));
    }

    #[test]
    fn test_duplicate_attribute_is_an_error() {
        let err = parse(&format!("<agenda x='1' x='2'>{}</agenda>", EVENT)).unwrap_err();
        assert!(matches!(err, AgendaError::ParseError { .. }));
    }

    #[test]
    fn test_broken_attribute_on_empty_element() {
        let xml = "<agenda><evenement><plaats/><genre x=1/><tekst/></evenement></agenda>";
        assert!(parse(xml).is_err());
    }

    #[test]
    fn test_not_a_document() {
        assert!(parse("").is_err());
        assert!(parse("gewoon tekst").is_err());
        assert!(parse("<a/><b/>").is_err());
    }
}
