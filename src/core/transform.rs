use crate::core::grouping::group_by_place;
use crate::core::parser::parse_document;
use crate::core::render::render_report;
use crate::domain::model::{AgendaReport, DocumentSchema, EventRecord};
use crate::utils::error::Result;

/// Group normalized records and render them.
pub fn build_report(records: Vec<EventRecord>) -> AgendaReport {
    let groups = group_by_place(records);
    let rendered = render_report(&groups);
    AgendaReport { groups, rendered }
}

/// Convert an agenda document into the grouped text report.
///
/// Fails with [`AgendaError::ParseError`](crate::AgendaError::ParseError) when
/// the document is not well-formed; nothing is produced in that case.
pub fn transform(document: &str) -> Result<String> {
    transform_with_schema(document, &DocumentSchema::default())
}

pub fn transform_with_schema(document: &str, schema: &DocumentSchema) -> Result<String> {
    let parsed = parse_document(document, schema)?;
    Ok(build_report(parsed.records).rendered)
}
