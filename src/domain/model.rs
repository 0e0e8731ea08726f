use serde::{Deserialize, Serialize};

/// One listing entry taken from the agenda export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Normalized place name
    pub place: String,
    /// Category label, trimmed only
    pub genre: String,
    /// Free text after the full rewrite pipeline
    pub text: String,
}

/// All events that share a place name, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceGroup {
    pub place_name: String,
    pub events: Vec<EventRecord>,
}

/// Result of parsing a document: kept records plus how many were dropped.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub records: Vec<EventRecord>,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct AgendaReport {
    pub groups: Vec<PlaceGroup>,
    pub rendered: String,
}

impl AgendaReport {
    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|g| g.events.len()).sum()
    }
}

/// Element names used by the agenda export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSchema {
    pub event: String,
    pub place: String,
    pub genre: String,
    pub text: String,
}

impl Default for DocumentSchema {
    fn default() -> Self {
        Self {
            event: "evenement".to_string(),
            place: "plaats".to_string(),
            genre: "genre".to_string(),
            text: "tekst".to_string(),
        }
    }
}
