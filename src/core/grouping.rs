use std::collections::HashMap;

use crate::domain::model::{EventRecord, PlaceGroup};

/// Bucket records by place, case-insensitively.
///
/// A group keeps the spelling of the first record that created it and the
/// records in the order they were given. Groups come back sorted by lowercased
/// place name.
pub fn group_by_place(records: Vec<EventRecord>) -> Vec<PlaceGroup> {
    let mut groups: Vec<PlaceGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = *slots.entry(record.place.to_lowercase()).or_insert_with(|| {
            groups.push(PlaceGroup {
                place_name: record.place.clone(),
                events: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].events.push(record);
    }

    groups.sort_by_cached_key(|group| group.place_name.to_lowercase());
    groups
}
