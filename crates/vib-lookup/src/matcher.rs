//! First-match vehicle search over a dataset snapshot.
//!
//! Records are scanned in dataset order. For each record the checks run
//! in a fixed precedence (id, hex, name, model, gxt) and the first record
//! with any passing check wins. There is no ranking across records.

use vib_protocol::{RecordKey, VehicleRecord};

/// Which check selected the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Id,
    Hex,
    Name,
    Model,
    Gxt,
}

impl MatchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::Id => "id",
            MatchField::Hex => "hex",
            MatchField::Name => "name",
            MatchField::Model => "model",
            MatchField::Gxt => "gxt",
        }
    }
}

/// A matched record plus the field that matched.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub record: &'a VehicleRecord,
    pub field: MatchField,
}

/// Find the first record matching `query`.
pub fn find<'a>(dataset: &'a [VehicleRecord], query: &str) -> Option<&'a VehicleRecord> {
    find_match(dataset, query).map(|m| m.record)
}

/// Like [`find`], but also reports which field matched.
///
/// `id` and `hex` compare against `query` verbatim; `name`, `model` and
/// `gxt` contain the lower-cased query. An empty query is not rejected here.
pub fn find_match<'a>(dataset: &'a [VehicleRecord], query: &str) -> Option<Match<'a>> {
    let needle = query.to_lowercase();

    dataset.iter().find_map(|record| {
        match_record(record, query, &needle).map(|field| Match { record, field })
    })
}

fn match_record(record: &VehicleRecord, query: &str, needle: &str) -> Option<MatchField> {
    if key_equals(record.id.as_ref(), query) {
        return Some(MatchField::Id);
    }
    if key_equals(record.hex.as_ref(), query) {
        return Some(MatchField::Hex);
    }
    if contains(record.name.as_deref(), needle) {
        return Some(MatchField::Name);
    }
    if contains(record.model.as_deref(), needle) {
        return Some(MatchField::Model);
    }
    if contains(record.gxt.as_deref(), needle) {
        return Some(MatchField::Gxt);
    }
    None
}

fn key_equals(key: Option<&RecordKey>, query: &str) -> bool {
    key.is_some_and(|k| k.matches(query))
}

// Missing and empty values never take part in substring checks.
fn contains(field: Option<&str>, needle: &str) -> bool {
    match field {
        Some(value) if !value.is_empty() => value.to_lowercase().contains(needle),
        _ => false,
    }
}
