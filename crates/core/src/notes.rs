//! Scent-note phases and grouping helpers.

use serde::{Deserialize, Serialize};

/// Position of a note in a fragrance's scent pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NoteType {
    Top,
    Middle,
    Base,
}

impl NoteType {
    /// The tag as stored in `parfum_notes.note_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            NoteType::Top => "TOP",
            NoteType::Middle => "MIDDLE",
            NoteType::Base => "BASE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TOP" => Some(NoteType::Top),
            "MIDDLE" => Some(NoteType::Middle),
            "BASE" => Some(NoteType::Base),
            _ => None,
        }
    }
}

/// Notes split by phase, each group keeping its input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesByType<T> {
    pub top: Vec<T>,
    pub middle: Vec<T>,
    pub base: Vec<T>,
}

impl<T> Default for NotesByType<T> {
    fn default() -> Self {
        Self {
            top: Vec::new(),
            middle: Vec::new(),
            base: Vec::new(),
        }
    }
}

/// Partition a flat list of tagged notes into top/middle/base groups.
///
/// Notes whose tag is not recognized are dropped.
pub fn partition_notes<T, F>(notes: impl IntoIterator<Item = T>, note_type: F) -> NotesByType<T>
where
    F: Fn(&T) -> Option<NoteType>,
{
    let mut grouped = NotesByType::default();
    for note in notes {
        match note_type(&note) {
            Some(NoteType::Top) => grouped.top.push(note),
            Some(NoteType::Middle) => grouped.middle.push(note),
            Some(NoteType::Base) => grouped.base.push(note),
            None => {}
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(pair: &(&str, &str)) -> Option<NoteType> {
        NoteType::parse(pair.1)
    }

    #[test]
    fn partitions_by_stored_tag() {
        let notes = vec![
            ("Bergamot", "TOP"),
            ("Ambroxan", "MIDDLE"),
            ("Cedar", "BASE"),
        ];

        let grouped = partition_notes(notes, tag);

        assert_eq!(grouped.top, vec![("Bergamot", "TOP")]);
        assert_eq!(grouped.middle, vec![("Ambroxan", "MIDDLE")]);
        assert_eq!(grouped.base, vec![("Cedar", "BASE")]);
    }

    #[test]
    fn preserves_order_within_a_group() {
        let notes = vec![("Lemon", "TOP"), ("Vetiver", "BASE"), ("Pepper", "TOP")];

        let grouped = partition_notes(notes, tag);

        assert_eq!(grouped.top, vec![("Lemon", "TOP"), ("Pepper", "TOP")]);
    }

    #[test]
    fn drops_unrecognized_tags() {
        let notes = vec![("Musk", "HEART"), ("Iris", "MIDDLE")];

        let grouped = partition_notes(notes, tag);

        assert!(grouped.top.is_empty());
        assert_eq!(grouped.middle.len(), 1);
        assert!(grouped.base.is_empty());
    }

    #[test]
    fn note_type_round_trips_through_storage_tag() {
        for t in [NoteType::Top, NoteType::Middle, NoteType::Base] {
            assert_eq!(NoteType::parse(t.as_str()), Some(t));
        }
        assert_eq!(NoteType::parse("top"), None);
    }
}
