//! # Chord Queries
//!
//! Filtering and grouping over exported chord records.
//!
//! Records come either from a CSV export on disk ([`load_csv`]) or straight
//! from the catalog ([`ChordEngine::catalog_records`]); both produce the same
//! [`ChordRecord`] shape.
//!
//! ## Example
//! ```rust
//! use chordgen::{ChordEngine, ChordQuery};
//!
//! let records = ChordEngine::new().catalog_records();
//! let query = ChordQuery::new()
//!     .chord_type("Dominant")
//!     .chord_extension("Dominant 7th");
//! let dom7 = query.filter(&records);
//! assert_eq!(dom7.len(), 17);
//! ```

use crate::csv::{parse_records, ChordRecord};
use crate::error::ChordError;
use std::collections::BTreeMap;
use std::path::Path;

/// Optional filters; an unset filter matches everything.
///
/// - `chord_type`: exact match on the coarse type
/// - `chord_extension`: exact match on the fine extension
/// - `contains_note`: substring match on the joined notes field, so `"C"`
///   also matches rows containing `"C#"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordQuery {
    pub chord_type: Option<String>,
    pub chord_extension: Option<String>,
    pub contains_note: Option<String>,
}

impl ChordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chord_type(mut self, chord_type: impl Into<String>) -> Self {
        self.chord_type = Some(chord_type.into());
        self
    }

    pub fn chord_extension(mut self, extension: impl Into<String>) -> Self {
        self.chord_extension = Some(extension.into());
        self
    }

    pub fn contains_note(mut self, note: impl Into<String>) -> Self {
        self.contains_note = Some(note.into());
        self
    }

    pub fn matches(&self, record: &ChordRecord) -> bool {
        if let Some(t) = &self.chord_type {
            if &record.chord_type != t {
                return false;
            }
        }
        if let Some(ext) = &self.chord_extension {
            if &record.chord_extension != ext {
                return false;
            }
        }
        if let Some(note) = &self.contains_note {
            if !record.notes.contains(note.as_str()) {
                return false;
            }
        }
        true
    }

    /// Matching records, in input order
    pub fn filter<'a>(&self, records: &'a [ChordRecord]) -> Vec<&'a ChordRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Read a CSV export back into records
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<ChordRecord>, ChordError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ChordError::io(path, e))?;
    parse_records(&content)
}

/// Records grouped three ways, every level in sorted key order
#[derive(Debug, Clone, Default)]
pub struct ChordSummary<'a> {
    pub by_type: BTreeMap<&'a str, Vec<&'a ChordRecord>>,
    pub by_extension: BTreeMap<&'a str, Vec<&'a ChordRecord>>,
    pub by_type_and_extension: BTreeMap<&'a str, BTreeMap<&'a str, Vec<&'a ChordRecord>>>,
}

impl<'a> ChordSummary<'a> {
    pub fn new(records: &'a [ChordRecord]) -> Self {
        let mut summary = ChordSummary::default();
        for record in records {
            summary
                .by_type
                .entry(record.chord_type.as_str())
                .or_default()
                .push(record);
            summary
                .by_extension
                .entry(record.chord_extension.as_str())
                .or_default()
                .push(record);
            summary
                .by_type_and_extension
                .entry(record.chord_type.as_str())
                .or_default()
                .entry(record.chord_extension.as_str())
                .or_default()
                .push(record);
        }
        summary
    }

    /// (type, count) pairs in type order
    pub fn type_counts(&self) -> Vec<(&'a str, usize)> {
        self.by_type.iter().map(|(k, v)| (*k, v.len())).collect()
    }

    /// (extension, count) pairs in extension order
    pub fn extension_counts(&self) -> Vec<(&'a str, usize)> {
        self.by_extension.iter().map(|(k, v)| (*k, v.len())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ChordEngine;

    #[test]
    fn test_empty_query_matches_all() {
        let records = ChordEngine::new().catalog_records();
        assert_eq!(ChordQuery::new().filter(&records).len(), records.len());
    }

    #[test]
    fn test_type_and_extension_filters() {
        let records = ChordEngine::new().catalog_records();

        let dom7 = ChordQuery::new()
            .chord_type("Dominant")
            .chord_extension("Dominant 7th")
            .filter(&records);
        assert_eq!(dom7.len(), 17);
        assert!(dom7.iter().all(|r| r.name.ends_with('7')));

        let minor9 = ChordQuery::new()
            .chord_type("Minor")
            .chord_extension("Minor 9th")
            .filter(&records);
        assert_eq!(minor9.len(), 17);

        // "Triad" spans four qualities: major, minor, diminished, augmented
        let triads = ChordQuery::new().chord_extension("Triad").filter(&records);
        assert_eq!(triads.len(), 4 * 17);

        let suspended = ChordQuery::new().chord_type("Suspended").filter(&records);
        assert_eq!(suspended.len(), 2 * 17);
    }

    #[test]
    fn test_filters_are_exact() {
        let records = ChordEngine::new().catalog_records();
        assert!(ChordQuery::new().chord_type("dominant").filter(&records).is_empty());
        assert!(ChordQuery::new().chord_extension("Dominant").filter(&records).is_empty());
    }

    #[test]
    fn test_contains_note_is_substring() {
        let records = ChordEngine::new().catalog_records();
        let cs = ChordQuery::new().contains_note("C#").filter(&records);
        assert!(!cs.is_empty());
        assert!(cs.iter().all(|r| r.notes.contains("C#")));

        // Plain "C" also hits every C# row
        let c = ChordQuery::new().contains_note("C").filter(&records);
        assert!(c.len() > cs.len());
        assert!(cs.iter().all(|r| c.contains(r)));
    }

    #[test]
    fn test_summary_counts() {
        let records = ChordEngine::new().catalog_records();
        let summary = ChordSummary::new(&records);

        assert_eq!(
            summary.type_counts(),
            vec![
                ("Augmented", 2 * 17),
                ("Diminished", 3 * 17),
                ("Dominant", 4 * 17),
                ("Major", 5 * 17),
                ("Minor", 6 * 17),
                ("Suspended", 2 * 17),
            ]
        );

        let extensions = summary.extension_counts();
        assert_eq!(extensions.iter().map(|(_, n)| n).sum::<usize>(), records.len());
        assert!(extensions.contains(&("6th", 2 * 17)));
        assert!(extensions.contains(&("Triad", 4 * 17)));

        let major = &summary.by_type_and_extension["Major"];
        assert_eq!(major.len(), 5);
        assert_eq!(major["Triad"].len(), 17);
    }

    #[test]
    fn test_load_csv_round_trip() {
        let engine = ChordEngine::new();
        let path = std::env::temp_dir().join(format!("chordgen_query_{}.csv", std::process::id()));
        engine.save_csv(&path).unwrap();

        let loaded = load_csv(&path).unwrap();
        assert_eq!(loaded, engine.catalog_records());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_csv_missing_file() {
        let path = std::env::temp_dir().join("chordgen_definitely_missing.csv");
        assert!(matches!(load_csv(&path), Err(ChordError::Io { .. })));
    }
}
