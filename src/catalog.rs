//! # Chord Catalog
//!
//! Enumeration and lookup over every (root, quality) pair.
//!
//! ## Catalog Layout
//! Roots are walked in sharp chromatic order (`C C# D ... B`), and for each
//! root every quality in declaration order. Each black-key root also gets its
//! flat twin right after the sharp entry:
//!
//! ```text
//! C       Cm ... C7sus4
//! C#      Db     C#6    Db6    ...
//! D       ...
//! ```
//!
//! Natural roots appear once per quality and black-key roots twice, so the
//! catalog holds `17 * qualities` entries. It is rebuilt on every call.

use crate::engine::ChordEngine;
use crate::error::ChordError;
use crate::tables::{ChordQuality, ChordType, ENHARMONIC_PAIRS, FLAT_NOTES, SEMITONES, SHARP_NOTES};
use serde::Serialize;

/// Build an entry for the root at `root_index` of `notes`, spelling every
/// chord tone from that same list. Both lists are 12 long, so indexing
/// cannot fail.
fn table_entry(
    notes: &[&'static str; SEMITONES],
    root_index: usize,
    quality: &'static ChordQuality,
) -> ChordEntry {
    let root = notes[root_index];
    ChordEntry {
        name: format!("{}{}", root, quality.suffix),
        notes: quality
            .intervals
            .iter()
            .map(|&interval| notes[(root_index + interval as usize) % SEMITONES])
            .collect(),
        quality: quality.id,
        root,
    }
}

/// A single catalog chord
///
/// # Fields
/// - `name`: display name, e.g. `"Dbmaj7"`
/// - `notes`: chord tones in interval order
/// - `quality`: quality id, e.g. `"major7"`
/// - `root`: the root spelling the chord was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordEntry {
    pub name: String,
    pub notes: Vec<&'static str>,
    pub quality: &'static str,
    pub root: &'static str,
}

impl ChordEntry {
    /// Notes joined the way exports write them: `"C, E, G"`
    pub fn notes_joined(&self) -> String {
        self.notes.join(", ")
    }
}

impl ChordEngine {
    fn entry(
        &self,
        root: &'static str,
        quality: &'static str,
        use_sharps: bool,
    ) -> Result<ChordEntry, ChordError> {
        Ok(ChordEntry {
            name: self.format_chord_name(root, quality),
            notes: self.notes_for_chord(root, quality, use_sharps)?,
            quality,
            root,
        })
    }

    /// Generate every chord in both sharp and flat variations.
    ///
    /// # Example
    /// ```
    /// use chordgen::ChordEngine;
    ///
    /// let engine = ChordEngine::new();
    /// let catalog = engine.generate_catalog();
    /// assert_eq!(catalog.len(), 17 * engine.qualities().len());
    /// assert_eq!(catalog[0].name, "C");
    /// ```
    pub fn generate_catalog(&self) -> Vec<ChordEntry> {
        let mut catalog = Vec::with_capacity(17 * self.qualities().len());

        for (root_index, &root) in SHARP_NOTES.iter().enumerate() {
            let flat_root = FLAT_NOTES[root_index];
            for quality in self.qualities() {
                catalog.push(table_entry(&SHARP_NOTES, root_index, quality));
                if flat_root != root {
                    catalog.push(table_entry(&FLAT_NOTES, root_index, quality));
                }
            }
        }

        catalog
    }

    /// Find a chord by display name, ignoring case.
    ///
    /// Matching is exact apart from case; there is no partial matching. The
    /// first match in catalog order wins.
    ///
    /// # Example
    /// ```
    /// use chordgen::ChordEngine;
    ///
    /// let engine = ChordEngine::new();
    /// let chord = engine.find_chord("c#m").unwrap();
    /// assert_eq!(chord.root, "C#");
    /// assert_eq!(chord.quality, "minor");
    /// assert!(engine.find_chord("C#min").is_none());
    /// ```
    pub fn find_chord(&self, chord_name: &str) -> Option<ChordEntry> {
        let wanted = chord_name.to_lowercase();
        self.generate_catalog()
            .into_iter()
            .find(|chord| chord.name.to_lowercase() == wanted)
    }

    /// Every catalog chord of one quality, in catalog order.
    ///
    /// # Errors
    /// [`ChordError::UnknownQuality`] if `quality_id` is not in the table.
    pub fn chords_of_quality(&self, quality_id: &str) -> Result<Vec<ChordEntry>, ChordError> {
        if self.quality(quality_id).is_none() {
            return Err(ChordError::UnknownQuality(quality_id.to_string()));
        }
        Ok(self
            .generate_catalog()
            .into_iter()
            .filter(|chord| chord.quality == quality_id)
            .collect())
    }

    /// Every catalog chord with the given coarse type, in catalog order
    pub fn chords_of_type(&self, chord_type: ChordType) -> Vec<ChordEntry> {
        self.generate_catalog()
            .into_iter()
            .filter(|chord| self.chord_type(chord.quality) == Some(chord_type))
            .collect()
    }

    /// All qualities built on one root, in declaration order.
    ///
    /// # Example
    /// ```
    /// use chordgen::ChordEngine;
    ///
    /// let engine = ChordEngine::new();
    /// let family = engine.chord_family("C", true).unwrap();
    /// assert_eq!(family[1].name, "C6");
    /// assert_eq!(family[1].notes, vec!["C", "E", "G", "A"]);
    /// ```
    pub fn chord_family(&self, root_note: &str, use_sharps: bool) -> Result<Vec<ChordEntry>, ChordError> {
        let root = self.canonical_root(root_note)?;
        self.qualities()
            .iter()
            .map(|quality| self.entry(root, quality.id, use_sharps))
            .collect()
    }

    /// Each black-key chord of one quality next to its enharmonic twin, as
    /// (sharp spelling, flat spelling), in [`ENHARMONIC_PAIRS`] order.
    ///
    /// # Example
    /// ```
    /// use chordgen::ChordEngine;
    ///
    /// let engine = ChordEngine::new();
    /// let pairs = engine.enharmonic_pairs("minor").unwrap();
    /// assert_eq!(pairs[0].0.name, "C#m");
    /// assert_eq!(pairs[0].1.notes, vec!["Db", "E", "Ab"]);
    /// ```
    ///
    /// # Errors
    /// [`ChordError::UnknownQuality`] if `quality_id` is not in the table.
    pub fn enharmonic_pairs(
        &self,
        quality_id: &str,
    ) -> Result<Vec<(ChordEntry, ChordEntry)>, ChordError> {
        let quality = self
            .quality(quality_id)
            .ok_or_else(|| ChordError::UnknownQuality(quality_id.to_string()))?;
        ENHARMONIC_PAIRS
            .iter()
            .map(|&(sharp, _)| {
                let root_index = self.pitch_class(sharp)?;
                Ok((
                    table_entry(&SHARP_NOTES, root_index, quality),
                    table_entry(&FLAT_NOTES, root_index, quality),
                ))
            })
            .collect()
    }

    /// Resolve a caller-supplied note to its static table spelling
    fn canonical_root(&self, note: &str) -> Result<&'static str, ChordError> {
        let pc = self.pitch_class(note)?;
        let sharp = SHARP_NOTES[pc];
        if sharp == note {
            Ok(sharp)
        } else {
            self.enharmonic(sharp)
                .filter(|&flat| flat == note)
                .ok_or_else(|| ChordError::InvalidNote(note.to_string()))
        }
    }
}
