//! # Chord Engine
//!
//! Pure chord computation over the static tables in [`tables`](crate::tables).
//!
//! ## Primitives
//! - [`ChordEngine::note_at_interval`] - one note, `interval` semitones above a root
//! - [`ChordEngine::notes_for_chord`] - every note of a (root, quality) chord
//! - [`ChordEngine::format_chord_name`] - display name, root + suffix
//!
//! ## Spelling Selection
//! `use_sharps` picks the list the *output* is spelled from. The root is looked
//! up in that list first; when it is not there (e.g. `"Db"` with
//! `use_sharps = true`) it is looked up in the other list, and the output is
//! then spelled from the list the root was found in:
//!
//! ```rust
//! use chordgen::ChordEngine;
//!
//! let engine = ChordEngine::new();
//! assert_eq!(engine.note_at_interval("C", 1, true).unwrap(), "C#");
//! assert_eq!(engine.note_at_interval("Db", 2, true).unwrap(), "Eb");
//! ```
//!
//! ## Naming
//! Unknown qualities are rejected by [`notes_for_chord`](ChordEngine::notes_for_chord)
//! but [`format_chord_name`](ChordEngine::format_chord_name) treats them as
//! having an empty suffix.

use crate::error::ChordError;
use crate::tables::{
    ChordQuality, ChordType, ENHARMONIC_PAIRS, FLAT_NOTES, NATURAL_NOTES, QUALITIES, SEMITONES,
    SHARP_NOTES,
};

/// Stateless chord calculator. All data lives in static tables, so the value
/// is zero-sized and free to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChordEngine;

impl ChordEngine {
    pub fn new() -> Self {
        ChordEngine
    }

    /// All qualities in declaration order
    pub fn qualities(&self) -> &'static [ChordQuality] {
        &QUALITIES
    }

    /// Look up a quality by id
    pub fn quality(&self, id: &str) -> Option<&'static ChordQuality> {
        QUALITIES.iter().find(|q| q.id == id)
    }

    pub fn chord_type(&self, id: &str) -> Option<ChordType> {
        self.quality(id).map(|q| q.chord_type)
    }

    pub fn chord_extension(&self, id: &str) -> Option<&'static str> {
        self.quality(id).map(|q| q.extension)
    }

    /// The other spelling of a black-key note (`"C#"` <-> `"Db"`).
    /// Natural notes and unknown names have none.
    pub fn enharmonic(&self, note: &str) -> Option<&'static str> {
        ENHARMONIC_PAIRS.iter().find_map(|&(sharp, flat)| {
            if sharp == note {
                Some(flat)
            } else if flat == note {
                Some(sharp)
            } else {
                None
            }
        })
    }

    pub fn is_natural(&self, note: &str) -> bool {
        NATURAL_NOTES.contains(&note)
    }

    /// Pitch class (0 = C .. 11 = B) of a note in either spelling
    pub fn pitch_class(&self, note: &str) -> Result<usize, ChordError> {
        SHARP_NOTES
            .iter()
            .position(|&n| n == note)
            .or_else(|| FLAT_NOTES.iter().position(|&n| n == note))
            .ok_or_else(|| ChordError::InvalidNote(note.to_string()))
    }

    /// Get the note `interval` semitones above `root_note`.
    ///
    /// Intervals wrap at the octave, so 14 lands on the same pitch class as 2.
    ///
    /// # Errors
    /// [`ChordError::InvalidNote`] if `root_note` is in neither chromatic list.
    ///
    /// # Example
    /// ```
    /// use chordgen::ChordEngine;
    ///
    /// let engine = ChordEngine::new();
    /// assert_eq!(engine.note_at_interval("C", 14, true).unwrap(), "D");
    /// assert_eq!(engine.note_at_interval("C", 12, true).unwrap(), "C");
    /// assert_eq!(engine.note_at_interval("A", 3, false).unwrap(), "C");
    /// ```
    pub fn note_at_interval(
        &self,
        root_note: &str,
        interval: usize,
        use_sharps: bool,
    ) -> Result<&'static str, ChordError> {
        let (preferred, other) = if use_sharps {
            (&SHARP_NOTES, &FLAT_NOTES)
        } else {
            (&FLAT_NOTES, &SHARP_NOTES)
        };

        // Output is spelled from whichever list the root was found in
        let (note_list, root_index) = match preferred.iter().position(|&n| n == root_note) {
            Some(index) => (preferred, index),
            None => match other.iter().position(|&n| n == root_note) {
                Some(index) => (other, index),
                None => return Err(ChordError::InvalidNote(root_note.to_string())),
            },
        };

        Ok(note_list[(root_index + interval % SEMITONES) % SEMITONES])
    }

    /// Generate the notes of a chord, in the quality's interval order.
    ///
    /// Notes are neither sorted nor deduplicated; the result has exactly one
    /// note per interval.
    ///
    /// # Errors
    /// - [`ChordError::UnknownQuality`] for an unrecognized `quality_id`
    /// - [`ChordError::InvalidNote`] for an unrecognized root
    ///
    /// # Example
    /// ```
    /// use chordgen::ChordEngine;
    ///
    /// let engine = ChordEngine::new();
    /// assert_eq!(engine.notes_for_chord("A", "minor7", true).unwrap(), vec!["A", "C", "E", "G"]);
    /// assert_eq!(engine.notes_for_chord("Bb", "major7", false).unwrap(), vec!["Bb", "D", "F", "A"]);
    /// ```
    pub fn notes_for_chord(
        &self,
        root_note: &str,
        quality_id: &str,
        use_sharps: bool,
    ) -> Result<Vec<&'static str>, ChordError> {
        let quality = self
            .quality(quality_id)
            .ok_or_else(|| ChordError::UnknownQuality(quality_id.to_string()))?;

        quality
            .intervals
            .iter()
            .map(|&interval| self.note_at_interval(root_note, interval as usize, use_sharps))
            .collect()
    }

    /// Display name for a chord: the root followed by the quality's suffix.
    ///
    /// An unknown quality contributes an empty suffix, so the root comes back
    /// unchanged.
    ///
    /// # Example
    /// ```
    /// use chordgen::ChordEngine;
    ///
    /// let engine = ChordEngine::new();
    /// assert_eq!(engine.format_chord_name("F#", "dominant7"), "F#7");
    /// assert_eq!(engine.format_chord_name("C", "major"), "C");
    /// assert_eq!(engine.format_chord_name("C", "nonexistent"), "C");
    /// ```
    pub fn format_chord_name(&self, root_note: &str, quality_id: &str) -> String {
        let suffix = self.quality(quality_id).map(|q| q.suffix).unwrap_or("");
        format!("{}{}", root_note, suffix)
    }
}
