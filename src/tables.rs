//! # Reference Tables
//!
//! Static, read-only data the chord engine is built from.
//!
//! ## Tables
//! - [`SHARP_NOTES`] / [`FLAT_NOTES`] - the 12 pitch classes in each spelling.
//!   Index `i` names the same pitch class in both lists.
//! - [`ENHARMONIC_PAIRS`] - the 5 black-key spellings (sharp, flat)
//! - [`QUALITIES`] - every chord quality with its intervals, display suffix,
//!   coarse type and fine extension, in declaration order
//!
//! Declaration order of [`QUALITIES`] matters: catalog generation walks the
//! table top to bottom, so entry order in the catalog follows it.

use std::fmt;

/// Number of pitch classes in the chromatic scale
pub const SEMITONES: usize = 12;

/// Chromatic scale spelled with sharps
pub const SHARP_NOTES: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic scale spelled with flats
pub const FLAT_NOTES: [&str; SEMITONES] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Black-key spellings as (sharp, flat). Lookups go both directions.
pub const ENHARMONIC_PAIRS: [(&str, &str); 5] = [
    ("C#", "Db"),
    ("D#", "Eb"),
    ("F#", "Gb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
];

/// Natural (white-key) note names
pub const NATURAL_NOTES: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Coarse chord category used for grouping and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordType {
    Major,
    Minor,
    Dominant,
    Suspended,
    Diminished,
    Augmented,
}

impl ChordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Dominant => "Dominant",
            ChordType::Suspended => "Suspended",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
        }
    }

    /// Parse a type name as it appears in CSV exports ("Major", "Minor", ...)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Major" => Some(ChordType::Major),
            "Minor" => Some(ChordType::Minor),
            "Dominant" => Some(ChordType::Dominant),
            "Suspended" => Some(ChordType::Suspended),
            "Diminished" => Some(ChordType::Diminished),
            "Augmented" => Some(ChordType::Augmented),
            _ => None,
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chord quality: interval pattern plus naming and categorization
///
/// # Fields
/// - `id`: table key, e.g. `"minor7"` or `"half_diminished7"`
/// - `intervals`: semitone offsets from the root, in chord-tone order
///   (root, third, fifth, seventh, ninth, eleventh). Extended chords reach
///   past the octave (14 = ninth, 17 = eleventh).
/// - `suffix`: appended to the root for display (`"m7"`, `""` for major)
/// - `chord_type`: coarse category
/// - `extension`: fine category, e.g. `"Minor 7th"` or `"Triad"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordQuality {
    pub id: &'static str,
    pub intervals: &'static [u8],
    pub suffix: &'static str,
    pub chord_type: ChordType,
    pub extension: &'static str,
}

const fn quality(
    id: &'static str,
    intervals: &'static [u8],
    suffix: &'static str,
    chord_type: ChordType,
    extension: &'static str,
) -> ChordQuality {
    ChordQuality {
        id,
        intervals,
        suffix,
        chord_type,
        extension,
    }
}

/// Every known chord quality, in declaration order
pub static QUALITIES: [ChordQuality; 22] = [
    // Major
    quality("major", &[0, 4, 7], "", ChordType::Major, "Triad"),
    quality("major6", &[0, 4, 7, 9], "6", ChordType::Major, "6th"),
    quality("major7", &[0, 4, 7, 11], "maj7", ChordType::Major, "Major 7th"),
    quality("major9", &[0, 4, 7, 11, 14], "maj9", ChordType::Major, "Major 9th"),
    quality("major11", &[0, 4, 7, 11, 14, 17], "maj11", ChordType::Major, "Major 11th"),
    // Suspended
    quality("sus2", &[0, 2, 7], "sus2", ChordType::Suspended, "Sus2"),
    quality("sus4", &[0, 5, 7], "sus4", ChordType::Suspended, "Sus4"),
    // Dominant
    quality("dominant7", &[0, 4, 7, 10], "7", ChordType::Dominant, "Dominant 7th"),
    quality("dominant9", &[0, 4, 7, 10, 14], "9", ChordType::Dominant, "Dominant 9th"),
    quality("dominant11", &[0, 4, 7, 10, 14, 17], "11", ChordType::Dominant, "Dominant 11th"),
    // Minor
    quality("minor", &[0, 3, 7], "m", ChordType::Minor, "Triad"),
    quality("minor6", &[0, 3, 7, 9], "m6", ChordType::Minor, "6th"),
    quality("minor7", &[0, 3, 7, 10], "m7", ChordType::Minor, "Minor 7th"),
    quality("minormajor7", &[0, 3, 7, 11], "m(maj7)", ChordType::Minor, "Minor Major 7th"),
    quality("minor9", &[0, 3, 7, 10, 14], "m9", ChordType::Minor, "Minor 9th"),
    quality("minor11", &[0, 3, 7, 10, 14, 17], "m11", ChordType::Minor, "Minor 11th"),
    // Diminished
    quality("diminished", &[0, 3, 6], "dim", ChordType::Diminished, "Triad"),
    quality("diminished7", &[0, 3, 6, 9], "dim7", ChordType::Diminished, "Diminished 7th"),
    quality("half_diminished7", &[0, 3, 6, 10], "m7b5", ChordType::Diminished, "Half Diminished 7th"),
    // Augmented
    quality("augmented", &[0, 4, 8], "aug", ChordType::Augmented, "Triad"),
    quality("augmented7", &[0, 4, 8, 10], "aug7", ChordType::Augmented, "Augmented 7th"),
    // 7sus4 is filed under Dominant
    quality("dominant7sus4", &[0, 5, 7, 10], "7sus4", ChordType::Dominant, "Dominant 7th Sus4"),
];
