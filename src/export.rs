//! # Catalog Export
//!
//! Render the chord catalog as CSV or as a readable text listing, in memory or
//! straight to a file.
//!
//! ## CSV
//! One row per catalog chord, sorted by (type, extension, name). See
//! [`csv`](crate::csv) for the row format.
//!
//! ## Text
//! Chords grouped per quality id (ids in ascending order), each group sorted
//! by name:
//!
//! ```text
//! COMPREHENSIVE CHORD LIST
//! ==================================================
//!
//!
//! AUGMENTED CHORDS:
//! --------------------------------------------------
//! A#aug        (A#, D, F#)
//! ```
//!
//! ## Files
//! File writers open the target, write through a buffer, and flush before
//! returning. A failure at any point comes back as [`ChordError::Io`]; the
//! partial file is left as is.

use crate::catalog::ChordEntry;
use crate::csv::{write_records, ChordRecord};
use crate::engine::ChordEngine;
use crate::error::ChordError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Default CSV file name
pub const DEFAULT_CSV_PATH: &str = "comprehensive_chords.csv";
/// Default text file name
pub const DEFAULT_TEXT_PATH: &str = "comprehensive_chords.txt";

const RULE_WIDTH: usize = 50;
const NAME_WIDTH: usize = 12;

impl ChordEngine {
    /// Convert catalog entries to CSV records, sorted the way exports are
    pub fn to_records(&self, catalog: &[ChordEntry]) -> Vec<ChordRecord> {
        let mut records: Vec<ChordRecord> = catalog
            .iter()
            .map(|chord| ChordRecord {
                name: chord.name.clone(),
                notes: chord.notes_joined(),
                chord_type: self
                    .chord_type(chord.quality)
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
                chord_extension: self
                    .chord_extension(chord.quality)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();

        records.sort_by(|a, b| {
            (&a.chord_type, &a.chord_extension, &a.name).cmp(&(&b.chord_type, &b.chord_extension, &b.name))
        });
        records
    }

    /// Every catalog chord as a sorted CSV record
    pub fn catalog_records(&self) -> Vec<ChordRecord> {
        self.to_records(&self.generate_catalog())
    }

    /// Write the full catalog as CSV
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_records(writer, &self.catalog_records())
    }

    /// Write the full catalog as the text listing, title included
    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "COMPREHENSIVE CHORD LIST")?;
        writeln!(writer, "{}\n", "=".repeat(RULE_WIDTH))?;
        write_groups(writer, &self.generate_catalog())
    }

    /// Full catalog as a CSV string
    pub fn to_csv(&self) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_csv(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Full catalog as the text listing
    pub fn to_text(&self) -> String {
        let mut out = Vec::new();
        let _ = self.write_text(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Save the catalog as CSV to `path`
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<(), ChordError> {
        save_with(path.as_ref(), |writer| self.write_csv(writer))
    }

    /// Save the catalog as a text listing to `path`
    pub fn save_text(&self, path: impl AsRef<Path>) -> Result<(), ChordError> {
        save_with(path.as_ref(), |writer| self.write_text(writer))
    }

    /// Save both formats. Stops at the first failure.
    pub fn save_all(
        &self,
        csv_path: impl AsRef<Path>,
        text_path: impl AsRef<Path>,
    ) -> Result<(), ChordError> {
        self.save_csv(csv_path)?;
        self.save_text(text_path)
    }
}

/// Write entries grouped by quality id: uppercased header with `_` shown as a
/// space, then one padded line per chord sorted by name
pub fn write_groups<W: Write>(writer: &mut W, chords: &[ChordEntry]) -> io::Result<()> {
    let mut groups: BTreeMap<&str, Vec<&ChordEntry>> = BTreeMap::new();
    for chord in chords {
        groups.entry(chord.quality).or_default().push(chord);
    }

    for (quality, mut group) in groups {
        writeln!(writer, "\n{} CHORDS:", quality.to_uppercase().replace('_', " "))?;
        writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
        group.sort_by(|a, b| a.name.cmp(&b.name));
        for chord in group {
            writeln!(writer, "{}", format_line(chord))?;
        }
    }
    Ok(())
}

/// Name padded to 12 columns, then the notes: `"Cmaj7        (C, E, G, B)"`
pub fn format_line(chord: &ChordEntry) -> String {
    format!("{:<width$} ({})", chord.name, chord.notes_joined(), width = NAME_WIDTH)
}

fn save_with<F>(path: &Path, write: F) -> Result<(), ChordError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| ChordError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|e| ChordError::io(path, e))?;
    writer.flush().map_err(|e| ChordError::io(path, e))
}
