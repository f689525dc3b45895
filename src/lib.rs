pub mod catalog;
pub mod config;
pub mod csv;
pub mod engine;
pub mod error;
pub mod export;
pub mod query;
pub mod tables;

pub use catalog::ChordEntry;
pub use config::{ExportConfig, ExportFormat};
pub use csv::ChordRecord;
pub use engine::ChordEngine;
pub use error::*;
pub use query::{load_csv, ChordQuery, ChordSummary};
pub use tables::{ChordQuality, ChordType};

/// Look up a chord by display name, ignoring case.
/// Shorthand for [`ChordEngine::find_chord`].
pub fn find_chord(chord_name: &str) -> Option<ChordEntry> {
    ChordEngine::new().find_chord(chord_name)
}

/// Notes of a chord spelled with sharps.
/// Shorthand for [`ChordEngine::notes_for_chord`].
pub fn chord_notes(root_note: &str, quality_id: &str) -> Result<Vec<&'static str>, ChordError> {
    ChordEngine::new().notes_for_chord(root_note, quality_id, true)
}

/// Write the full catalog to the configured files
pub fn export(config: &ExportConfig) -> Result<(), ChordError> {
    let engine = ChordEngine::new();
    if config.wants(ExportFormat::Csv) {
        engine.save_csv(&config.csv_path)?;
    }
    if config.wants(ExportFormat::Text) {
        engine.save_text(&config.text_path)?;
    }
    Ok(())
}
