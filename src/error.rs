//! # Error Types
//!
//! This module defines all error types for the chord generator.
//!
//! ## Error Types
//! - `InvalidNote` - Root note not found in either chromatic spelling
//! - `UnknownQuality` - Quality id not present in the interval table
//! - `Io` - File could not be created, written, or read
//! - `CsvError` - Malformed CSV when reading an export back in
//! - `ConfigError` - Invalid YAML export configuration
//! - `Serialization` - Chord data could not be rendered as YAML
//!
//! A chord lookup that finds nothing is not an error: [`find_chord`](crate::find_chord)
//! returns `None`.
//!
//! ## Usage
//! ```rust
//! use chordgen::{ChordEngine, ChordError};
//!
//! let engine = ChordEngine::new();
//! match engine.notes_for_chord("H", "major", true) {
//!     Ok(notes) => println!("{}", notes.join(", ")),
//!     Err(ChordError::InvalidNote(note)) => eprintln!("no such note: {}", note),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// Root note is not in the sharp or the flat chromatic list.
    ///
    /// # Example
    /// ```
    /// # use chordgen::ChordError;
    /// let err = ChordError::InvalidNote("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid note: H");
    /// ```
    #[error("Invalid note: {0}")]
    InvalidNote(String),

    /// Quality id is not in the interval table.
    ///
    /// # Example
    /// ```
    /// # use chordgen::ChordError;
    /// let err = ChordError::UnknownQuality("nonexistent".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord type: nonexistent");
    /// ```
    #[error("Unknown chord type: {0}")]
    UnknownQuality(String),

    /// File I/O failure during export or import. Exports are all-or-nothing;
    /// nothing is retried.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input with the 1-based line it was found on.
    ///
    /// # Example
    /// ```
    /// # use chordgen::ChordError;
    /// let err = ChordError::CsvError {
    ///     line: 3,
    ///     message: "expected 4 fields, found 2".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "CSV error at line 3: expected 4 fields, found 2");
    /// ```
    #[error("CSV error at line {line}: {message}")]
    CsvError { line: usize, message: String },

    /// Invalid export configuration.
    #[error("Invalid config: {0}")]
    ConfigError(String),

    /// YAML rendering of chord data failed. Reading a config file never
    /// produces this; those failures are [`ChordError::ConfigError`].
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

impl ChordError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChordError::Io {
            path: path.into(),
            source,
        }
    }
}
