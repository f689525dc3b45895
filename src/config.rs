//! # Export Configuration
//!
//! Optional YAML file controlling where and what `chordgen export` writes.
//!
//! ```yaml
//! csv-path: out/chords.csv
//! text-path: out/chords.txt
//! formats: [csv, text]
//! ```
//!
//! Every key is optional. Missing paths fall back to
//! [`DEFAULT_CSV_PATH`] / [`DEFAULT_TEXT_PATH`]; a missing `formats` list
//! writes both.

use crate::error::ChordError;
use crate::export::{DEFAULT_CSV_PATH, DEFAULT_TEXT_PATH};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config as written in the file, before validation
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawExportConfig {
    pub csv_path: Option<String>,
    pub text_path: Option<String>,
    pub formats: Option<Vec<String>>,
}

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Text,
}

impl ExportFormat {
    /// Parse a format name: "csv", or "text" / "txt"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "text" | "txt" => Some(ExportFormat::Text),
            _ => None,
        }
    }
}

/// Validated export configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub csv_path: PathBuf,
    pub text_path: PathBuf,
    pub formats: Vec<ExportFormat>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            text_path: PathBuf::from(DEFAULT_TEXT_PATH),
            formats: vec![ExportFormat::Csv, ExportFormat::Text],
        }
    }
}

impl ExportConfig {
    /// Parse and validate YAML config content
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        // An empty document deserializes as unit, not as a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawExportConfig =
            serde_yaml::from_str(content).map_err(|e| ChordError::ConfigError(e.to_string()))?;

        let defaults = Self::default();

        let formats = match &raw.formats {
            Some(names) => {
                let mut formats = Vec::new();
                for name in names {
                    let format = ExportFormat::from_str(name).ok_or_else(|| {
                        ChordError::ConfigError(format!("Unknown export format: {}", name))
                    })?;
                    if !formats.contains(&format) {
                        formats.push(format);
                    }
                }
                if formats.is_empty() {
                    return Err(ChordError::ConfigError(
                        "formats must name at least one of: csv, text".to_string(),
                    ));
                }
                formats
            }
            None => defaults.formats,
        };

        Ok(ExportConfig {
            csv_path: raw.csv_path.map(PathBuf::from).unwrap_or(defaults.csv_path),
            text_path: raw.text_path.map(PathBuf::from).unwrap_or(defaults.text_path),
            formats,
        })
    }

    /// Load config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ChordError::io(path, e))?;
        Self::from_yaml(&content)
    }

    pub fn wants(&self, format: ExportFormat) -> bool {
        self.formats.contains(&format)
    }
}
