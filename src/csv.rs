//! # CSV Records
//!
//! The row shape shared by CSV export and the query layer, plus a small
//! reader and writer for it.
//!
//! ## Format
//! ```text
//! chord_name,notes,chord_type,chord_extension
//! C,"C, E, G",Major,Triad
//! ```
//!
//! - Fields containing `,`, `"`, `\r` or `\n` are quoted, inner quotes doubled
//! - Records end with `\r\n`; the reader also accepts bare `\n`
//! - The header must match [`HEADER`] exactly

use crate::error::ChordError;
use serde::Serialize;
use std::io::{self, Write};

/// CSV column names, in order
pub const HEADER: [&str; 4] = ["chord_name", "notes", "chord_type", "chord_extension"];

const LINE_END: &str = "\r\n";

/// One exported chord row
///
/// `notes` holds the joined note string (`"C, E, G"`), not a list: that is
/// what the file stores and what note queries match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordRecord {
    #[serde(rename = "chord_name")]
    pub name: String,
    pub notes: String,
    pub chord_type: String,
    pub chord_extension: String,
}

impl ChordRecord {
    fn fields(&self) -> [&str; 4] {
        [&self.name, &self.notes, &self.chord_type, &self.chord_extension]
    }
}

/// Quote a field if it needs it
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    write!(writer, "{}{}", line.join(","), LINE_END)
}

/// Write the header and every record
pub fn write_records<W: Write>(writer: &mut W, records: &[ChordRecord]) -> io::Result<()> {
    write_row(writer, &HEADER)?;
    for record in records {
        write_row(writer, &record.fields())?;
    }
    Ok(())
}

/// Split CSV text into rows of fields, honoring quoted fields.
/// Returns each row with the 1-based line it started on.
fn split_rows(input: &str) -> Result<Vec<(usize, Vec<String>)>, ChordError> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // Set once a quoted field closes; only a delimiter may follow
    let mut quote_closed = false;
    let mut line = 1;
    let mut row_line = 1;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    quote_closed = true;
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        if quote_closed && !matches!(c, ',' | '\r' | '\n') {
            return Err(ChordError::CsvError {
                line,
                message: "unexpected character after closing quote".to_string(),
            });
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            '"' => {
                return Err(ChordError::CsvError {
                    line,
                    message: "unexpected quote inside unquoted field".to_string(),
                })
            }
            ',' => {
                quote_closed = false;
                row.push(std::mem::take(&mut field));
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' if quote_closed => {
                return Err(ChordError::CsvError {
                    line,
                    message: "unexpected character after closing quote".to_string(),
                })
            }
            '\n' => {
                quote_closed = false;
                row.push(std::mem::take(&mut field));
                rows.push((row_line, std::mem::take(&mut row)));
                line += 1;
                row_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(ChordError::CsvError {
            line: row_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push((row_line, row));
    }

    Ok(rows)
}

/// Parse CSV text produced by [`write_records`] back into records.
///
/// Blank lines are skipped.
///
/// # Errors
/// [`ChordError::CsvError`] for a missing or wrong header, a row with the
/// wrong number of fields, or broken quoting.
pub fn parse_records(input: &str) -> Result<Vec<ChordRecord>, ChordError> {
    let mut rows = split_rows(input)?
        .into_iter()
        .filter(|(_, fields)| !(fields.len() == 1 && fields[0].is_empty()));

    let (header_line, header) = rows.next().ok_or_else(|| ChordError::CsvError {
        line: 1,
        message: "missing header row".to_string(),
    })?;
    if header != HEADER {
        return Err(ChordError::CsvError {
            line: header_line,
            message: format!("expected header '{}', found '{}'", HEADER.join(","), header.join(",")),
        });
    }

    rows.map(|(line, fields)| -> Result<ChordRecord, ChordError> {
        let [name, notes, chord_type, chord_extension]: [String; 4] =
            fields.try_into().map_err(|fields: Vec<String>| ChordError::CsvError {
                line,
                message: format!("expected {} fields, found {}", HEADER.len(), fields.len()),
            })?;
        Ok(ChordRecord {
            name,
            notes,
            chord_type,
            chord_extension,
        })
    })
    .collect()
}
