//! Integration tests for chordgen
//!
//! Exercise the public API end to end: generation, lookup, export, and
//! querying the exported data.

use chordgen::csv::parse_records;
use chordgen::tables::{ENHARMONIC_PAIRS, SHARP_NOTES};
use chordgen::{
    chord_notes, export, find_chord, load_csv, ChordEngine, ChordError, ChordQuery, ChordSummary,
    ExportConfig, ExportFormat,
};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chordgen_it_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_concrete_scenarios() {
    let engine = ChordEngine::new();
    assert_eq!(engine.notes_for_chord("A", "minor7", true).unwrap(), vec!["A", "C", "E", "G"]);
    assert_eq!(engine.notes_for_chord("Bb", "major7", false).unwrap(), vec!["Bb", "D", "F", "A"]);
    assert_eq!(engine.format_chord_name("F#", "dominant7"), "F#7");
    assert_eq!(engine.note_at_interval("C", 14, true).unwrap(), "D");
    assert_eq!(engine.note_at_interval("C", 12, true).unwrap(), "C");
}

#[test]
fn test_error_cases() {
    assert!(matches!(
        chord_notes("C", "nonexistent"),
        Err(ChordError::UnknownQuality(_))
    ));
    assert!(matches!(
        ChordEngine::new().note_at_interval("H", 0, true),
        Err(ChordError::InvalidNote(_))
    ));
}

#[test]
fn test_enharmonic_pairs_match_by_position() {
    let engine = ChordEngine::new();
    for &(sharp, flat) in ENHARMONIC_PAIRS.iter() {
        for quality in engine.qualities() {
            let s = engine.notes_for_chord(sharp, quality.id, true).unwrap();
            let f = engine.notes_for_chord(flat, quality.id, false).unwrap();
            let s_pc: Vec<usize> = s.iter().map(|n| engine.pitch_class(n).unwrap()).collect();
            let f_pc: Vec<usize> = f.iter().map(|n| engine.pitch_class(n).unwrap()).collect();
            assert_eq!(s_pc, f_pc, "{} vs {} ({})", sharp, flat, quality.id);
        }
    }
}

#[test]
fn test_root_is_first_note() {
    let engine = ChordEngine::new();
    for root in SHARP_NOTES.iter() {
        for quality in engine.qualities() {
            assert_eq!(engine.notes_for_chord(root, quality.id, true).unwrap()[0], *root);
        }
    }
}

#[test]
fn test_lookup_round_trip() {
    let engine = ChordEngine::new();
    for root in SHARP_NOTES.iter() {
        for quality in engine.qualities() {
            let name = engine.format_chord_name(root, quality.id);
            let chord = find_chord(&name.to_lowercase()).unwrap();
            assert_eq!(chord.name, name);
            assert_eq!(chord.quality, quality.id);
        }
    }

    let chord = find_chord("c#m").unwrap();
    assert_eq!(chord.root, "C#");
    assert_eq!(chord.quality, "minor");
}

#[test]
fn test_demo_lookups() {
    let cases = [
        ("C#m", Some(vec!["C#", "E", "G#"])),
        ("Dbm", Some(vec!["Db", "E", "Ab"])),
        ("F#maj7", Some(vec!["F#", "A#", "C#", "F"])),
        ("Gbmaj7", Some(vec!["Gb", "Bb", "Db", "F"])),
        ("Dm9", Some(vec!["D", "F", "A", "C", "E"])),
        ("G7sus4", Some(vec!["G", "C", "D", "F"])),
        ("Bdim7", Some(vec!["B", "D", "F", "G#"])),
        ("Eaug", Some(vec!["E", "G#", "C"])),
        ("Abmaj9", Some(vec!["Ab", "C", "Eb", "G", "Bb"])),
        ("Hmaj7", None),
    ];
    for (name, expected) in cases {
        assert_eq!(find_chord(name).map(|c| c.notes), expected, "{}", name);
    }
}

#[test]
fn test_csv_export_matches_catalog() {
    let engine = ChordEngine::new();
    let csv = engine.to_csv();
    let records = parse_records(&csv).unwrap();
    assert_eq!(records.len(), engine.generate_catalog().len());
    assert!(csv.starts_with("chord_name,notes,chord_type,chord_extension\r\n"));

    let dom7 = ChordQuery::new()
        .chord_type("Dominant")
        .chord_extension("Dominant 7th")
        .filter(&records);
    assert_eq!(dom7.len(), 17);
    let g7 = dom7.iter().find(|r| r.name == "G7").unwrap();
    assert_eq!(g7.notes, "G, B, D, F");
}

#[test]
fn test_export_with_config_and_query_file() {
    let dir = scratch_dir("config");
    let config_path = dir.join("export.yaml");
    let csv_path = dir.join("chords.csv");
    std::fs::write(
        &config_path,
        format!("csv-path: {}\nformats: [csv]\n", csv_path.display()),
    )
    .unwrap();

    let config = ExportConfig::load(&config_path).unwrap();
    assert_eq!(config.formats, vec![ExportFormat::Csv]);
    export(&config).unwrap();

    let records = load_csv(&csv_path).unwrap();
    let summary = ChordSummary::new(&records);
    assert_eq!(summary.by_type.values().map(|v| v.len()).sum::<usize>(), 374);
    assert_eq!(summary.by_type_and_extension["Minor"]["Minor 9th"].len(), 17);

    let with_cs = ChordQuery::new().contains_note("C#").filter(&records);
    assert!(with_cs.iter().all(|r| r.notes.contains("C#")));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_text_export_file() {
    let dir = scratch_dir("text");
    let engine = ChordEngine::new();
    let path = dir.join("chords.txt");
    engine.save_text(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("COMPREHENSIVE CHORD LIST\n"));
    assert!(text.contains("\nMINORMAJOR7 CHORDS:\n"));
    assert!(text.contains("\nDOMINANT7SUS4 CHORDS:\n"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_enharmonic_comparison_rows() {
    let engine = ChordEngine::new();
    let expected = [
        ("minor", "C#m (C#, E, G#) | Dbm (Db, E, Ab)"),
        ("major", "C# (C#, F, G#) | Db (Db, F, Ab)"),
        ("major7", "C#maj7 (C#, F, G#, C) | Dbmaj7 (Db, F, Ab, C)"),
        ("dominant7", "C#7 (C#, F, G#, B) | Db7 (Db, F, Ab, B)"),
    ];
    for (quality, row) in expected {
        let pairs = engine.enharmonic_pairs(quality).unwrap();
        let (sharp, flat) = &pairs[0];
        let line = format!(
            "{} ({}) | {} ({})",
            sharp.name,
            sharp.notes_joined(),
            flat.name,
            flat.notes_joined()
        );
        assert_eq!(line, row);
    }

    // Each pair lists the same pitch classes under both spellings
    for (sharp, flat) in engine.enharmonic_pairs("dominant7").unwrap() {
        let pcs = |notes: &[&str]| -> Vec<usize> {
            notes.iter().map(|n| engine.pitch_class(n).unwrap()).collect()
        };
        assert_eq!(pcs(&sharp.notes[..]), pcs(&flat.notes[..]));
    }
}

#[test]
fn test_example_queries_on_exported_file() {
    let dir = scratch_dir("example_queries");
    let csv_path = dir.join("chords.csv");
    ChordEngine::new().save_csv(&csv_path).unwrap();
    let records = load_csv(&csv_path).unwrap();

    let dom7 = ChordQuery::new()
        .chord_type("Dominant")
        .chord_extension("Dominant 7th")
        .filter(&records);
    assert_eq!(dom7.len(), 17);

    let with_cs = ChordQuery::new().contains_note("C#").filter(&records);
    assert!(with_cs.len() > 5);
    assert!(with_cs.iter().all(|r| r.notes.contains("C#")));

    let suspended = ChordQuery::new().chord_type("Suspended").filter(&records);
    assert_eq!(suspended.len(), 2 * 17);

    std::fs::remove_dir_all(&dir).ok();
}
