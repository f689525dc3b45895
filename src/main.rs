use chordgen::export::write_groups;
use chordgen::{
    load_csv, ChordEngine, ChordError, ChordQuery, ChordRecord, ChordSummary, ChordType,
    ExportConfig, ExportFormat,
};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "Usage: chordgen lookup <name>... [--yaml]
       chordgen list [quality]
       chordgen family <root> [--flats]
       chordgen enharmonic [quality...]
       chordgen export [--config <file.yaml>] [csv_path] [txt_path]
       chordgen query [--csv <file>] [--type T] [--extension E] [--note N] [--yaml]
       chordgen summary [--csv <file>]";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(command) = args.first() else {
        eprintln!("{}", USAGE);
        process::exit(1);
    };
    let rest = &args[1..];

    let result = match command.as_str() {
        "lookup" => lookup(rest),
        "list" => list(rest),
        "family" => family(rest),
        "enharmonic" => enharmonic(rest),
        "export" => export(rest),
        "query" => query(rest),
        "summary" => summary(rest),
        _ => {
            eprintln!("Unknown command '{}'", command);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Value following `flag`, if present
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

/// Arguments that are neither flags nor flag values
fn positional<'a>(args: &'a [String], flags_with_values: &[&str]) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
        } else if flags_with_values.contains(&arg.as_str()) {
            skip_next = true;
        } else if !arg.starts_with("--") {
            out.push(arg.as_str());
        }
    }
    out
}

fn lookup(args: &[String]) -> Result<(), ChordError> {
    let names = positional(args, &[]);
    if names.is_empty() {
        eprintln!("Usage: chordgen lookup <name>... [--yaml]");
        process::exit(1);
    }

    let engine = ChordEngine::new();

    if args.iter().any(|a| a == "--yaml") {
        let mut found = Vec::new();
        for name in names {
            match engine.find_chord(name) {
                Some(chord) => found.push(chord),
                None => eprintln!("Chord '{}' not found", name),
            }
        }
        print!("{}", serde_yaml::to_string(&found)?);
        return Ok(());
    }

    for name in names {
        match engine.find_chord(name) {
            Some(chord) => println!("{:<10} ({})", chord.name, chord.notes_joined()),
            None => println!("{:<10} (Not found)", name),
        }
    }
    Ok(())
}

fn list(args: &[String]) -> Result<(), ChordError> {
    let engine = ChordEngine::new();
    let chords = match args.first() {
        Some(quality) => engine.chords_of_quality(quality)?,
        None => engine.generate_catalog(),
    };
    write_groups(&mut io::stdout().lock(), &chords).map_err(|e| ChordError::Io {
        path: PathBuf::from("<stdout>"),
        source: e,
    })
}

fn family(args: &[String]) -> Result<(), ChordError> {
    let Some(root) = positional(args, &[]).first().copied() else {
        eprintln!("Usage: chordgen family <root> [--flats]");
        process::exit(1);
    };
    let use_sharps = !args.iter().any(|a| a == "--flats");

    for chord in ChordEngine::new().chord_family(root, use_sharps)? {
        println!("{:<12} ({})", chord.name, chord.notes_joined());
    }
    Ok(())
}

/// Qualities compared when none are named
const ENHARMONIC_DEFAULTS: [&str; 4] = ["minor", "major", "major7", "dominant7"];

fn enharmonic(args: &[String]) -> Result<(), ChordError> {
    let named = positional(args, &[]);
    let qualities = if named.is_empty() {
        ENHARMONIC_DEFAULTS.to_vec()
    } else {
        named
    };

    let engine = ChordEngine::new();
    let by_quality = qualities
        .iter()
        .map(|quality| engine.enharmonic_pairs(quality))
        .collect::<Result<Vec<_>, _>>()?;

    println!("ENHARMONIC EQUIVALENT CHORDS");
    println!("{}", "=".repeat(40));

    let pair_count = by_quality.first().map_or(0, Vec::len);
    for i in 0..pair_count {
        let (sharp_root, flat_root) = (by_quality[0][i].0.root, by_quality[0][i].1.root);
        println!("\n{} vs {} chords:", sharp_root, flat_root);
        println!("{}", "-".repeat(30));
        for pairs in &by_quality {
            let (sharp, flat) = &pairs[i];
            println!(
                "{:<8} ({:<12}) | {:<8} ({})",
                sharp.name,
                sharp.notes_joined(),
                flat.name,
                flat.notes_joined()
            );
        }
    }
    Ok(())
}

fn export(args: &[String]) -> Result<(), ChordError> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };

    // Positional paths override the config file
    let paths = positional(args, &["--config"]);
    if let Some(csv_path) = paths.first() {
        config.csv_path = PathBuf::from(csv_path);
    }
    if let Some(text_path) = paths.get(1) {
        config.text_path = PathBuf::from(text_path);
    }

    chordgen::export(&config)?;

    if config.wants(ExportFormat::Csv) {
        eprintln!("Chords saved to {}", config.csv_path.display());
    }
    if config.wants(ExportFormat::Text) {
        eprintln!("Chords saved to {}", config.text_path.display());
    }
    eprintln!(
        "Total chords generated: {}",
        ChordEngine::new().generate_catalog().len()
    );
    Ok(())
}

fn records(args: &[String]) -> Result<Vec<ChordRecord>, ChordError> {
    match flag_value(args, "--csv") {
        Some(path) => load_csv(path),
        None => Ok(ChordEngine::new().catalog_records()),
    }
}

fn query(args: &[String]) -> Result<(), ChordError> {
    let records = records(args)?;

    let mut query = ChordQuery::new();
    if let Some(t) = flag_value(args, "--type") {
        if ChordType::from_str(t).is_none() {
            eprintln!("Warning: '{}' is not a known chord type; nothing will match", t);
        }
        query = query.chord_type(t);
    }
    if let Some(ext) = flag_value(args, "--extension") {
        query = query.chord_extension(ext);
    }
    if let Some(note) = flag_value(args, "--note") {
        query = query.contains_note(note);
    }

    let matches = query.filter(&records);

    if args.iter().any(|a| a == "--yaml") {
        print!("{}", serde_yaml::to_string(&matches)?);
        return Ok(());
    }

    println!("Matching chords ({}):", matches.len());
    for record in matches {
        println!("  {:<8} = {}", record.name, record.notes);
    }
    Ok(())
}

fn summary(args: &[String]) -> Result<(), ChordError> {
    let records = records(args)?;
    let summary = ChordSummary::new(&records);

    println!("CHORD DATA ANALYSIS");
    println!("{}", "=".repeat(50));

    println!("\n1. CHORD TYPES SUMMARY:");
    println!("{}", "-".repeat(30));
    for (chord_type, count) in summary.type_counts() {
        println!("{:<12} {:>3} chords", chord_type, count);
    }

    println!("\n2. CHORD EXTENSIONS SUMMARY:");
    println!("{}", "-".repeat(30));
    for (extension, count) in summary.extension_counts() {
        println!("{:<20} {:>3} chords", extension, count);
    }

    println!("\n3. EXAMPLE QUERIES:");
    println!("{}", "-".repeat(30));
    let examples = [
        (
            "Dominant 7th chords",
            ChordQuery::new().chord_type("Dominant").chord_extension("Dominant 7th"),
            Some(5),
        ),
        ("Chords containing C#", ChordQuery::new().contains_note("C#"), Some(5)),
        (
            "Minor 9th chords",
            ChordQuery::new().chord_type("Minor").chord_extension("Minor 9th"),
            None,
        ),
        ("Suspended chords", ChordQuery::new().chord_type("Suspended"), Some(6)),
    ];
    for (title, query, limit) in examples {
        let matches = query.filter(&records);
        println!("\n{} ({}):", title, matches.len());
        let shown = limit.unwrap_or(matches.len()).min(matches.len());
        for record in &matches[..shown] {
            println!("  {:<8} = {}", record.name, record.notes);
        }
        if matches.len() > shown {
            println!("  ... and {} more", matches.len() - shown);
        }
    }

    println!("\n4. CHORD TYPE & EXTENSION MATRIX:");
    println!("{}", "-".repeat(30));
    for (chord_type, extensions) in &summary.by_type_and_extension {
        println!("\n{}:", chord_type);
        for (extension, chords) in extensions {
            println!("  {:<20} {:>2} chords", extension, chords.len());
        }
    }
    Ok(())
}
