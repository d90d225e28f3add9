// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use keyspell::config::Settings;
use keyspell::music::{Chord, ChordQuality, ChromaticScale, MajorScale, Note, Spelling};
use keyspell::selection::{conventional_roots, key_signatures, Notation};
use tracing::Level;

fn print_usage() {
    println!("keyspell - Scale and chord spelling");
    println!();
    println!("Usage: keyspell [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  scale [ROOT]                    Print the major scale on ROOT");
    println!("  chord <ROOT> <QUALITY>          Print a triad or seventh chord (e.g. C aug, Bb dom7)");
    println!("  chromatic [ROOT] [--sharps|--flats]");
    println!("                                  Print the chromatic scale (only C can be respelled)");
    println!("  roots                           List the conventional root notes");
    println!("  keys                            List key signatures");
    println!("  help                            Show this help message");
    println!();
    println!("Options:");
    println!("  --config <FILE>   Load settings from a YAML or TOML file");
    println!("  --verbose         Log engine decisions to stderr");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn join(notes: &[Note], notation: Notation) -> String {
    notes
        .iter()
        .map(|&n| notation.render(n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn root_arg(arg: Option<&String>, settings: &Settings) -> Result<Note> {
    match arg {
        Some(s) => Ok(Note::parse(s)?),
        None => settings.root(),
    }
}

fn print_scale(root: Note, settings: &Settings) -> Result<()> {
    let scale = MajorScale::new(root).with_context(|| format!("Cannot build {} major", root))?;
    println!("{}: {}", scale, join(scale.notes(), settings.notation));
    Ok(())
}

fn print_chord(root: Note, quality: &str, settings: &Settings) -> Result<()> {
    let quality = ChordQuality::parse(quality)?;
    let chord = Chord::new(root, quality)?;
    println!("{}: {}", chord, join(chord.notes(), settings.notation));
    Ok(())
}

fn print_chromatic(root: Note, spelling: Option<Spelling>, settings: &Settings) -> Result<()> {
    let requested = spelling.or(Some(settings.c_spelling).filter(|_| root == Note::C));
    let scale = ChromaticScale::with_override(root, requested)?;
    println!(
        "{} chromatic ({}): {}",
        root,
        scale.spelling(),
        join(scale.notes(), settings.notation)
    );
    Ok(())
}

fn print_roots(settings: &Settings) {
    for root in conventional_roots() {
        println!("{}", settings.notation.render(root));
    }
}

fn print_keys(settings: &Settings) {
    for sig in key_signatures() {
        let altered = join(sig.altered_notes(), settings.notation);
        println!(
            "{:<3} {:<15} {}",
            settings.notation.render(sig.root()),
            sig.label(),
            altered
        );
    }
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");
    init_logging(verbose);

    let settings = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args
                .get(i + 1)
                .map(PathBuf::from)
                .ok_or_else(|| anyhow!("--config requires a file path"))?;
            args.drain(i..=i + 1);
            Settings::load(path)?
        }
        None => Settings::default(),
    };

    let spelling = if args.iter().any(|a| a == "--sharps") {
        Some(Spelling::Sharps)
    } else if args.iter().any(|a| a == "--flats") {
        Some(Spelling::Flats)
    } else {
        None
    };
    args.retain(|a| a != "--sharps" && a != "--flats");

    if args.is_empty() {
        println!("keyspell - Scale and chord spelling");
        println!("Run with help for usage information");
        return Ok(());
    }

    match args[0].as_str() {
        "scale" => {
            let root = root_arg(args.get(1), &settings)?;
            print_scale(root, &settings)?;
        }
        "chord" => {
            if args.len() < 3 {
                bail!("chord requires a root and a quality (e.g. chord C maj7)");
            }
            let root = root_arg(args.get(1), &settings)?;
            print_chord(root, &args[2], &settings)?;
        }
        "chromatic" => {
            let root = root_arg(args.get(1), &settings)?;
            print_chromatic(root, spelling, &settings)?;
        }
        "roots" => print_roots(&settings),
        "keys" => print_keys(&settings),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
