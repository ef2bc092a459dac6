use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};

use lookalike_core::builder;
use lookalike_core::engine::{self, Annotation};
use lookalike_core::table::ConfusablesTable;

#[derive(Parser)]
#[command(name = "lookalike", about = "Detect and rectify visually confusable Unicode characters", version)]
struct Cli {
    /// Load a mapping table from a JSON document instead of the embedded one.
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Emit JSON instead of human-readable output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a string for confusable characters (exit code 1 on a hit).
    Check { input: String },
    /// Print the canonical skeleton of a string.
    Skeleton { input: String },
    /// Annotate every character with what it is similar to.
    Annotate { input: String },
    /// Print the fully rectified form of a string.
    Rectify { input: String },
    /// Rebuild the persisted mapping table from a downloaded copy of the
    /// Unicode confusables file.
    Update {
        /// Local copy of the published confusables.txt.
        #[arg(long)]
        source: PathBuf,
        /// Where to write the JSON mapping table.
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(serde::Serialize)]
struct CheckReport<'a> {
    confusable: bool,
    rectified: String,
    annotations: &'a [Annotation],
}

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("lookalike: {e:#}");
            process::exit(2);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    // Table load failure is fatal before any operation runs.
    let loaded;
    let table: &ConfusablesTable = match &cli.table {
        Some(path) => {
            loaded = ConfusablesTable::load(path)
                .with_context(|| format!("loading mapping table from {}", path.display()))?;
            &loaded
        }
        None => ConfusablesTable::embedded(),
    };

    match cli.command {
        Command::Check { input } => check(table, &input, cli.json),
        Command::Skeleton { input } => {
            let atoms = engine::skeleton(table, &input);
            if cli.json {
                println!("{}", serde_json::to_string(&atoms)?);
            } else {
                println!("{}", atoms.concat());
            }
            Ok(0)
        }
        Command::Annotate { input } => {
            let annotations = engine::confusables(table, &input);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&annotations)?);
            } else {
                print_annotations(&annotations);
            }
            Ok(0)
        }
        Command::Rectify { input } => {
            println!("{}", engine::rectify(table, &input));
            Ok(0)
        }
        Command::Update { source, output } => update(&source, &output),
    }
}

fn check(table: &ConfusablesTable, input: &str, json: bool) -> anyhow::Result<i32> {
    let annotations = engine::confusables(table, input);
    let confusable = engine::contains_confusables(table, input);

    if json {
        let report = CheckReport {
            confusable,
            rectified: engine::rectify(table, input),
            annotations: &annotations,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if confusable {
        eprintln!("lookalike: confusable characters detected");
        print_annotations(&annotations);
        eprintln!("  rectified: {}", engine::rectify(table, input));
    }

    Ok(if confusable { 1 } else { 0 })
}

fn print_annotations(annotations: &[Annotation]) {
    for entry in annotations {
        match &entry.similar_to {
            Some(replacement) if replacement.is_empty() => {
                eprintln!("  U+{:04X} zero-width character, removed", entry.ch as u32);
            }
            Some(replacement) => {
                eprintln!(
                    "  '{}' (U+{:04X}) looks like {replacement:?}",
                    entry.ch, entry.ch as u32
                );
            }
            None => {}
        }
    }
}

fn update(source: &Path, output: &Path) -> anyhow::Result<i32> {
    // No network here: download the published file out-of-band and point
    // --source at it. The builder still goes through its fetch boundary.
    let count = builder::update_table(
        |_url| std::fs::read_to_string(source),
        |document| std::fs::write(output, document),
    )
    .with_context(|| format!("rebuilding mapping table from {}", source.display()))?;

    eprintln!(
        "lookalike: wrote {count} mapping entries to {}",
        output.display()
    );
    Ok(0)
}
