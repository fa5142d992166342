use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use ludus_morph_lib::{citation, read_entries, Artifact, Lexicon};

#[derive(Parser)]
#[command(name = "ludus-morph", about = "Latin dictionary index builder and lookup tool", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a DICTLINE file and write the JSON index artifact.
    Build {
        /// Path to DICTLINE.GEN.
        dictline: PathBuf,

        /// Output path for the index artifact.
        #[arg(short, long, default_value = "latin-index.json")]
        output: PathBuf,

        /// Source label recorded in the artifact metadata.
        #[arg(long, default_value = "Whitaker's Words DICTLINE")]
        source: String,
    },
    /// Look up a Latin surface form in a built index.
    Lookup {
        /// Path to the index artifact.
        index: PathBuf,

        /// The form to resolve.
        query: String,

        /// Emit results as pretty-printed JSON instead of text.
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Build {
            dictline,
            output,
            source,
        } => build(&dictline, &output, &source),
        Command::Lookup {
            index,
            query,
            pretty,
        } => lookup(&index, &query, pretty),
    }
}

fn build(dictline: &PathBuf, output: &PathBuf, source: &str) -> Result<()> {
    let file = File::open(dictline)
        .with_context(|| format!("cannot open dictionary source {}", dictline.display()))?;
    let (entries, parse_stats) = read_entries(BufReader::new(file))
        .with_context(|| format!("failed reading {}", dictline.display()))?;

    let processed = chrono::Utc::now().to_rfc3339();
    let (artifact, build_stats) = Artifact::build(entries, source, &processed);
    artifact
        .save(output)
        .with_context(|| format!("cannot write index to {}", output.display()))?;

    info!(
        lines = parse_stats.lines,
        kept = parse_stats.kept,
        filtered = parse_stats.filtered,
        malformed = parse_stats.malformed,
        forms = build_stats.forms,
        stem_fallbacks = build_stats.stem_fallbacks,
        output = %output.display(),
        "index written"
    );
    Ok(())
}

fn lookup(index: &PathBuf, query: &str, pretty: bool) -> Result<()> {
    let lexicon = Lexicon::load(index)
        .with_context(|| format!("cannot load index {}", index.display()))?;
    let hits = lexicon.lookup(query);

    if pretty {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("no match for {query:?}");
        return Ok(());
    }
    for entry in hits {
        println!(
            "{}  [{}]  {}",
            citation(entry),
            entry.part_of_speech.display(),
            entry.gloss
        );
    }
    Ok(())
}
