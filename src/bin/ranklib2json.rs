//! Convert a RankLib XML ensemble model to the canonical JSON tree format.
//!
//! Usage:
//!   ranklib2json model.txt              # canonical JSON to stdout
//!   ranklib2json model.txt -o out.json  # canonical JSON to a file

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rankforest::compat::ranklib;
use rankforest::persist;

#[derive(Debug, Parser)]
#[command(name = "ranklib2json")]
#[command(about = "Convert a RankLib XML ensemble to canonical JSON")]
struct Args {
    /// Path to the RankLib XML model.
    input: PathBuf,

    /// Output file; prints to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let forest = ranklib::parse_file(&args.input)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    let schema = persist::to_schema(&forest);
    let rendered = serde_json::to_string_pretty(&schema)?;

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}
