//! Rewrite a gradient-boosted model file so its scores are non-negative.
//!
//! Appends one tree to the model with a constant leaf score equal to the
//! absolute sum of the other trees' minimum leaves. Every score shifts by the
//! same constant, so the relative ranking of any two inputs is unchanged.
//!
//! Usage:
//!   model-fixr -i model.json -o model-fixed.json

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rankforest::compat::xgboost;

#[derive(Debug, Parser)]
#[command(name = "model-fixr")]
#[command(about = "Append a correction tree so the model's scores are always non-negative")]
struct Args {
    /// Filename for the input model.
    #[arg(short, long, default_value = "model.json")]
    input: PathBuf,

    /// Filename for the modified model.
    #[arg(short, long, default_value = "model-fixed.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    xgboost::fix_model_file(&args.input, &args.output)
        .with_context(|| format!("failed to fix {}", args.input.display()))?;

    Ok(())
}
