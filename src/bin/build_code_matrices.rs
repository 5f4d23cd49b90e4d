use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ssm_matrices::pipeline::{self, PipelineConfig};

/// Build one dense code matrix per session file, plus the corpus-wide
/// sum matrix.
#[derive(Parser)]
#[command(name = "build_code_matrices")]
struct Cli {
    /// Directory of <name>-CBLM.csv session files
    input_dir: PathBuf,
    /// Directory for the <name>-CM.csv outputs (created if missing)
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = PipelineConfig::new(cli.input_dir, cli.output_dir);
    pipeline::build_code_matrices(&cfg).context("building code matrices failed")
}
