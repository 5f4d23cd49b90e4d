use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ssm_matrices::pipeline::{self, PipelineConfig};

/// Build the corpus-wide code-presence-by-session matrix.
#[derive(Parser)]
#[command(name = "build_presence_matrix")]
struct Cli {
    /// Directory of <name>-CBLM.csv session files
    input_dir: PathBuf,
    /// Directory for code-presence-matrix.csv (created if missing)
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
    pipeline::build_presence_matrix(&cfg).context("building presence matrix failed")
}
