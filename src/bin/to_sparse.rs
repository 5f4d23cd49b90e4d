use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ssm_matrices::pipeline::{self, PipelineConfig};

/// Convert dense code matrices to sparse (from, to, value) triple files,
/// dropping cells below the threshold.
#[derive(Parser)]
#[command(name = "to_sparse")]
struct Cli {
    /// Directory of <name>-CM.csv dense matrices
    cm_dir: PathBuf,
    /// Directory for the <name>-3cols_get<min_value>.csv outputs (created if missing)
    output_dir: PathBuf,
    /// Minimum cell value to emit; 0 emits every cell, zeros included
    #[arg(default_value_t = 0)]
    min_value: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = PipelineConfig::new(cli.cm_dir, cli.output_dir);
    pipeline::convert_to_sparse(&cfg, cli.min_value).context("sparse conversion failed")
}
