use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use arinote::application::services::{DatasetReshaper, ReshapeError, ReshapeOutput};
use arinote::infrastructure::observability::{TracingConfig, init_tracing};

/// Reshape the openFDA drug download into a simplified JSON/CSV pair.
#[derive(Debug, Parser)]
#[command(name = "reshape-fda", version)]
struct Cli {
    /// Directory every input and output path must stay inside.
    #[arg(long, env = "ARINOTE_PROJECT_ROOT")]
    project_root: Option<PathBuf>,

    /// Raw dataset; defaults to data/fda/drug-drugsfda-0001-of-00014.json under the root.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output directory; defaults to data/fda/processed under the root.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<ReshapeOutput> {
    let root = match cli.project_root {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let reshaper = DatasetReshaper::for_project_root(&root)
        .with_context(|| format!("invalid project root {}", root.display()))?;
    let input = cli.input.unwrap_or_else(|| reshaper.default_input_path());
    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| reshaper.default_output_dir());

    Ok(reshaper.reshape(&input, &output_dir)?)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing(TracingConfig::default(), "reshape-fda");

    match run(Cli::parse()) {
        Ok(output) => {
            println!("Processed {} records", output.record_count);
            println!("- Simplified JSON: {}", output.json_path.display());
            println!("- CSV version: {}", output.csv_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let path_validation = e
                .downcast_ref::<ReshapeError>()
                .is_some_and(ReshapeError::is_path_validation);
            tracing::error!(error = %format!("{e:#}"), path_validation, "Reshaping failed");
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}
