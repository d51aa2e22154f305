use crate::config::resolve_config;
use crate::generator::{generate_file, GeneratedModule};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Command-line interface for apigen
///
/// Generates the binding, handler and dispatch code for one annotated source file.
#[derive(Parser, Debug)]
#[command(name = "apigen", version)]
#[command(about = "Generate request binding and dispatch code for annotated Rust services", long_about = None)]
pub struct Cli {
    /// Annotated Rust source file
    pub input: PathBuf,

    /// Path of the generated module
    pub output: PathBuf,
}

/// Generate the module described by `cli`
///
/// # Errors
///
/// Returns an error if the sidecar config is invalid, the input cannot be
/// read, generation fails or the output cannot be written.
pub fn run(cli: &Cli) -> anyhow::Result<GeneratedModule> {
    let config = resolve_config(&cli.input)
        .with_context(|| format!("Failed to load config for {}", cli.input.display()))?;
    generate_file(&cli.input, &cli.output, &config)
}

/// Parse process arguments, run, and map the outcome to an exit code
pub fn run_cli() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("generation failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
