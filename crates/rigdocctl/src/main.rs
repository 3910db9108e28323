//! rigdocctl - terminal front-end for the rigdoc diagnosis engine.

use anyhow::Result;
use clap::Parser;
use rigdocctl::cli::{Cli, Commands};
use rigdocctl::commands;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG overrides. Logs go to stderr so
    // stdout stays clean for command output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = commands::load_catalog(cli.rules.as_deref())?;

    match cli.command {
        Commands::Symptoms { json } => commands::handle_symptoms(&catalog, json),
        Commands::Causes { json } => commands::handle_causes(&catalog, json),
        Commands::Diagnose {
            symptoms,
            pick,
            json,
            no_save,
        } => commands::handle_diagnose(&catalog, &symptoms, pick, json, no_save),
        Commands::History { clear, json } => commands::handle_history(clear, json),
    }
}
