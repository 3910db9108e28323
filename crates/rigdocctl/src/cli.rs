//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap. Parsing stays separate from
//! execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rigdoc CLI
#[derive(Parser)]
#[command(name = "rigdocctl")]
#[command(about = "Rigdoc - rule-based PC hardware fault advisor", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Load the fault catalog from a TOML rules file instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List every symptom the catalog knows about
    Symptoms {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Show the catalog of causes with their weighted symptoms
    Causes {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Rank probable causes for a set of observed symptoms
    Diagnose {
        /// Symptom names or checklist numbers, each optionally
        /// weighted as NAME=CONF (e.g. "3=0.5"); bare entries count
        /// as fully confident
        #[arg(value_name = "SYMPTOM")]
        symptoms: Vec<String>,

        /// Pick symptoms interactively from a numbered checklist
        #[arg(long)]
        pick: bool,

        /// Output JSON only
        #[arg(long)]
        json: bool,

        /// Do not archive this run in the history file
        #[arg(long)]
        no_save: bool,
    },

    /// Show archived diagnosis runs, newest first
    History {
        /// Delete the archive instead of showing it
        #[arg(long)]
        clear: bool,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },
}
