//! rigdocctl library - exposes modules for testing.

pub mod cli;
pub mod commands;
pub mod history;
pub mod output;
pub mod picker;
pub mod rules_file;
