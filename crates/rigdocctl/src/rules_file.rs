//! Catalog loading from TOML rules files.
//!
//! Lets users ship their own fault catalog without rebuilding. Format:
//!
//! ```toml
//! [[cause]]
//! id = 1
//! name = "Dead CMOS battery"
//! remedy = "Replace the coin cell and re-enter BIOS settings."
//!
//! [[cause.symptom]]
//! name = "Clock resets on every boot"
//! weight = 0.9
//! ```
//!
//! Validation is the engine's: bad weights or duplicate ids fail the
//! load with the file named in the error.

use anyhow::{Context, Result};
use rigdoc_core::{Catalog, Cause, SymptomWeight};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk rules file shape.
#[derive(Debug, Deserialize)]
struct RulesFile {
    #[serde(rename = "cause")]
    causes: Vec<CauseEntry>,
}

#[derive(Debug, Deserialize)]
struct CauseEntry {
    id: u32,
    name: String,
    remedy: String,
    #[serde(rename = "symptom")]
    symptoms: Vec<SymptomEntry>,
}

#[derive(Debug, Deserialize)]
struct SymptomEntry {
    name: String,
    weight: f64,
}

/// Load and validate a catalog from a TOML rules file.
pub fn load(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rules: RulesFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let causes = rules
        .causes
        .into_iter()
        .map(|entry| Cause {
            id: entry.id,
            name: entry.name,
            symptoms: entry
                .symptoms
                .into_iter()
                .map(|s| SymptomWeight {
                    symptom: s.name,
                    weight: s.weight,
                })
                .collect(),
            remedy: entry.remedy,
        })
        .collect();

    Catalog::new(causes).with_context(|| format!("Invalid rules in {}", path.display()))
}
