//! Archive of past diagnosis runs.
//!
//! JSONL file, one run per line, capped at the newest ten runs.
//! Malformed lines are skipped on read so an old or hand-edited file
//! never blocks the tool.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rigdoc_core::DiagnosisRun;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Most runs kept on disk; the oldest beyond this are evicted.
pub const HISTORY_CAP: usize = 10;

/// One archived run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub run: DiagnosisRun,
}

impl HistoryEntry {
    pub fn new(run: &DiagnosisRun) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            run: run.clone(),
        }
    }
}

/// History store backed by a JSONL file.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Store under an explicit directory (tests pass a tempdir).
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("history.jsonl"),
        }
    }

    /// Store under the user data directory.
    pub fn default_location() -> Result<Self> {
        let base = dirs::data_dir().context("Could not determine the user data directory")?;
        Ok(Self::new(&base.join("rigdoc")))
    }

    /// Append a run, evicting the oldest entries beyond the cap.
    pub fn append(&self, entry: &HistoryEntry) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.push(entry.clone());

        if entries.len() > HISTORY_CAP {
            let excess = entries.len() - HISTORY_CAP;
            entries.drain(..excess);
        }

        self.write_all(&entries)
    }

    /// All archived runs, oldest first (file order).
    pub fn read_all(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    // Skip malformed lines (forward compatibility)
                    eprintln!("Warning: skipping malformed history line: {}", e);
                }
            }
        }

        Ok(entries)
    }

    /// Delete the archive file.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }

    fn write_all(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut out = String::new();
        for entry in entries {
            out.push_str(&serde_json::to_string(entry)?);
            out.push('\n');
        }
        fs::write(&self.path, out)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}
