//! Core diagnosis engine for rigdoc.
//!
//! Pure and synchronous: a validated fault catalog plus an evidence
//! combiner that turns observed symptoms into a ranked list of
//! probable causes. No I/O, no clock, no shared state.

mod builtin;
pub mod catalog;
pub mod combine;
pub mod error;
pub mod report;

pub use catalog::{Catalog, Cause, SymptomWeight};
pub use combine::{combine, diagnose, DiagnosisRun, Observation};
pub use error::{CatalogError, EngineError};
pub use report::{format_results_text, ConfidenceLabel, ResultItem};
