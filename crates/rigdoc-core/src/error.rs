//! Error types for the diagnosis engine.

use thiserror::Error;

/// Errors raised while building an observation or running a diagnosis.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No symptoms observed. Select at least one symptom.")]
    EmptyObservation,

    #[error("Confidence {value} for symptom '{symptom}' is outside 0.0..=1.0")]
    OutOfRangeConfidence { symptom: String, value: f64 },
}

impl EngineError {
    /// Stable machine-readable code for each variant.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::EmptyObservation => "empty_observation",
            EngineError::OutOfRangeConfidence { .. } => "confidence_out_of_range",
        }
    }
}

/// Errors raised while validating authored catalog data.
///
/// These are authoring mistakes, caught once at construction. A catalog
/// that constructs successfully can never fail a diagnosis.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog has no causes")]
    Empty,

    #[error("Duplicate cause id {id}")]
    DuplicateCauseId { id: u32 },

    #[error("Cause '{cause}' lists no symptoms")]
    CauseWithoutSymptoms { cause: String },

    #[error("Cause '{cause}' lists symptom '{symptom}' more than once")]
    DuplicateSymptom { cause: String, symptom: String },

    #[error("Weight {weight} for symptom '{symptom}' of cause '{cause}' is outside 0.0..=1.0")]
    WeightOutOfRange {
        cause: String,
        symptom: String,
        weight: f64,
    },
}

impl CatalogError {
    /// Stable machine-readable code for each variant.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Empty => "empty_catalog",
            CatalogError::DuplicateCauseId { .. } => "duplicate_cause_id",
            CatalogError::CauseWithoutSymptoms { .. } => "cause_without_symptoms",
            CatalogError::DuplicateSymptom { .. } => "duplicate_symptom",
            CatalogError::WeightOutOfRange { .. } => "weight_out_of_range",
        }
    }
}
