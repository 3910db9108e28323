//! Fault catalog: causes with weighted symptoms and fix advice.
//!
//! The catalog is validated once at construction and read-only after
//! that. Rule weights come from a human expert, not from data.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How strongly one symptom points at the owning cause, on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomWeight {
    /// Human-readable symptom text. Exact string match is identity.
    pub symptom: String,
    /// Expert weight in [0.0, 1.0]. 1.0 means certain on its own.
    pub weight: f64,
}

/// A diagnosable hardware fault with its evidence rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cause {
    /// Stable numeric id, unique within the catalog.
    pub id: u32,
    /// Display name, e.g. "Processor overheating".
    pub name: String,
    /// Weighted symptoms backing this cause.
    pub symptoms: Vec<SymptomWeight>,
    /// What to do about it, imperative prose.
    pub remedy: String,
}

impl Cause {
    /// Expert weight for one symptom, if this cause lists it.
    pub fn weight_for(&self, symptom: &str) -> Option<f64> {
        self.symptoms
            .iter()
            .find(|sw| sw.symptom == symptom)
            .map(|sw| sw.weight)
    }
}

/// Validated, read-only collection of causes.
///
/// `symptoms()` is indexed eagerly at construction so repeated checklist
/// rendering never re-sorts.
#[derive(Debug, Clone)]
pub struct Catalog {
    causes: Vec<Cause>,
    symptom_index: Vec<String>,
}

impl Catalog {
    /// Validate and index a set of causes.
    ///
    /// Out-of-range weights, duplicate ids and symptomless causes are
    /// authoring mistakes and are rejected here, before any diagnosis
    /// can run. A constructed catalog therefore always has at least
    /// one symptom to list.
    pub fn new(causes: Vec<Cause>) -> Result<Self, CatalogError> {
        if causes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_ids = BTreeSet::new();
        for cause in &causes {
            if !seen_ids.insert(cause.id) {
                return Err(CatalogError::DuplicateCauseId { id: cause.id });
            }
            // A cause with no symptoms could never match anything.
            if cause.symptoms.is_empty() {
                return Err(CatalogError::CauseWithoutSymptoms {
                    cause: cause.name.clone(),
                });
            }

            let mut seen_symptoms = BTreeSet::new();
            for sw in &cause.symptoms {
                if !seen_symptoms.insert(sw.symptom.as_str()) {
                    return Err(CatalogError::DuplicateSymptom {
                        cause: cause.name.clone(),
                        symptom: sw.symptom.clone(),
                    });
                }
                // NaN fails the range check too.
                if !(0.0..=1.0).contains(&sw.weight) {
                    return Err(CatalogError::WeightOutOfRange {
                        cause: cause.name.clone(),
                        symptom: sw.symptom.clone(),
                        weight: sw.weight,
                    });
                }
            }
        }

        let mut symptom_index: Vec<String> = causes
            .iter()
            .flat_map(|c| c.symptoms.iter().map(|sw| sw.symptom.clone()))
            .collect();
        symptom_index.sort();
        symptom_index.dedup();

        Ok(Self {
            causes,
            symptom_index,
        })
    }

    /// Causes in authored order.
    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    /// Every known symptom, sorted and deduplicated. Checklist source.
    pub fn symptoms(&self) -> &[String] {
        &self.symptom_index
    }

    /// True if the catalog lists this exact symptom for any cause.
    pub fn knows_symptom(&self, symptom: &str) -> bool {
        self.symptom_index
            .binary_search_by(|s| s.as_str().cmp(symptom))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.causes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }
}
