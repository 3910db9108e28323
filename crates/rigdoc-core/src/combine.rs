//! Evidence combination: from observed symptoms to ranked causes.
//!
//! Uses the incremental certainty update from classic rule-based
//! expert systems: each new piece of evidence claims a share of the
//! certainty the earlier ones left open. The result does not depend
//! on evidence order and never leaves [0, 1]. A single strength of
//! 1.0 pins the score at 1.0 no matter what else matched.

use crate::catalog::Catalog;
use crate::error::EngineError;
use crate::report::ResultItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Symptoms the user reports, each with how sure the user is of it.
///
/// Keys are exact symptom strings from the catalog. Unknown keys are
/// legal; they simply never match anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation {
    entries: BTreeMap<String, f64>,
}

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a symptom as definitely present (confidence 1.0).
    pub fn observe(&mut self, symptom: impl Into<String>) {
        self.entries.insert(symptom.into(), 1.0);
    }

    /// Report a symptom with the user's own confidence in [0.0, 1.0].
    ///
    /// Out-of-range values are rejected here, at the boundary, so the
    /// combiner never sees one. No clamping: a bad value is a caller
    /// bug worth surfacing.
    pub fn observe_with_confidence(
        &mut self,
        symptom: impl Into<String>,
        confidence: f64,
    ) -> Result<(), EngineError> {
        let symptom = symptom.into();
        if !(0.0..=1.0).contains(&confidence) {
            return Err(EngineError::OutOfRangeConfidence {
                symptom,
                value: confidence,
            });
        }
        self.entries.insert(symptom, confidence);
        Ok(())
    }

    /// Plain present/absent observation: every symptom at 1.0.
    pub fn from_symptoms<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut obs = Self::new();
        for symptom in symptoms {
            obs.observe(symptom);
        }
        obs
    }

    pub fn confidence_for(&self, symptom: &str) -> Option<f64> {
        self.entries.get(symptom).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in symptom order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), *c))
    }
}

/// Fold one more evidence strength into a running combined score.
///
/// `combine(acc, e) = acc + e * (1 - acc)`. Folding a set of strengths
/// through this gives the same score in any order, so neither catalog
/// nor observation ordering can change a diagnosis.
pub fn combine(acc: f64, strength: f64) -> f64 {
    acc + strength * (1.0 - acc)
}

/// Score every cause against an observation and rank the matches.
///
/// Causes sharing no symptom with the observation are left out
/// entirely. An empty observation yields an empty list; rejecting it
/// with a proper error is the caller's job, see
/// [`DiagnosisRun::evaluate`].
pub fn diagnose(catalog: &Catalog, observation: &Observation) -> Vec<ResultItem> {
    let mut items: Vec<ResultItem> = Vec::new();

    for cause in catalog.causes() {
        let mut score = 0.0;
        let mut matched = 0usize;

        for sw in &cause.symptoms {
            let Some(confidence) = observation.confidence_for(&sw.symptom) else {
                continue;
            };
            // Evidence strength scales the expert weight by how sure
            // the user was. Seeding from 0.0 makes the first strength
            // come through untouched.
            score = combine(score, sw.weight * confidence);
            matched += 1;
        }

        if matched == 0 {
            continue;
        }

        debug!(
            cause = %cause.name,
            matched,
            total = cause.symptoms.len(),
            score,
            "combined evidence for cause"
        );

        items.push(ResultItem {
            cause_id: cause.id,
            cause_name: cause.name.clone(),
            remedy: cause.remedy.clone(),
            score,
            matched_symptoms: matched,
            total_symptoms: cause.symptoms.len(),
        });
    }

    // Stable sort: equal scores keep catalog order.
    items.sort_by(|a, b| b.score.total_cmp(&a.score));
    items
}

/// One complete diagnosis: the observation as given plus the ranked
/// results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisRun {
    /// Symptom to user confidence, exactly as evaluated.
    pub observation: Observation,
    /// Matches sorted by descending score.
    pub results: Vec<ResultItem>,
}

impl DiagnosisRun {
    /// Evaluate an observation against a catalog.
    ///
    /// The checked entry point: an empty observation is an error here,
    /// while the raw [`diagnose`] would just return an empty list.
    pub fn evaluate(catalog: &Catalog, observation: Observation) -> Result<Self, EngineError> {
        if observation.is_empty() {
            return Err(EngineError::EmptyObservation);
        }
        let results = diagnose(catalog, &observation);
        Ok(Self {
            observation,
            results,
        })
    }

    /// Best match, if any cause matched at all.
    pub fn top(&self) -> Option<&ResultItem> {
        self.results.first()
    }
}
