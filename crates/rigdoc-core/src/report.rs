//! Result shaping: ranked items, qualitative labels, plain-text report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the "very confident" bucket.
pub const VERY_CONFIDENT_MIN: f64 = 0.8;
/// Lower bound of the "confident" bucket.
pub const CONFIDENT_MIN: f64 = 0.6;
/// Lower bound of the "fairly confident" bucket.
pub const FAIRLY_CONFIDENT_MIN: f64 = 0.4;

/// One ranked diagnosis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    pub cause_id: u32,
    pub cause_name: String,
    pub remedy: String,
    /// Combined score in [0.0, 1.0]. The ranking key.
    pub score: f64,
    /// How many of the cause's symptoms were observed.
    pub matched_symptoms: usize,
    /// How many symptoms the cause lists in total.
    pub total_symptoms: usize,
}

impl ResultItem {
    /// Score as a whole percentage, rounded to nearest.
    ///
    /// Display only. Ranking always uses the raw score, so two items
    /// rounding to the same percentage still keep their exact order.
    pub fn percent(&self) -> u8 {
        (self.score * 100.0).round() as u8
    }

    pub fn label(&self) -> ConfidenceLabel {
        ConfidenceLabel::from_score(self.score)
    }
}

/// Qualitative bucket for a combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLabel {
    VeryConfident,
    Confident,
    FairlyConfident,
    LowConfidence,
}

impl ConfidenceLabel {
    /// Bucket a score. Thresholds are inclusive on the lower bound and
    /// the buckets cover all of [0, 1] with no gaps.
    pub fn from_score(score: f64) -> Self {
        if score >= VERY_CONFIDENT_MIN {
            ConfidenceLabel::VeryConfident
        } else if score >= CONFIDENT_MIN {
            ConfidenceLabel::Confident
        } else if score >= FAIRLY_CONFIDENT_MIN {
            ConfidenceLabel::FairlyConfident
        } else {
            ConfidenceLabel::LowConfidence
        }
    }
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConfidenceLabel::VeryConfident => "very confident",
            ConfidenceLabel::Confident => "confident",
            ConfidenceLabel::FairlyConfident => "fairly confident",
            ConfidenceLabel::LowConfidence => "low confidence",
        };
        write!(f, "{}", text)
    }
}

// =============================================================================
// Format results
// =============================================================================

/// Format ranked results as plain text.
pub fn format_results_text(items: &[ResultItem]) -> String {
    if items.is_empty() {
        return "No known cause matches the observed symptoms.".to_string();
    }

    let mut out = String::new();
    out.push_str("PROBABLE CAUSES\n");
    out.push_str("===============\n\n");

    for (rank, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}%, {})\n",
            rank + 1,
            item.cause_name,
            item.percent(),
            item.label()
        ));
        out.push_str(&format!(
            "   Matched {} of {} known symptoms\n",
            item.matched_symptoms, item.total_symptoms
        ));
        out.push_str(&format!("   Fix: {}\n", item.remedy));
        out.push('\n');
    }

    out
}
