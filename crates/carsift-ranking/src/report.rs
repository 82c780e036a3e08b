//! Plain-language summary of a ranking for a request that carried a note.

use serde::Serialize;

use carsift_intent::IntentNotice;

use crate::evaluation::Evaluation;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// The user's note, trimmed.
    pub note: String,
    pub brand: String,
    pub trim: String,
    pub torque: f64,
    pub acceleration: f64,
    pub total_score: f64,
    /// Overrides the note applied to the filters.
    pub overrides: Vec<IntentNotice>,
}

impl AnalysisReport {
    /// `None` when the request had no note or nothing was ranked.
    pub fn build(evaluation: &Evaluation) -> Option<Self> {
        let note = evaluation.effective_criteria().note.trim();
        if note.is_empty() {
            return None;
        }
        let top = evaluation.ranked()?.top()?;
        let record = &top.variant.record;
        Some(Self {
            note: note.to_string(),
            brand: record.brand.clone(),
            trim: record.trim.clone(),
            torque: record.torque,
            acceleration: record.acceleration,
            total_score: top.total_score,
            overrides: evaluation.notices().to_vec(),
        })
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Request: \"{}\"", self.note)?;
        writeln!(f, "Top pick: {} {}", self.brand, self.trim)?;
        writeln!(
            f,
            "Chosen under your filters and weights, with objective performance \
             (torque {:.0} Nm, 0-100 in {:.1} s) weighed in.",
            self.torque, self.acceleration
        )?;
        for notice in &self.overrides {
            writeln!(f, "- {notice}")?;
        }
        Ok(())
    }
}
