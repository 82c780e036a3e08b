//! Outcome of one evaluation request.

use serde::Serialize;

use carsift_core::models::{FilterCriteria, ScoredVariant, WeightProfile};
use carsift_intent::IntentNotice;

use crate::explain::Explanation;

/// A ranking, or the "nothing matched" terminal state.
///
/// An empty filter result is a normal outcome the caller presents as "broaden
/// your filters"; it is not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Evaluation {
    Ranked(RankedList),
    Empty(EmptyResult),
}

impl Evaluation {
    /// Criteria after note overrides, as actually applied.
    pub fn effective_criteria(&self) -> &FilterCriteria {
        match self {
            Self::Ranked(list) => &list.criteria,
            Self::Empty(empty) => &empty.criteria,
        }
    }

    pub fn notices(&self) -> &[IntentNotice] {
        match self {
            Self::Ranked(list) => &list.notices,
            Self::Empty(empty) => &empty.notices,
        }
    }

    pub fn ranked(&self) -> Option<&RankedList> {
        match self {
            Self::Ranked(list) => Some(list),
            Self::Empty(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

/// Best-first shortlist of scored variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedList {
    pub criteria: FilterCriteria,
    pub notices: Vec<IntentNotice>,
    pub weights: WeightProfile,
    /// Variants that passed the filter, before truncation to top N.
    pub candidates: usize,
    pub variants: Vec<ScoredVariant>,
}

impl RankedList {
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn top(&self) -> Option<&ScoredVariant> {
        self.variants.first()
    }

    /// Score breakdown of the variant at `position` (0 = best).
    pub fn explain(&self, position: usize) -> Option<Explanation> {
        self.variants
            .get(position)
            .map(|scored| Explanation::of(scored, &self.weights))
    }
}

/// No variant survived filtering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyResult {
    pub criteria: FilterCriteria,
    pub notices: Vec<IntentNotice>,
    /// Variants the filter ran over.
    pub variants_considered: usize,
}
