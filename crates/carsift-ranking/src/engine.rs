//! RecommendationEngine: one request from note to ranked shortlist.
//!
//! Stage 1: Note → filter overrides (tighten only)
//! Stage 2: Filter the expanded catalog; stop if nothing survives
//! Stage 3: Cost and score the survivors against the filtered set
//! Stage 4: Stable sort, keep top N

use tracing::{debug, info};

use carsift_catalog::ExpandedCatalog;
use carsift_core::config::CarsiftConfig;
use carsift_core::errors::CarsiftResult;
use carsift_core::models::{Economics, FilterCriteria, WeightProfile};
use carsift_intent::IntentExtractor;

use crate::cost::CostModel;
use crate::evaluation::{EmptyResult, Evaluation, RankedList};
use crate::filter;
use crate::scoring;

/// Stateless across requests: every `evaluate` call is independent and
/// deterministic.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    intent: IntentExtractor,
    cost_model: CostModel,
    top_n: usize,
    default_weights: WeightProfile,
}

impl RecommendationEngine {
    pub fn new(intent: IntentExtractor, cost_model: CostModel, top_n: usize) -> Self {
        Self {
            intent,
            cost_model,
            top_n: top_n.max(1),
            default_weights: WeightProfile::default(),
        }
    }

    /// Weights offered before the caller adjusts any.
    pub fn with_default_weights(mut self, weights: WeightProfile) -> Self {
        self.default_weights = weights;
        self
    }

    pub fn from_config(config: &CarsiftConfig) -> CarsiftResult<Self> {
        config.validate()?;
        Ok(Self::new(
            IntentExtractor::new(&config.intent)?,
            CostModel::new(config.cost),
            config.ranking.top_n,
        )
        .with_default_weights(config.ranking.default_weights))
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn default_weights(&self) -> WeightProfile {
        self.default_weights
    }

    /// [`evaluate`](Self::evaluate) with the configured default weights.
    pub fn evaluate_with_default_weights(
        &self,
        catalog: &ExpandedCatalog,
        criteria: &FilterCriteria,
        economics: &Economics,
    ) -> Evaluation {
        self.evaluate(catalog, criteria, &self.default_weights, economics)
    }

    /// Run the full pipeline for one request.
    pub fn evaluate(
        &self,
        catalog: &ExpandedCatalog,
        criteria: &FilterCriteria,
        weights: &WeightProfile,
        economics: &Economics,
    ) -> Evaluation {
        // Stage 1: note overrides.
        let overrides = self.intent.extract(&criteria.note, criteria);
        let effective = overrides.apply(criteria);
        if !overrides.notices.is_empty() {
            debug!(notices = overrides.notices.len(), "note overrides applied");
        }

        // Stage 2: filter.
        let survivors = filter::filter(catalog.variants(), &effective);
        debug!(
            variants = catalog.len(),
            survivors = survivors.len(),
            "filter complete"
        );
        if survivors.is_empty() {
            info!(variants = catalog.len(), "no variant matches the filters");
            return Evaluation::Empty(EmptyResult {
                criteria: effective,
                notices: overrides.notices,
                variants_considered: catalog.len(),
            });
        }

        // Stage 3: cost and score.
        let scored = scoring::score(&survivors, &self.cost_model, economics, weights);

        // Stage 4: rank.
        let variants = scoring::rank(scored, self.top_n);
        info!(
            candidates = survivors.len(),
            ranked = variants.len(),
            "ranking complete"
        );

        Evaluation::Ranked(RankedList {
            criteria: effective,
            notices: overrides.notices,
            weights: *weights,
            candidates: survivors.len(),
            variants,
        })
    }
}
