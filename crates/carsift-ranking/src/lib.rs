//! # carsift-ranking
//!
//! The evaluation pipeline over an expanded catalog:
//! note → filter → cost → score → top-N.
//!
//! [`RecommendationEngine::evaluate`] runs one request end to end. The stages
//! are also public for hosts that want to run them separately, along with
//! the helpers a presentation layer builds on: per-variant explanations,
//! side-by-side comparison, the analysis report, and dissatisfaction feedback.

pub mod compare;
pub mod cost;
pub mod engine;
pub mod evaluation;
pub mod explain;
pub mod feedback;
pub mod filter;
pub mod report;
pub mod scoring;

pub use compare::{compare, Comparison};
pub use cost::CostModel;
pub use engine::RecommendationEngine;
pub use evaluation::{EmptyResult, Evaluation, RankedList};
pub use explain::Explanation;
pub use feedback::{apply_dissatisfaction, random_dimension, FeedbackOutcome};
pub use report::AnalysisReport;
