//! Set-relative sub-scores and the weighted total.
//!
//! Torque, acceleration, and cost are normalized against the filtered set,
//! not the whole catalog: the strongest car in a narrow slice scores near the
//! top even if the catalog holds stronger ones.

use carsift_core::constants::{
    ACCELERATION_FLOOR, MISSING_FIGURE_SUBSCORE, NEUTRAL_SUBSCORE, SCORE_MAX, SCORE_MIN,
};
use carsift_core::models::{Dimension, Economics, ExpandedVariant, ScoredVariant, WeightProfile};

use crate::cost::CostModel;

/// Order in which dimension contributions are summed.
const SUM_ORDER: [Dimension; 5] = [
    Dimension::Performance,
    Dimension::Resale,
    Dimension::Safety,
    Dimension::Comfort,
    Dimension::Cost,
];

/// Cost and score every candidate. Output order matches `candidates`.
pub fn score(
    candidates: &[&ExpandedVariant],
    cost_model: &CostModel,
    economics: &Economics,
    weights: &WeightProfile,
) -> Vec<ScoredVariant> {
    let costs: Vec<_> = candidates
        .iter()
        .map(|v| cost_model.annual_cost(&v.record, economics))
        .collect();
    let torque = torque_scores(&candidates.iter().map(|v| v.record.torque).collect::<Vec<_>>());
    let acceleration =
        acceleration_scores(&candidates.iter().map(|v| v.record.acceleration).collect::<Vec<_>>());
    let cost = cost_scores(&costs.iter().map(|c| c.total).collect::<Vec<_>>());

    candidates
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let mut scored = ScoredVariant {
                variant: (*variant).clone(),
                annual_energy_cost: costs[i].energy,
                total_annual_cost: costs[i].total,
                acceleration_score: acceleration[i],
                torque_score: torque[i],
                performance_blended: blended_performance(
                    variant.record.performance_score,
                    torque[i],
                    acceleration[i],
                ),
                cost_score: cost[i],
                total_score: 0.0,
            };
            scored.total_score = total_score(&scored, weights);
            scored
        })
        .collect()
}

/// Sort by total score, best first, and keep `top_n`.
///
/// The sort is stable: equal totals keep their filter order.
pub fn rank(mut scored: Vec<ScoredVariant>, top_n: usize) -> Vec<ScoredVariant> {
    scored.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    scored.truncate(top_n);
    scored
}

/// `torque / max × 5`. A zero torque figure scores exactly 1.
pub fn torque_scores(torques: &[f64]) -> Vec<f64> {
    let max = torques.iter().copied().fold(0.0, f64::max);
    torques
        .iter()
        .map(|&t| {
            if t == 0.0 {
                MISSING_FIGURE_SUBSCORE
            } else {
                t / max * SCORE_MAX
            }
        })
        .collect()
}

/// Faster 0-100 → higher score, linear between the set's fastest and slowest
/// nonzero times, clamped to `[0.5, 5]`. A zero time scores 1. Without a spread
/// every variant gets the neutral score.
pub fn acceleration_scores(times: &[f64]) -> Vec<f64> {
    let nonzero = times.iter().copied().filter(|&t| t > 0.0);
    let min = nonzero.clone().fold(f64::INFINITY, f64::min);
    let max = nonzero.fold(f64::NEG_INFINITY, f64::max);
    let has_spread = min.is_finite() && max.is_finite() && max != min;

    times
        .iter()
        .map(|&t| {
            let raw = if !has_spread {
                NEUTRAL_SUBSCORE
            } else if t == 0.0 {
                MISSING_FIGURE_SUBSCORE
            } else {
                SCORE_MAX - SCORE_MAX * (t - min) / (max - min)
            };
            raw.clamp(ACCELERATION_FLOOR, SCORE_MAX)
        })
        .collect()
}

/// Half subjective performance, half the mean of torque and acceleration.
pub fn blended_performance(subjective: f64, torque: f64, acceleration: f64) -> f64 {
    (0.5 * subjective + 0.5 * (torque + acceleration) / 2.0).clamp(SCORE_MIN, SCORE_MAX)
}

/// Cheaper → higher: `5 × (1 − total / max)`, clamped to `[0, 5]`.
pub fn cost_scores(totals: &[f64]) -> Vec<f64> {
    let max = totals.iter().copied().fold(0.0, f64::max);
    totals
        .iter()
        .map(|&total| {
            if max <= 0.0 {
                return NEUTRAL_SUBSCORE;
            }
            let score = SCORE_MAX * (1.0 - total / max);
            if score.is_finite() {
                score.clamp(0.0, SCORE_MAX)
            } else {
                0.0
            }
        })
        .collect()
}

/// Weighted sum over all dimensions. Not normalized by the weight total.
pub fn total_score(scored: &ScoredVariant, weights: &WeightProfile) -> f64 {
    SUM_ORDER
        .iter()
        .map(|&dimension| scored.contribution(dimension, weights))
        .sum()
}
