mod components;
mod verdict;
mod weights;

pub use verdict::{classify, EXCELLENT_THRESHOLD, GOOD_THRESHOLD, NEUTRAL_THRESHOLD};
pub use weights::{ScoreWeights, MATCH_WEIGHTS};

pub(crate) use components::market_discount_percent;

use super::domain::{ComponentScores, MatchScoreResult, ScoreInput};
use super::reasons::generate_reasons;

/// Runs the four independent scorers over one input.
pub fn component_scores(input: &ScoreInput) -> ComponentScores {
    ComponentScores {
        price_score: components::price_score(input),
        location_score: components::location_score(input),
        demand_score: components::demand_score(input),
        quality_score: components::quality_score(input),
    }
}

/// Blends component scores with [`MATCH_WEIGHTS`], rounding halves up.
pub fn aggregate(components: &ComponentScores) -> u8 {
    let weights = MATCH_WEIGHTS;
    let weighted = u32::from(components.price_score) * weights.price
        + u32::from(components.location_score) * weights.location
        + u32::from(components.demand_score) * weights.demand
        + u32::from(components.quality_score) * weights.quality;
    let total = weights.total();
    let rounded = (weighted + total / 2) / total;
    rounded.min(100) as u8
}

/// Scores, classifies, and justifies a single listing for a single query context.
pub fn compute_match_score(input: &ScoreInput) -> MatchScoreResult {
    let components = component_scores(input);
    let match_score = aggregate(&components);

    MatchScoreResult {
        match_score,
        components,
        verdict: classify(match_score),
        reasons: generate_reasons(input),
    }
}
