use serde::{Deserialize, Serialize};

use super::advisory::{price_diff_percent, recommendation, risks};
use super::domain::{MatchScoreResult, ScoreInput};
use super::normalizer::{normalize_decision, NormalizedDecision, RawDecision};
use super::scoring::compute_match_score;

/// Request body for the single-listing insight view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub listing_id: String,
    pub input: ScoreInput,
}

/// Engine result paired with the canonical decision every panel renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInsight {
    pub listing_id: String,
    pub result: MatchScoreResult,
    pub decision: NormalizedDecision,
}

impl ListingInsight {
    pub fn build(listing_id: impl Into<String>, input: &ScoreInput) -> Self {
        let result = compute_match_score(input);
        let raw = engine_payload(&result, input);
        let decision = normalize_decision(Some(&raw));

        Self {
            listing_id: listing_id.into(),
            result,
            decision,
        }
    }
}

/// Packages engine output and advisory signals in the shared raw decision shape.
pub fn engine_payload(result: &MatchScoreResult, input: &ScoreInput) -> RawDecision {
    let demand = input
        .demand_level
        .map(|level| level.label())
        .unwrap_or("medium");

    RawDecision::new()
        .with("matchScore", result.match_score)
        .with("reasons", result.reasons.clone())
        .with("risks", risks(input))
        .with("priceDiffPercent", price_diff_percent(input))
        .with("demandLevel", demand)
        .with("recommendation", recommendation(input))
}
