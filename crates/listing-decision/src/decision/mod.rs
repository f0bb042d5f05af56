//! Listing scoring, ranking, justification, and decision normalization.

pub mod advisory;
pub mod domain;
pub mod insight;
pub mod normalizer;
pub mod ranking;
pub mod reasons;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    ComponentScores, DemandLevel, ListingSnapshot, MatchScoreResult, ScoreInput, SearchContext,
    Verdict,
};
pub use insight::{InsightRequest, ListingInsight};
pub use normalizer::{normalize_decision, NormalizedDecision, RawDecision};
pub use ranking::{rank_listings, RankedListing, SearchRequest, SearchRequestError};
pub use reasons::{generate_reasons, MAX_REASONS};
pub use router::{decision_router, RankResponse};
pub use scoring::{classify, compute_match_score};
