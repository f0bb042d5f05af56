use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{ListingSnapshot, MatchScoreResult, ScoreInput, SearchContext};
use super::scoring::compute_match_score;
use crate::config::SearchConfig;

/// Candidate set handed over by retrieval for one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub context: SearchContext,
    pub listings: Vec<ListingSnapshot>,
}

impl SearchRequest {
    /// Rejects requests the ranking surface will not score.
    pub fn validate(&self, config: &SearchConfig) -> Result<(), SearchRequestError> {
        if self.listings.len() > config.max_candidates {
            return Err(SearchRequestError::TooManyCandidates {
                limit: config.max_candidates,
                actual: self.listings.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.listings.len());
        for (position, listing) in self.listings.iter().enumerate() {
            if listing.listing_id.trim().is_empty() {
                return Err(SearchRequestError::MissingListingId { position });
            }
            if !seen.insert(listing.listing_id.as_str()) {
                return Err(SearchRequestError::DuplicateListingId(
                    listing.listing_id.clone(),
                ));
            }
        }

        Ok(())
    }

    pub fn rank(&self, config: &SearchConfig) -> Result<Vec<RankedListing>, SearchRequestError> {
        self.validate(config)?;
        Ok(rank_listings(&self.context, &self.listings))
    }
}

/// One scored search result, positioned by descending match score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedListing {
    pub rank: usize,
    pub listing_id: String,
    pub result: MatchScoreResult,
}

/// Validation failures for a ranking request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchRequestError {
    #[error("search accepts at most {limit} listings, received {actual}")]
    TooManyCandidates { limit: usize, actual: usize },
    #[error("listing at position {position} has no listing id")]
    MissingListingId { position: usize },
    #[error("listing id '{0}' appears more than once")]
    DuplicateListingId(String),
}

/// Scores every candidate and orders them best first. Equal scores keep input order.
pub fn rank_listings(context: &SearchContext, listings: &[ListingSnapshot]) -> Vec<RankedListing> {
    let mut scored: Vec<(String, MatchScoreResult)> = listings
        .iter()
        .map(|listing| {
            let input = ScoreInput::assemble(context, listing);
            (listing.listing_id.clone(), compute_match_score(&input))
        })
        .collect();

    scored.sort_by(|(_, left), (_, right)| right.match_score.cmp(&left.match_score));

    debug!(candidates = scored.len(), "ranked search candidates");

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (listing_id, result))| RankedListing {
            rank: index + 1,
            listing_id,
            result,
        })
        .collect()
}
