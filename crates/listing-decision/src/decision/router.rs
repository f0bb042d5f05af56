use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::domain::{MatchScoreResult, ScoreInput};
use super::insight::{InsightRequest, ListingInsight};
use super::normalizer::{normalize_decision, NormalizedDecision, RawDecision};
use super::ranking::{RankedListing, SearchRequest};
use super::scoring::compute_match_score;
use crate::config::SearchConfig;

/// Response body for the ranking endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub results: Vec<RankedListing>,
}

/// Router builder exposing scoring, ranking, insight, and normalization endpoints.
pub fn decision_router(config: SearchConfig) -> Router {
    Router::new()
        .route("/api/v1/listings/score", post(score_handler))
        .route("/api/v1/listings/insight", post(insight_handler))
        .route("/api/v1/listings/rank", post(rank_handler))
        .route("/api/v1/decisions/normalize", post(normalize_handler))
        .with_state(config)
}

pub(crate) async fn score_handler(Json(input): Json<ScoreInput>) -> Json<MatchScoreResult> {
    let result = compute_match_score(&input);
    debug!(match_score = result.match_score, verdict = ?result.verdict, "scored listing");
    Json(result)
}

pub(crate) async fn insight_handler(Json(request): Json<InsightRequest>) -> Json<ListingInsight> {
    let insight = ListingInsight::build(request.listing_id, &request.input);
    debug!(listing_id = %insight.listing_id, score = insight.decision.score, "built listing insight");
    Json(insight)
}

pub(crate) async fn rank_handler(
    State(config): State<SearchConfig>,
    Json(request): Json<SearchRequest>,
) -> Response {
    match request.rank(&config) {
        Ok(results) => {
            debug!(results = results.len(), "search ranking complete");
            (StatusCode::OK, Json(RankResponse { results })).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected ranking request");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn normalize_handler(Json(payload): Json<Value>) -> Json<NormalizedDecision> {
    let raw = RawDecision::from_value(payload);
    Json(normalize_decision(raw.as_ref()))
}
