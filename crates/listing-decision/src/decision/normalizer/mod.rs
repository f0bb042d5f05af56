//! Compatibility adapter turning any decision-like payload into [`NormalizedDecision`].
//!
//! This is the single contract rendered by listing cards, the insight panel, and the host
//! and admin dashboards. It does not score anything: the score it carries is whatever the
//! producer sent, clamped. Its verdict words match the aggregator's [`Verdict`] labels and
//! cut points, but a producer-supplied verdict string is passed through untouched, so
//! consumers must not parse it back into the enum. Untouched includes surrounding
//! whitespace: unlike `recommendation`, a non-blank verdict is never trimmed.
//!
//! [`Verdict`]: super::domain::Verdict

mod labels;
mod raw;

pub use raw::RawDecision;

use super::domain::{clamp_score, DemandLevel};
use labels::{demand_level_for, derived_verdict_label, NO_SCORE_LABEL};
use serde::{Deserialize, Serialize};

pub const MAX_NORMALIZED_REASONS: usize = 3;
pub const MAX_NORMALIZED_RISKS: usize = 2;
pub const MAX_RECOMMENDATION_CHARS: usize = 120;

const SCORE_KEYS: &[&str] = &["matchScore", "score"];
const REASON_KEYS: &[&str] = &["reasons", "pros"];
const RISK_KEYS: &[&str] = &["risks"];
const PRICE_DIFF_KEYS: &[&str] = &["priceDiffPercent", "priceDiff"];
const RECOMMENDATION_KEYS: &[&str] = &["recommendation", "mainAdvice", "tip"];
const VERDICT_KEYS: &[&str] = &["verdict"];
const DEMAND_KEYS: &[&str] = &["demandLevel"];

/// Canonical decision shape consumed by every rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDecision {
    pub score: u8,
    pub verdict: String,
    pub reasons: Vec<String>,
    pub risks: Vec<String>,
    pub price_diff: f64,
    pub demand_level: DemandLevel,
    pub recommendation: String,
}

impl NormalizedDecision {
    /// Zero-state rendered when no payload exists at all.
    pub fn empty() -> Self {
        Self {
            score: 0,
            verdict: NO_SCORE_LABEL.to_string(),
            reasons: Vec::new(),
            risks: Vec::new(),
            price_diff: 0.0,
            demand_level: DemandLevel::Medium,
            recommendation: String::new(),
        }
    }
}

impl Default for NormalizedDecision {
    fn default() -> Self {
        Self::empty()
    }
}

/// Normalizes a raw payload. Total: missing or malformed fields fall back to defaults.
pub fn normalize_decision(raw: Option<&RawDecision>) -> NormalizedDecision {
    let Some(raw) = raw else {
        return NormalizedDecision::empty();
    };

    let score = clamp_score(raw.number(SCORE_KEYS).unwrap_or(0.0));

    let mut reasons = raw.strings(REASON_KEYS).unwrap_or_default();
    reasons.truncate(MAX_NORMALIZED_REASONS);

    let mut risks = raw.strings(RISK_KEYS).unwrap_or_default();
    risks.truncate(MAX_NORMALIZED_RISKS);

    let price_diff = raw.number(PRICE_DIFF_KEYS).unwrap_or(0.0);

    let recommendation = raw
        .text(RECOMMENDATION_KEYS)
        .map(|text| truncate_recommendation(text.trim()))
        .unwrap_or_default();

    let verdict = raw
        .text(VERDICT_KEYS)
        .map(str::to_string)
        .unwrap_or_else(|| derived_verdict_label(score).to_string());

    let demand_level = raw
        .text(DEMAND_KEYS)
        .map(demand_level_for)
        .unwrap_or(DemandLevel::Medium);

    NormalizedDecision {
        score,
        verdict,
        reasons,
        risks,
        price_diff,
        demand_level,
        recommendation,
    }
}

/// Hard cut at [`MAX_RECOMMENDATION_CHARS`] characters, then trailing whitespace is dropped.
fn truncate_recommendation(text: &str) -> String {
    let cut: String = text.chars().take(MAX_RECOMMENDATION_CHARS).collect();
    cut.trim_end().to_string()
}
