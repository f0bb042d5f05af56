use serde::{Deserialize, Deserializer, Serialize};

/// Rounds and clamps a raw score into `0..=100`. NaN collapses to 0.
pub(crate) fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Coarse categorical signal describing how sought-after a market segment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses the English wire tokens only; localized labels are a normalizer concern.
    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Unrecognized demand tokens are read as "no signal" instead of failing the payload.
pub(crate) fn lenient_demand_level<'de, D>(deserializer: D) -> Result<Option<DemandLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(DemandLevel::from_token))
}

/// Counts may arrive as any JSON number. Fractions floor, which leaves every
/// `>=`/`<` check against an integer threshold unchanged. Anything else reads as absent.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|value| match value.as_i64() {
        Some(count) => Some(count),
        None => value
            .as_f64()
            .filter(|count| count.is_finite())
            .map(|count| count.floor() as i64),
    }))
}

/// A `null` or non-array city list reads as empty; non-string entries are dropped.
pub(crate) fn lenient_cities<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(city) => Some(city),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Searcher-side context shared by every candidate in one search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContext {
    #[serde(default)]
    pub user_price_max: Option<f64>,
    #[serde(default, deserialize_with = "lenient_cities")]
    pub user_preferred_cities: Vec<String>,
    #[serde(default, deserialize_with = "lenient_cities")]
    pub user_search_history: Vec<String>,
}

/// Listing-side data supplied by retrieval, the quality source, and the market estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    pub listing_id: String,
    pub price: f64,
    #[serde(default)]
    pub market_price: Option<f64>,
    pub city: String,
    #[serde(default, deserialize_with = "lenient_demand_level")]
    pub demand_level: Option<DemandLevel>,
    #[serde(default)]
    pub quality_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub photo_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub description_length: Option<i64>,
}

/// Per-listing, per-query input to the scorers. Built fresh for every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInput {
    pub price: f64,
    #[serde(default)]
    pub market_price: Option<f64>,
    #[serde(default)]
    pub user_price_max: Option<f64>,
    pub city: String,
    #[serde(default, deserialize_with = "lenient_cities")]
    pub user_preferred_cities: Vec<String>,
    #[serde(default, deserialize_with = "lenient_cities")]
    pub user_search_history: Vec<String>,
    #[serde(default, deserialize_with = "lenient_demand_level")]
    pub demand_level: Option<DemandLevel>,
    #[serde(default)]
    pub quality_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub photo_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub description_length: Option<i64>,
}

impl ScoreInput {
    pub fn new(price: f64, city: impl Into<String>) -> Self {
        Self {
            price,
            city: city.into(),
            ..Self::default()
        }
    }

    pub fn assemble(context: &SearchContext, listing: &ListingSnapshot) -> Self {
        Self {
            price: listing.price,
            market_price: listing.market_price,
            user_price_max: context.user_price_max,
            city: listing.city.clone(),
            user_preferred_cities: context.user_preferred_cities.clone(),
            user_search_history: context.user_search_history.clone(),
            demand_level: listing.demand_level,
            quality_score: listing.quality_score,
            photo_count: listing.photo_count,
            description_length: listing.description_length,
        }
    }

    /// Market price usable as a comparable; zero, negative, or non-finite values are ignored.
    pub fn usable_market_price(&self) -> Option<f64> {
        self.market_price
            .filter(|market| market.is_finite() && *market > 0.0)
    }

    pub(crate) fn in_preferred_city(&self) -> bool {
        self.user_preferred_cities
            .iter()
            .any(|city| *city == self.city)
    }

    pub(crate) fn in_search_history(&self) -> bool {
        self.user_search_history.iter().any(|city| *city == self.city)
    }
}

/// Sub-scores produced by the four independent scorers, each within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub price_score: u8,
    pub location_score: u8,
    pub demand_score: u8,
    pub quality_score: u8,
}

/// Coarse tier assigned to an aggregated match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    Neutral,
    Poor,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Poor => "poor",
        }
    }
}

/// Aggregator output: the ranking score, its components, verdict, and justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreResult {
    pub match_score: u8,
    #[serde(flatten)]
    pub components: ComponentScores,
    pub verdict: Verdict,
    pub reasons: Vec<String>,
}
