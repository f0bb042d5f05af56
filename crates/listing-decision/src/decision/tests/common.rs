use crate::decision::domain::{DemandLevel, ListingSnapshot, ScoreInput, SearchContext};

/// Berlin listing priced under market, inside a comfortable budget, well presented.
pub(super) fn berlin_input() -> ScoreInput {
    ScoreInput {
        price: 2700.0,
        market_price: Some(3000.0),
        user_price_max: Some(3500.0),
        city: "Berlin".to_string(),
        user_preferred_cities: vec!["Berlin".to_string()],
        user_search_history: Vec::new(),
        demand_level: Some(DemandLevel::High),
        quality_score: Some(70.0),
        photo_count: Some(6),
        description_length: Some(250),
    }
}

pub(super) fn bare_input() -> ScoreInput {
    ScoreInput::new(10_000.0, "X")
}

pub(super) fn search_context() -> SearchContext {
    SearchContext {
        user_price_max: Some(3500.0),
        user_preferred_cities: vec!["Berlin".to_string()],
        user_search_history: vec!["Hamburg".to_string()],
    }
}

pub(super) fn listing(id: &str, price: f64, city: &str) -> ListingSnapshot {
    ListingSnapshot {
        listing_id: id.to_string(),
        price,
        market_price: Some(3000.0),
        city: city.to_string(),
        demand_level: Some(DemandLevel::Medium),
        quality_score: Some(60.0),
        photo_count: Some(4),
        description_length: Some(120),
    }
}
