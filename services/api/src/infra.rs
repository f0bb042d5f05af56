use listing_decision::decision::{ListingSnapshot, SearchContext};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the searcher context from repeated CLI flags.
pub(crate) fn search_context(
    budget: Option<f64>,
    preferred_cities: Vec<String>,
    history_cities: Vec<String>,
) -> SearchContext {
    SearchContext {
        user_price_max: budget,
        user_preferred_cities: preferred_cities,
        user_search_history: history_cities,
    }
}

pub(crate) fn sample_listings() -> Vec<ListingSnapshot> {
    use listing_decision::decision::DemandLevel;

    vec![
        ListingSnapshot {
            listing_id: "berlin-mitte-2br".to_string(),
            price: 2700.0,
            market_price: Some(3000.0),
            city: "Berlin".to_string(),
            demand_level: Some(DemandLevel::High),
            quality_score: Some(70.0),
            photo_count: Some(6),
            description_length: Some(250),
        },
        ListingSnapshot {
            listing_id: "hamburg-altona-studio".to_string(),
            price: 2500.0,
            market_price: Some(2600.0),
            city: "Hamburg".to_string(),
            demand_level: Some(DemandLevel::Medium),
            quality_score: Some(65.0),
            photo_count: Some(5),
            description_length: Some(180),
        },
        ListingSnapshot {
            listing_id: "munich-schwabing-loft".to_string(),
            price: 4100.0,
            market_price: Some(3600.0),
            city: "Munich".to_string(),
            demand_level: Some(DemandLevel::High),
            quality_score: Some(80.0),
            photo_count: Some(9),
            description_length: Some(600),
        },
        ListingSnapshot {
            listing_id: "leipzig-room".to_string(),
            price: 900.0,
            market_price: Some(950.0),
            city: "Leipzig".to_string(),
            demand_level: Some(DemandLevel::Low),
            quality_score: None,
            photo_count: Some(2),
            description_length: None,
        },
    ]
}

pub(crate) fn sample_context() -> SearchContext {
    search_context(
        Some(3500.0),
        vec!["Berlin".to_string()],
        vec!["Hamburg".to_string()],
    )
}
