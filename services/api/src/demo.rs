use crate::infra::{sample_context, sample_listings, search_context};
use clap::Args;
use listing_decision::config::AppConfig;
use listing_decision::decision::{
    normalize_decision, ListingInsight, RankedListing, RawDecision, ScoreInput, SearchRequest,
};
use listing_decision::error::AppError;
use listing_decision::import::ListingCsvImporter;
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// CSV export with listing_id, price, market_price, city, demand_level, ... columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Searcher's budget ceiling
    #[arg(long)]
    pub(crate) budget: Option<f64>,
    /// Preferred city (repeatable)
    #[arg(long = "preferred-city")]
    pub(crate) preferred_cities: Vec<String>,
    /// City from the searcher's history (repeatable)
    #[arg(long = "history-city")]
    pub(crate) history_cities: Vec<String>,
    /// Only print the top N results
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct NormalizeArgs {
    /// JSON file holding the raw decision; reads stdin when omitted
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        csv,
        budget,
        preferred_cities,
        history_cities,
        limit,
    } = args;

    let config = AppConfig::load()?;
    let listings = ListingCsvImporter::from_path(&csv)?;
    let request = SearchRequest {
        context: search_context(budget, preferred_cities, history_cities),
        listings,
    };

    let ranked = request.rank(&config.search)?;
    println!("Ranked {} listing(s) from {}", ranked.len(), csv.display());
    render_ranking(&ranked, limit);

    Ok(())
}

pub(crate) fn run_normalize(args: NormalizeArgs) -> Result<(), AppError> {
    let raw_json = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let value: serde_json::Value = if raw_json.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&raw_json)?
    };

    let raw = RawDecision::from_value(value);
    let decision = normalize_decision(raw.as_ref());
    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let request = SearchRequest {
        context: sample_context(),
        listings: sample_listings(),
    };

    println!("Listing decision demo");
    println!(
        "Searcher budget {:?}, preferred {:?}, history {:?}",
        request.context.user_price_max,
        request.context.user_preferred_cities,
        request.context.user_search_history
    );

    let ranked = request.rank(&config.search)?;
    println!("\nSearch ranking");
    render_ranking(&ranked, None);

    if let Some(top) = ranked.first() {
        let listing = request
            .listings
            .iter()
            .find(|listing| listing.listing_id == top.listing_id);
        if let Some(listing) = listing {
            let input = ScoreInput::assemble(&request.context, listing);
            let insight = ListingInsight::build(listing.listing_id.clone(), &input);
            println!("\nInsight for {}", insight.listing_id);
            println!("{}", serde_json::to_string_pretty(&insight.decision)?);
        }
    }

    let legacy = RawDecision::from_value(json!({
        "score": 45,
        "pros": ["quiet street", "near transit", "balcony", "new kitchen"],
        "priceDiff": -12,
        "demandLevel": "Высокий",
        "mainAdvice": "Book a viewing this week; similar flats rent quickly.",
    }));
    println!("\nNormalized legacy payload");
    println!(
        "{}",
        serde_json::to_string_pretty(&normalize_decision(legacy.as_ref()))?
    );

    println!("\nNormalized missing payload");
    println!("{}", serde_json::to_string_pretty(&normalize_decision(None))?);

    Ok(())
}

fn render_ranking(ranked: &[RankedListing], limit: Option<usize>) {
    let shown = limit.unwrap_or(ranked.len());
    for entry in ranked.iter().take(shown) {
        let result = &entry.result;
        println!(
            "{}. {} | score {} ({}) | price {} location {} demand {} quality {}",
            entry.rank,
            entry.listing_id,
            result.match_score,
            result.verdict.label(),
            result.components.price_score,
            result.components.location_score,
            result.components.demand_score,
            result.components.quality_score
        );
        for reason in &result.reasons {
            println!("   - {reason}");
        }
    }
}
