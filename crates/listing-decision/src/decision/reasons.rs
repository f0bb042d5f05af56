use super::domain::{DemandLevel, ScoreInput};
use super::scoring::market_discount_percent;

pub const MAX_REASONS: usize = 3;

const WELL_PHOTOGRAPHED_COUNT: i64 = 5;

type ReasonRule = fn(&ScoreInput) -> Option<String>;

/// Rules in display priority; earlier rules win when more than three apply.
const REASON_RULES: [ReasonRule; 5] = [
    below_market,
    fits_budget,
    preferred_location,
    high_demand,
    well_photographed,
];

fn below_market(input: &ScoreInput) -> Option<String> {
    let market = input.usable_market_price()?;
    if input.price >= market {
        return None;
    }
    let percent = market_discount_percent(input)?.round();
    Some(format!("price is {percent:.0}% below market"))
}

fn fits_budget(input: &ScoreInput) -> Option<String> {
    let budget = input.user_price_max?;
    (input.price <= budget).then(|| "fits the stated budget".to_string())
}

fn preferred_location(input: &ScoreInput) -> Option<String> {
    input
        .in_preferred_city()
        .then(|| "matches a preferred location".to_string())
}

fn high_demand(input: &ScoreInput) -> Option<String> {
    (input.demand_level == Some(DemandLevel::High)).then(|| "high demand area".to_string())
}

fn well_photographed(input: &ScoreInput) -> Option<String> {
    input
        .photo_count
        .is_some_and(|count| count >= WELL_PHOTOGRAPHED_COUNT)
        .then(|| "well-photographed listing".to_string())
}

/// Re-examines the raw input and returns at most [`MAX_REASONS`] justifications.
pub fn generate_reasons(input: &ScoreInput) -> Vec<String> {
    let mut reasons: Vec<String> = Vec::with_capacity(MAX_REASONS);
    for rule in REASON_RULES {
        if reasons.len() == MAX_REASONS {
            break;
        }
        if let Some(reason) = rule(input) {
            if !reasons.contains(&reason) {
                reasons.push(reason);
            }
        }
    }
    reasons
}
