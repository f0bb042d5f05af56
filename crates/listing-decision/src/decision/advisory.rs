//! Host-facing advisory signals: price position, risk notes, and the pricing tip.

use super::domain::{DemandLevel, ScoreInput};

const SPARSE_PHOTO_COUNT: i64 = 3;
const RECOMMENDED_PHOTO_COUNT: i64 = 5;
const RECOMMENDED_DESCRIPTION_LENGTH: i64 = 200;
const OVERPRICED_PERCENT: f64 = 10.0;
const UNDERPRICED_PERCENT: f64 = -15.0;

/// Signed percent difference from market, one decimal. Negative means cheaper than market.
pub fn price_diff_percent(input: &ScoreInput) -> f64 {
    let Some(market) = input.usable_market_price() else {
        return 0.0;
    };
    let diff = ((input.price - market) / market) * 100.0;
    if !diff.is_finite() {
        return 0.0;
    }
    (diff * 10.0).round() / 10.0
}

/// Risk notes in fixed priority order. Consumers cap how many they render.
pub fn risks(input: &ScoreInput) -> Vec<String> {
    let mut risks = Vec::new();

    if input.user_price_max.is_some_and(|budget| input.price > budget) {
        risks.push("over the stated budget".to_string());
    }

    let diff = price_diff_percent(input);
    if diff > 0.0 {
        risks.push(format!("price is {:.0}% above market", diff.round()));
    }

    if input
        .photo_count
        .map_or(true, |count| count < SPARSE_PHOTO_COUNT)
    {
        risks.push("few photos".to_string());
    }

    if input.demand_level == Some(DemandLevel::Low) {
        risks.push("low demand area".to_string());
    }

    risks
}

/// Single pricing or presentation tip for the host advisory panel.
pub fn recommendation(input: &ScoreInput) -> String {
    let diff = price_diff_percent(input);

    if diff > OVERPRICED_PERCENT {
        return format!(
            "Consider lowering the price by about {:.0}% to match the market",
            diff.round()
        );
    }
    if diff < UNDERPRICED_PERCENT {
        return "Priced well below market; there is room to raise the price".to_string();
    }
    if input
        .photo_count
        .map_or(true, |count| count < RECOMMENDED_PHOTO_COUNT)
    {
        return "Add at least 5 photos to make the listing stand out".to_string();
    }
    if input
        .description_length
        .map_or(true, |length| length < RECOMMENDED_DESCRIPTION_LENGTH)
    {
        return "Expand the description to at least 200 characters".to_string();
    }

    "Listing is well positioned".to_string()
}
