use super::super::domain::{clamp_score, DemandLevel, ScoreInput};

const BASE_SCORE: f64 = 50.0;

const MARKET_DELTA_FACTOR: f64 = 0.5;
const OVER_BUDGET_PENALTY: f64 = 30.0;
const COMFORT_BUDGET_RATIO: f64 = 0.8;
const COMFORT_BUDGET_BONUS: f64 = 15.0;

const PREFERRED_CITY_BONUS: f64 = 40.0;
const SEARCH_HISTORY_BONUS: f64 = 20.0;

const RICH_PHOTO_COUNT: i64 = 5;
const SPARSE_PHOTO_COUNT: i64 = 3;
const RICH_PHOTO_BONUS: f64 = 10.0;
const SPARSE_PHOTO_PENALTY: f64 = 15.0;
const DETAILED_DESCRIPTION_LENGTH: i64 = 200;
const DETAILED_DESCRIPTION_BONUS: f64 = 5.0;

/// Signed distance from market in percent of the market price, positive when cheaper.
pub(crate) fn market_discount_percent(input: &ScoreInput) -> Option<f64> {
    input
        .usable_market_price()
        .map(|market| ((market - input.price) / market) * 100.0)
}

pub(crate) fn price_score(input: &ScoreInput) -> u8 {
    let mut score = BASE_SCORE;

    if let Some(discount) = market_discount_percent(input) {
        score += discount * MARKET_DELTA_FACTOR;
    }

    if let Some(budget) = input.user_price_max {
        if input.price > budget {
            score -= OVER_BUDGET_PENALTY;
        } else if input.price <= budget * COMFORT_BUDGET_RATIO {
            score += COMFORT_BUDGET_BONUS;
        }
    }

    clamp_score(score)
}

pub(crate) fn location_score(input: &ScoreInput) -> u8 {
    let mut score = BASE_SCORE;

    if input.in_preferred_city() {
        score += PREFERRED_CITY_BONUS;
    }
    if input.in_search_history() {
        score += SEARCH_HISTORY_BONUS;
    }

    clamp_score(score)
}

pub(crate) fn demand_score(input: &ScoreInput) -> u8 {
    match input.demand_level {
        Some(DemandLevel::High) => 85,
        Some(DemandLevel::Medium) => 60,
        Some(DemandLevel::Low) => 35,
        None => 50,
    }
}

pub(crate) fn quality_score(input: &ScoreInput) -> u8 {
    let mut score = input.quality_score.unwrap_or(BASE_SCORE);

    match input.photo_count {
        Some(count) if count >= RICH_PHOTO_COUNT => score += RICH_PHOTO_BONUS,
        Some(count) if count >= SPARSE_PHOTO_COUNT => {}
        _ => score -= SPARSE_PHOTO_PENALTY,
    }

    if input
        .description_length
        .is_some_and(|length| length >= DETAILED_DESCRIPTION_LENGTH)
    {
        score += DETAILED_DESCRIPTION_BONUS;
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ScoreInput {
        ScoreInput::new(1000.0, "Berlin")
    }

    #[test]
    fn price_rewards_discount_and_budget_comfort() {
        let mut input = input();
        input.price = 2700.0;
        input.market_price = Some(3000.0);
        input.user_price_max = Some(3500.0);
        assert_eq!(price_score(&input), 70);
    }

    #[test]
    fn price_penalizes_over_budget() {
        let mut input = input();
        input.price = 4000.0;
        input.user_price_max = Some(3500.0);
        assert_eq!(price_score(&input), 20);
    }

    #[test]
    fn price_without_comfort_margin_stays_at_base() {
        let mut input = input();
        input.price = 3000.0;
        input.user_price_max = Some(3500.0);
        assert_eq!(price_score(&input), 50);
    }

    #[test]
    fn price_clamps_extreme_markups() {
        let mut input = input();
        input.price = 100_000.0;
        input.market_price = Some(100.0);
        assert_eq!(price_score(&input), 0);

        input.price = -5_000.0;
        input.market_price = Some(1_000.0);
        assert_eq!(price_score(&input), 100);
    }

    #[test]
    fn price_ignores_unusable_market_price() {
        let mut input = input();
        input.market_price = Some(0.0);
        assert_eq!(price_score(&input), 50);

        input.market_price = Some(f64::NAN);
        assert_eq!(price_score(&input), 50);
    }

    #[test]
    fn location_bonuses_are_additive() {
        let mut input = input();
        assert_eq!(location_score(&input), 50);

        input.user_search_history = vec!["Berlin".to_string()];
        assert_eq!(location_score(&input), 70);

        input.user_preferred_cities = vec!["Munich".to_string(), "Berlin".to_string()];
        assert_eq!(location_score(&input), 100);
    }

    #[test]
    fn demand_uses_fixed_table() {
        let mut input = input();
        assert_eq!(demand_score(&input), 50);
        input.demand_level = Some(DemandLevel::Low);
        assert_eq!(demand_score(&input), 35);
        input.demand_level = Some(DemandLevel::Medium);
        assert_eq!(demand_score(&input), 60);
        input.demand_level = Some(DemandLevel::High);
        assert_eq!(demand_score(&input), 85);
    }

    #[test]
    fn quality_applies_photo_and_description_adjustments() {
        let mut input = input();
        assert_eq!(quality_score(&input), 35);

        input.photo_count = Some(4);
        assert_eq!(quality_score(&input), 50);

        input.photo_count = Some(2);
        assert_eq!(quality_score(&input), 35);

        input.quality_score = Some(70.0);
        input.photo_count = Some(6);
        input.description_length = Some(250);
        assert_eq!(quality_score(&input), 85);
    }

    #[test]
    fn quality_clamps_external_baseline() {
        let mut input = input();
        input.quality_score = Some(150.0);
        input.photo_count = Some(10);
        assert_eq!(quality_score(&input), 100);

        input.quality_score = Some(-40.0);
        input.photo_count = Some(-1);
        assert_eq!(quality_score(&input), 0);
    }
}
