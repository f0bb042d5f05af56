use super::common::*;
use crate::decision::domain::DemandLevel;
use crate::decision::reasons::{generate_reasons, MAX_REASONS};

#[test]
fn caps_reasons_at_three_in_priority_order() {
    let reasons = generate_reasons(&berlin_input());
    assert_eq!(reasons.len(), MAX_REASONS);
    assert_eq!(reasons[0], "price is 10% below market");
    assert!(!reasons.iter().any(|reason| reason == "high demand area"));
}

#[test]
fn later_rules_fill_in_when_earlier_ones_do_not_apply() {
    let mut input = berlin_input();
    input.market_price = None;
    input.user_price_max = None;

    assert_eq!(
        generate_reasons(&input),
        vec![
            "matches a preferred location".to_string(),
            "high demand area".to_string(),
            "well-photographed listing".to_string(),
        ]
    );
}

#[test]
fn no_market_reason_when_priced_at_or_above_market() {
    let mut input = berlin_input();
    input.price = 3000.0;
    let reasons = generate_reasons(&input);
    assert_eq!(reasons[0], "fits the stated budget");
    assert!(reasons.iter().all(|reason| !reason.contains("below market")));
}

#[test]
fn budget_fit_includes_exact_budget() {
    let mut input = bare_input();
    input.price = 3500.0;
    input.user_price_max = Some(3500.0);
    input.demand_level = Some(DemandLevel::Low);
    assert_eq!(generate_reasons(&input), vec!["fits the stated budget".to_string()]);
}

#[test]
fn discount_percent_is_rounded() {
    let mut input = bare_input();
    input.price = 2000.0;
    input.market_price = Some(3000.0);
    assert_eq!(
        generate_reasons(&input),
        vec!["price is 33% below market".to_string()]
    );
}
