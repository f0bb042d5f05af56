use super::common::*;
use crate::decision::domain::{ComponentScores, ScoreInput, Verdict};
use crate::decision::scoring::{aggregate, classify, component_scores, compute_match_score};
use rstest::rstest;

#[test]
fn scores_well_matched_berlin_listing_as_excellent() {
    let result = compute_match_score(&berlin_input());

    assert_eq!(
        result.components,
        ComponentScores {
            price_score: 70,
            location_score: 90,
            demand_score: 85,
            quality_score: 85,
        }
    );
    assert_eq!(result.match_score, 81);
    assert_eq!(result.verdict, Verdict::Excellent);
    assert_eq!(
        result.reasons,
        vec![
            "price is 10% below market".to_string(),
            "fits the stated budget".to_string(),
            "matches a preferred location".to_string(),
        ]
    );
}

#[test]
fn bare_listing_lands_in_neutral_tier() {
    let result = compute_match_score(&bare_input());

    assert_eq!(
        result.components,
        ComponentScores {
            price_score: 50,
            location_score: 50,
            demand_score: 50,
            quality_score: 35,
        }
    );
    assert_eq!(result.match_score, 49);
    assert_eq!(result.verdict, Verdict::Neutral);
    assert!(result.reasons.is_empty());
}

#[rstest]
#[case(100, Verdict::Excellent)]
#[case(80, Verdict::Excellent)]
#[case(79, Verdict::Good)]
#[case(60, Verdict::Good)]
#[case(59, Verdict::Neutral)]
#[case(40, Verdict::Neutral)]
#[case(39, Verdict::Poor)]
#[case(0, Verdict::Poor)]
fn verdict_ladder_boundaries_belong_to_higher_tier(#[case] score: u8, #[case] expected: Verdict) {
    assert_eq!(classify(score), expected);
}

#[test]
fn aggregate_rounds_half_up() {
    let components = ComponentScores {
        price_score: 50,
        location_score: 50,
        demand_score: 50,
        quality_score: 35,
    };
    assert_eq!(aggregate(&components), 49);

    let saturated = ComponentScores {
        price_score: 100,
        location_score: 100,
        demand_score: 100,
        quality_score: 100,
    };
    assert_eq!(aggregate(&saturated), 100);
}

#[test]
fn extreme_inputs_stay_in_range() {
    let mut input = bare_input();
    input.price = -1.0e12;
    input.market_price = Some(1.0);
    input.user_price_max = Some(f64::MAX);
    input.quality_score = Some(f64::INFINITY);
    input.photo_count = Some(i64::MAX);
    input.description_length = Some(i64::MIN);

    let components = component_scores(&input);
    assert_eq!(components.price_score, 100);
    assert_eq!(components.quality_score, 100);

    let result = compute_match_score(&input);
    assert!(result.match_score <= 100);
}

#[test]
fn scoring_is_deterministic() {
    let input = berlin_input();
    let first = serde_json::to_vec(&compute_match_score(&input)).expect("serializes");
    let second = serde_json::to_vec(&compute_match_score(&input)).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn serialized_result_uses_camel_case_fields() {
    let value = serde_json::to_value(compute_match_score(&berlin_input())).expect("serializes");
    assert_eq!(value["matchScore"], 81);
    assert_eq!(value["priceScore"], 70);
    assert_eq!(value["qualityScore"], 85);
    assert_eq!(value["verdict"], "excellent");
}

#[rstest]
#[case(serde_json::json!(2.9), Some(2))]
#[case(serde_json::json!(5.0), Some(5))]
#[case(serde_json::json!(-0.5), Some(-1))]
#[case(serde_json::json!("six"), None)]
#[case(serde_json::Value::Null, None)]
fn photo_counts_accept_any_json_number(
    #[case] raw: serde_json::Value,
    #[case] expected: Option<i64>,
) {
    let input: ScoreInput = serde_json::from_value(serde_json::json!({
        "price": 1000,
        "city": "Berlin",
        "photoCount": raw,
        "userPreferredCities": null,
    }))
    .unwrap();

    assert_eq!(input.photo_count, expected);
    assert!(input.user_preferred_cities.is_empty());
}
