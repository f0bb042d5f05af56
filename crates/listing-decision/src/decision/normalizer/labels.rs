use super::super::domain::DemandLevel;
use super::super::scoring::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD, NEUTRAL_THRESHOLD};
use std::collections::HashMap;
use std::sync::OnceLock;

pub(crate) const NO_SCORE_LABEL: &str = "no score available";

/// Display labels for a score of unknown provenance. Cut points match the aggregator's
/// ladder; the words are plain strings so producers may also send their own.
const DERIVED_VERDICT_LABELS: [(u8, &str); 3] = [
    (EXCELLENT_THRESHOLD, "excellent"),
    (GOOD_THRESHOLD, "good"),
    (NEUTRAL_THRESHOLD, "neutral"),
];

pub(crate) fn derived_verdict_label(score: u8) -> &'static str {
    DERIVED_VERDICT_LABELS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, label)| *label)
        .unwrap_or("poor")
}

static DEMAND_LABELS: OnceLock<HashMap<String, DemandLevel>> = OnceLock::new();

fn normalize_label(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Maps English or Russian demand labels to a level; anything unknown is medium.
pub(crate) fn demand_level_for(label: &str) -> DemandLevel {
    demand_labels()
        .get(&normalize_label(label))
        .copied()
        .unwrap_or(DemandLevel::Medium)
}

fn demand_labels() -> &'static HashMap<String, DemandLevel> {
    DEMAND_LABELS.get_or_init(|| {
        const LABEL_TO_LEVEL: &[(&str, DemandLevel)] = &[
            ("low", DemandLevel::Low),
            ("low demand", DemandLevel::Low),
            ("низкий", DemandLevel::Low),
            ("низкая", DemandLevel::Low),
            ("низкое", DemandLevel::Low),
            ("низкий спрос", DemandLevel::Low),
            ("high", DemandLevel::High),
            ("high demand", DemandLevel::High),
            ("высокий", DemandLevel::High),
            ("высокая", DemandLevel::High),
            ("высокое", DemandLevel::High),
            ("высокий спрос", DemandLevel::High),
        ];

        let mut map = HashMap::with_capacity(LABEL_TO_LEVEL.len());
        for (label, level) in LABEL_TO_LEVEL {
            map.insert(normalize_label(label), *level);
        }
        map
    })
}
