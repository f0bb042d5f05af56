use super::super::domain::Verdict;

pub const EXCELLENT_THRESHOLD: u8 = 80;
pub const GOOD_THRESHOLD: u8 = 60;
pub const NEUTRAL_THRESHOLD: u8 = 40;

/// Descending ladder; the first threshold the score reaches wins.
const VERDICT_LADDER: [(u8, Verdict); 3] = [
    (EXCELLENT_THRESHOLD, Verdict::Excellent),
    (GOOD_THRESHOLD, Verdict::Good),
    (NEUTRAL_THRESHOLD, Verdict::Neutral),
];

pub fn classify(score: u8) -> Verdict {
    VERDICT_LADDER
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, verdict)| *verdict)
        .unwrap_or(Verdict::Poor)
}
