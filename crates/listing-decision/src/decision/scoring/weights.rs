/// Fixed contribution of each component to the match score, in percent.
///
/// Integer percentages keep the aggregate exact, so a weighted sum landing on `.5`
/// always rounds up instead of depending on binary float error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub price: u32,
    pub location: u32,
    pub demand: u32,
    pub quality: u32,
}

pub const MATCH_WEIGHTS: ScoreWeights = ScoreWeights {
    price: 40,
    location: 30,
    demand: 20,
    quality: 10,
};

impl ScoreWeights {
    pub const fn total(&self) -> u32 {
        self.price + self.location + self.demand + self.quality
    }

    pub fn as_fractions(&self) -> [f64; 4] {
        let total = f64::from(self.total());
        [
            f64::from(self.price) / total,
            f64::from(self.location) / total,
            f64::from(self.demand) / total,
            f64::from(self.quality) / total,
        ]
    }
}
