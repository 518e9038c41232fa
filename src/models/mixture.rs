use serde::Serialize;

/// Weighted property sums of one mixture, before clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PropertyTotals {
    pub capacity: i64,
    pub durability: i64,
    pub flavor: i64,
    pub texture: i64,
    pub calories: i64,
}

impl PropertyTotals {
    /// The four scored totals, in score order.
    pub fn scored(&self) -> [i64; 4] {
        [self.capacity, self.durability, self.flavor, self.texture]
    }
}

/// The winning teaspoon split of a search, with its totals and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMixture {
    /// `(ingredient name, teaspoons)` in recipe order.
    pub amounts: Vec<(String, u32)>,

    pub totals: PropertyTotals,

    pub score: u64,
}

impl ScoredMixture {
    pub fn new(amounts: Vec<(String, u32)>, totals: PropertyTotals, score: u64) -> Self {
        Self {
            amounts,
            totals,
            score,
        }
    }

    /// Total teaspoons used; always the recipe budget.
    pub fn teaspoons(&self) -> u32 {
        self.amounts.iter().map(|(_, amount)| amount).sum()
    }
}
