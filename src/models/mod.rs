mod ingredient;
mod mixture;

pub use ingredient::Ingredient;
pub use mixture::{PropertyTotals, ScoredMixture};
