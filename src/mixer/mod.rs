pub mod compositions;
pub mod constants;
pub mod scoring;
pub mod search;

pub use compositions::{composition_count, Compositions};
pub use constants::*;
pub use scoring::{cookie_score, property_totals, score_mixture};
pub use search::{find_best_mixture, optimal_score};
