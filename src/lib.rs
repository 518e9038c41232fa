pub mod cli;
pub mod error;
pub mod interface;
pub mod mixer;
pub mod models;
pub mod state;

pub use error::{CookieError, Result};
pub use models::{Ingredient, PropertyTotals, ScoredMixture};
pub use state::Recipe;
