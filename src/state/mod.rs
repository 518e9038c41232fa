mod persistence;
mod recipe;

pub use persistence::{load_ingredients, load_ingredients_csv, load_ingredients_json};
pub use recipe::Recipe;
