use std::fs;
use std::path::Path;

use crate::error::{CookieError, Result};
use crate::models::Ingredient;

/// Load ingredients from a `.json` or `.csv` file, picked by extension.
///
/// File order is kept; it decides which split wins a tie.
pub fn load_ingredients<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("json") => load_ingredients_json(path),
        Some("csv") => load_ingredients_csv(path),
        _ => Err(CookieError::InvalidInput(format!(
            "unsupported ingredient file {:?} (expected .json or .csv)",
            path
        ))),
    }
}

/// Load ingredients from a JSON array of ingredient objects.
pub fn load_ingredients_json<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let content = fs::read_to_string(path)?;
    let ingredients: Vec<Ingredient> = serde_json::from_str(&content)?;
    Ok(ingredients)
}

/// Load ingredients from CSV with a
/// `name,capacity,durability,flavor,texture,calories` header row.
pub fn load_ingredients_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut ingredients = Vec::new();
    for record in reader.deserialize() {
        let ingredient: Ingredient = record?;
        ingredients.push(ingredient);
    }
    Ok(ingredients)
}
