use dialoguer::{Confirm, Input};

use crate::error::{CookieError, Result};
use crate::mixer::DEFAULT_CALORIE_TARGET;
use crate::models::Ingredient;

/// Prompt for a signed whole number.
fn prompt_i64(prompt: &str, default: i64) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_i64(&input)
}

fn parse_i64(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| CookieError::InvalidInput(format!("'{}' is not a whole number", input.trim())))
}

/// Prompt for one ingredient. Returns `None` when the name is left empty.
pub fn prompt_ingredient() -> Result<Option<Ingredient>> {
    let name: String = Input::new()
        .with_prompt("Ingredient name (or press Enter to finish)")
        .allow_empty(true)
        .interact_text()?;

    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let capacity = prompt_i64("  capacity", 0)?;
    let durability = prompt_i64("  durability", 0)?;
    let flavor = prompt_i64("  flavor", 0)?;
    let texture = prompt_i64("  texture", 0)?;
    let calories = prompt_i64("  calories", 0)?;

    Ok(Some(Ingredient::new(
        name, capacity, durability, flavor, texture, calories,
    )))
}

/// Prompt for ingredients until an empty name is entered.
pub fn prompt_ingredients() -> Result<Vec<Ingredient>> {
    let mut ingredients = Vec::new();

    while let Some(ingredient) = prompt_ingredient()? {
        println!("Added: {}", ingredient.debug_string());
        ingredients.push(ingredient);
    }

    Ok(ingredients)
}

/// Ask whether to restrict the search to an exact calorie count, and which.
pub fn prompt_calorie_target() -> Result<Option<i64>> {
    let restrict = prompt_yes_no("Require an exact calorie count?", false)?;
    if !restrict {
        return Ok(None);
    }

    prompt_i64("Calorie target", DEFAULT_CALORIE_TARGET).map(Some)
}

/// Generic yes/no prompt.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(" -3 ").unwrap(), -3);
        assert_eq!(parse_i64("500").unwrap(), 500);
        assert!(matches!(
            parse_i64("lots"),
            Err(CookieError::InvalidInput(_))
        ));
    }
}
