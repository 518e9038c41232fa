use std::sync::LazyLock;

use crate::models::Ingredient;

/// Teaspoons shared out between the ingredients of every recipe.
pub const TEASPOON_BUDGET: u32 = 100;

/// Calorie target used by the interactive prompt when the user just presses Enter.
pub const DEFAULT_CALORIE_TARGET: i64 = 500;

/// Pantry used by the CLI when no ingredient file is given.
pub static DEMO_PANTRY: LazyLock<Vec<Ingredient>> = LazyLock::new(|| {
    vec![
        Ingredient::new("Sprinkles", 2, 0, -2, 0, 3),
        Ingredient::new("Butterscotch", 0, 5, -3, 0, 3),
        Ingredient::new("Chocolate", 0, 0, 5, -1, 8),
        Ingredient::new("Candy", 0, -1, 0, 5, 8),
    ]
});
