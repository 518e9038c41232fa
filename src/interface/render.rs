use crate::models::{Ingredient, ScoredMixture};

/// Format the winning mixture as a table.
pub fn format_mixture(mixture: &ScoredMixture) -> String {
    let width = mixture
        .amounts
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(10)
        .max("Ingredient".len());

    let mut out = String::new();
    out.push_str("=== Best Mixture ===\n\n");
    out.push_str(&format!("{:<width$}  {:>5}\n", "Ingredient", "tsp", width = width));

    for (name, amount) in &mixture.amounts {
        out.push_str(&format!("{:<width$}  {:>5}\n", name, amount, width = width));
    }

    let totals = &mixture.totals;
    out.push_str("\n--- Totals ---\n");
    out.push_str(&format!("Capacity:   {}\n", totals.capacity));
    out.push_str(&format!("Durability: {}\n", totals.durability));
    out.push_str(&format!("Flavor:     {}\n", totals.flavor));
    out.push_str(&format!("Texture:    {}\n", totals.texture));
    out.push_str(&format!("Calories:   {}\n", totals.calories));
    out.push_str(&format!("Score:      {}\n", mixture.score));
    out
}

/// Display the winning mixture, or a note when nothing qualified.
pub fn display_mixture(mixture: Option<&ScoredMixture>) {
    match mixture {
        Some(mixture) => {
            println!();
            print!("{}", format_mixture(mixture));
            println!();
        }
        None => println!("No mixture qualifies (no ingredients or unreachable calorie target)."),
    }
}

/// Display a simple list of ingredients with their details.
pub fn display_ingredient_list(ingredients: &[Ingredient], title: &str) {
    if ingredients.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, ingredients.len());
    println!();

    for ingredient in ingredients {
        println!("  {}", ingredient.debug_string());
    }

    println!();
}
