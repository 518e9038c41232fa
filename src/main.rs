use clap::Parser;
use tracing_subscriber::EnvFilter;

use cookie_mixer_rs::cli::{Cli, Command};
use cookie_mixer_rs::error::Result;
use cookie_mixer_rs::interface::{
    display_ingredient_list, display_mixture, prompt_calorie_target, prompt_ingredients,
};
use cookie_mixer_rs::mixer::DEMO_PANTRY;
use cookie_mixer_rs::state::{load_ingredients, Recipe};
use cookie_mixer_rs::Ingredient;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only carries results. `RUST_LOG` overrides the default level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Score => cmd_score(cli.file.as_deref(), cli.budget, cli.calories),
        Command::Best { json } => cmd_best(cli.file.as_deref(), cli.budget, cli.calories, json),
        Command::Interactive => cmd_interactive(cli.budget, cli.calories),
    }
}

/// Build a recipe from the ingredient file, or the demo pantry without one.
fn build_recipe(file: Option<&std::path::Path>, budget: u32) -> Result<Recipe> {
    let ingredients: Vec<Ingredient> = match file {
        Some(path) => load_ingredients(path)?,
        None => DEMO_PANTRY.clone(),
    };

    let mut recipe = Recipe::with_budget(budget);
    recipe.extend(ingredients);
    Ok(recipe)
}

/// Print the best achievable score.
fn cmd_score(file: Option<&std::path::Path>, budget: u32, calories: Option<i64>) -> Result<()> {
    let recipe = build_recipe(file, budget)?;
    println!("{}", recipe.optimal_score(calories)?);
    Ok(())
}

/// Show the winning mixture.
fn cmd_best(
    file: Option<&std::path::Path>,
    budget: u32,
    calories: Option<i64>,
    json: bool,
) -> Result<()> {
    let recipe = build_recipe(file, budget)?;
    let best = recipe.best_mixture(calories)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&best)?);
    } else {
        display_ingredient_list(recipe.ingredients(), "Ingredients");
        display_mixture(best.as_ref());
    }

    Ok(())
}

/// Collect ingredients at the prompt, then show the winning mixture.
fn cmd_interactive(budget: u32, calories: Option<i64>) -> Result<()> {
    let ingredients = prompt_ingredients()?;
    if ingredients.is_empty() {
        println!("No ingredients entered.");
        return Ok(());
    }

    let calories = match calories {
        Some(target) => Some(target),
        None => prompt_calorie_target()?,
    };

    let mut recipe = Recipe::with_budget(budget);
    recipe.extend(ingredients);

    println!();
    println!(
        "Splitting {} teaspoons between {} ingredients...",
        recipe.budget(),
        recipe.len()
    );

    display_mixture(recipe.best_mixture(calories)?.as_ref());
    Ok(())
}
