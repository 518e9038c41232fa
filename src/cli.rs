use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::mixer::TEASPOON_BUDGET;

/// Cookie Mixer — finds the highest-scoring split of teaspoons between cookie ingredients.
#[derive(Parser, Debug)]
#[command(name = "cookie_mixer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ingredient file (.json or .csv). Uses the built-in demo pantry when omitted.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Teaspoons to split between the ingredients.
    #[arg(short, long, global = true, default_value_t = TEASPOON_BUDGET)]
    pub budget: u32,

    /// Only consider mixtures with exactly this many calories.
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub calories: Option<i64>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Print the best achievable cookie score.
    #[default]
    Score,

    /// Show the winning mixture with its property totals.
    Best {
        /// Print the mixture as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Enter ingredients at the prompt, then show the winning mixture.
    ///
    /// Asks for a calorie target unless `--calories` is given.
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["cookie_mixer"]);
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
        assert!(cli.calories.is_none());
        assert_eq!(cli.budget, TEASPOON_BUDGET);
    }

    #[test]
    fn test_calories_without_subcommand() {
        let cli = Cli::parse_from(["cookie_mixer", "--calories", "500"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.calories, Some(500));
        assert!(matches!(cli.command.unwrap_or_default(), Command::Score));
    }

    #[test]
    fn test_best_with_calories_and_file() {
        let cli = Cli::parse_from([
            "cookie_mixer",
            "best",
            "--calories",
            "500",
            "--json",
            "--file",
            "pantry.csv",
        ]);
        assert_eq!(cli.file, Some(PathBuf::from("pantry.csv")));
        assert_eq!(cli.calories, Some(500));
        match cli.command {
            Some(Command::Best { json }) => assert!(json),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_calorie_target() {
        let cli = Cli::parse_from(["cookie_mixer", "score", "-c", "-20"]);
        assert_eq!(cli.calories, Some(-20));
    }
}
