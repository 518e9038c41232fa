pub mod prompts;
pub mod render;

pub use prompts::{prompt_calorie_target, prompt_ingredient, prompt_ingredients, prompt_yes_no};
pub use render::{display_ingredient_list, display_mixture, format_mixture};
