use crate::error::Result;
use crate::mixer::{self, TEASPOON_BUDGET};
use crate::models::{Ingredient, ScoredMixture};

/// An ordered list of cookie ingredients and the teaspoon budget to split
/// between them.
#[derive(Debug, Clone)]
pub struct Recipe {
    ingredients: Vec<Ingredient>,
    budget: u32,
}

impl Default for Recipe {
    fn default() -> Self {
        Self::with_budget(TEASPOON_BUDGET)
    }
}

impl Recipe {
    /// Empty recipe with the standard 100-teaspoon budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty recipe with a custom teaspoon budget.
    pub fn with_budget(budget: u32) -> Self {
        Self {
            ingredients: Vec::new(),
            budget,
        }
    }

    /// Append an ingredient. Duplicates are kept; each entry gets its own slot.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Highest score over every split of the budget, optionally restricted to
    /// splits whose calories equal `calorie_target` exactly. 0 if nothing qualifies.
    pub fn optimal_score(&self, calorie_target: Option<i64>) -> Result<u64> {
        mixer::optimal_score(&self.ingredients, self.budget, calorie_target)
    }

    /// The split behind [`Recipe::optimal_score`].
    pub fn best_mixture(&self, calorie_target: Option<i64>) -> Result<Option<ScoredMixture>> {
        mixer::find_best_mixture(&self.ingredients, self.budget, calorie_target)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Count of ingredients in the recipe.
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Check if the recipe has no ingredients.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl FromIterator<Ingredient> for Recipe {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        let mut recipe = Recipe::new();
        recipe.extend(iter);
        recipe
    }
}

impl Extend<Ingredient> for Recipe {
    fn extend<I: IntoIterator<Item = Ingredient>>(&mut self, iter: I) {
        for ingredient in iter {
            self.add_ingredient(ingredient);
        }
    }
}
