use tracing::{debug, info};

use crate::error::Result;
use crate::mixer::compositions::{composition_count, Compositions};
use crate::mixer::scoring::{cookie_score, property_totals};
use crate::models::{Ingredient, PropertyTotals, ScoredMixture};

/// Best candidate seen so far during a search.
struct Best {
    amounts: Vec<u32>,
    totals: PropertyTotals,
    score: u64,
}

/// Check a mixture's calories against the optional target.
#[inline]
fn meets_calorie_target(totals: &PropertyTotals, calorie_target: Option<i64>) -> bool {
    calorie_target.is_none_or(|target| totals.calories == target)
}

/// Search every split of `budget` teaspoons over `ingredients` for the
/// highest-scoring mixture.
///
/// With a `calorie_target`, only mixtures whose calories hit it exactly are
/// considered. Returns `None` when there are no ingredients or no mixture
/// qualifies. Among equal scores the first split in enumeration order wins.
pub fn find_best_mixture(
    ingredients: &[Ingredient],
    budget: u32,
    calorie_target: Option<i64>,
) -> Result<Option<ScoredMixture>> {
    if ingredients.is_empty() {
        return Ok(None);
    }

    info!(
        event = "search_start",
        ingredients = ingredients.len(),
        budget,
        calorie_target = ?calorie_target,
        candidates = ?composition_count(budget, ingredients.len()),
    );

    let mut best: Option<Best> = None;
    let mut examined: u64 = 0;

    for amounts in Compositions::new(budget, ingredients.len())? {
        examined += 1;

        let totals = property_totals(ingredients, &amounts)?;
        if !meets_calorie_target(&totals, calorie_target) {
            continue;
        }

        let score = cookie_score(&totals);
        if best.as_ref().is_some_and(|b| score <= b.score) {
            continue;
        }

        debug!(event = "new_best", score, amounts = ?amounts);
        best = Some(Best {
            amounts,
            totals,
            score,
        });
    }

    info!(
        event = "search_end",
        examined,
        score = best.as_ref().map(|b| b.score).unwrap_or(0),
    );

    Ok(best.map(|b| {
        let amounts = ingredients
            .iter()
            .zip(b.amounts)
            .map(|(ingredient, amount)| (ingredient.name.clone(), amount))
            .collect();
        ScoredMixture::new(amounts, b.totals, b.score)
    }))
}

/// Highest cookie score over every split of `budget` teaspoons, or 0 if
/// nothing qualifies.
pub fn optimal_score(
    ingredients: &[Ingredient],
    budget: u32,
    calorie_target: Option<i64>,
) -> Result<u64> {
    Ok(find_best_mixture(ingredients, budget, calorie_target)?
        .map(|mixture| mixture.score)
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixer::constants::TEASPOON_BUDGET;

    fn two_ingredients() -> Vec<Ingredient> {
        vec![
            Ingredient::new("Butterscotch", -1, -2, 6, 3, 8),
            Ingredient::new("Cinnamon", 2, 3, -2, -1, 3),
        ]
    }

    #[test]
    fn test_empty_pantry_scores_zero() {
        assert_eq!(optimal_score(&[], TEASPOON_BUDGET, None).unwrap(), 0);
        assert!(find_best_mixture(&[], TEASPOON_BUDGET, None).unwrap().is_none());
    }

    #[test]
    fn test_best_mixture_without_target() {
        let best = find_best_mixture(&two_ingredients(), TEASPOON_BUDGET, None)
            .unwrap()
            .unwrap();
        assert_eq!(best.score, 62_842_880);
        assert_eq!(
            best.amounts,
            vec![("Butterscotch".to_string(), 44), ("Cinnamon".to_string(), 56)]
        );
        assert_eq!(best.teaspoons(), TEASPOON_BUDGET);
    }

    #[test]
    fn test_best_mixture_with_calorie_target() {
        let best = find_best_mixture(&two_ingredients(), TEASPOON_BUDGET, Some(500))
            .unwrap()
            .unwrap();
        assert_eq!(best.score, 57_600_000);
        assert_eq!(best.totals.calories, 500);
    }

    #[test]
    fn test_smaller_budget() {
        assert_eq!(optimal_score(&two_ingredients(), 10, None).unwrap(), 5_760);
    }

    #[test]
    fn test_zero_calorie_target_is_a_real_target() {
        // Every non-empty split has calories, so nothing can hit zero.
        assert_eq!(optimal_score(&two_ingredients(), TEASPOON_BUDGET, Some(0)).unwrap(), 0);
    }

    #[test]
    fn test_unreachable_target_yields_no_mixture() {
        // Calories are 300 + 5 * butterscotch, never 123.
        let best = find_best_mixture(&two_ingredients(), TEASPOON_BUDGET, Some(123)).unwrap();
        assert!(best.is_none());
    }

    #[test]
    fn test_ties_keep_first_split() {
        let plain = vec![
            Ingredient::new("Flour", 1, 1, 1, 1, 1),
            Ingredient::new("Sugar", 1, 1, 1, 1, 1),
        ];
        let best = find_best_mixture(&plain, 4, None).unwrap().unwrap();
        assert_eq!(best.score, 256);
        assert_eq!(best.amounts[0].1, 0);
        assert_eq!(best.amounts[1].1, 4);
    }
}
