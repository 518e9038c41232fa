use crate::error::{CookieError, Result};
use crate::models::{Ingredient, PropertyTotals};

/// Weighted property sums of a mixture: each ingredient's per-teaspoon values
/// times its teaspoon count, summed.
///
/// `amounts[i]` is the number of teaspoons of `ingredients[i]`; the two slices
/// must have the same length.
pub fn property_totals(ingredients: &[Ingredient], amounts: &[u32]) -> Result<PropertyTotals> {
    if ingredients.len() != amounts.len() {
        return Err(CookieError::LengthMismatch {
            ingredients: ingredients.len(),
            amounts: amounts.len(),
        });
    }

    let mut totals = PropertyTotals::default();
    for (ingredient, &amount) in ingredients.iter().zip(amounts) {
        let teaspoons = i64::from(amount);
        totals.capacity = weigh(totals.capacity, ingredient.capacity, teaspoons);
        totals.durability = weigh(totals.durability, ingredient.durability, teaspoons);
        totals.flavor = weigh(totals.flavor, ingredient.flavor, teaspoons);
        totals.texture = weigh(totals.texture, ingredient.texture, teaspoons);
        totals.calories = weigh(totals.calories, ingredient.calories, teaspoons);
    }

    Ok(totals)
}

/// `total + per_teaspoon * teaspoons`, saturating at the `i64` bounds.
#[inline]
fn weigh(total: i64, per_teaspoon: i64, teaspoons: i64) -> i64 {
    total.saturating_add(per_teaspoon.saturating_mul(teaspoons))
}

/// Cookie score of a set of totals.
///
/// Negative totals are floored to zero before multiplying, so any property
/// at or below zero zeroes the whole score. Calories never take part.
pub fn cookie_score(totals: &PropertyTotals) -> u64 {
    totals
        .scored()
        .into_iter()
        .map(|total| total.max(0) as u64)
        .fold(1u64, u64::saturating_mul)
}

/// Score a single mixture directly.
pub fn score_mixture(ingredients: &[Ingredient], amounts: &[u32]) -> Result<u64> {
    property_totals(ingredients, amounts).map(|totals| cookie_score(&totals))
}
