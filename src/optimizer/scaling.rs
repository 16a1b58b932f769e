//! Portion scaling: fit each canonical serving to its calorie share.

use tracing::debug;

use crate::models::{FoodPortion, MacroTarget, OptimizedFood, Serving};

/// Calorie share of the meal assigned to one food, in percent.
///
/// Matched case-insensitively by exact name; a food the plan source never
/// listed falls back to an equal split across the meal's food count. The
/// split truncates to whole percent, so three foods get 33 each.
pub fn portion_ratio(food_name: &str, portions: &[FoodPortion]) -> f64 {
    portions
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(food_name))
        .map(|p| f64::from(p.portion_ratio))
        .unwrap_or_else(|| (100 / portions.len().max(1)) as f64)
}

/// Scale a serving so its calories hit `target_calories`.
///
/// A serving with zero calories or a zero gram amount cannot be scaled
/// meaningfully and is returned unchanged. The multiplier itself is never
/// clamped: a zero calorie target zeroes the serving, and any excess from
/// a large multiplier is the rebalancer's problem.
pub fn scale_to_calories(serving: &Serving, target_calories: f64) -> Serving {
    let current_calories = serving.nutrients.calories;
    let current_amount = serving.metric_serving_amount;
    if current_calories == 0.0 || current_amount == 0.0 {
        return serving.clone();
    }

    let factor = target_calories / current_calories;
    Serving {
        metric_serving_amount: current_amount * factor,
        nutrients: serving.nutrients.scaled(factor),
        ..serving.clone()
    }
}

/// Scale every food's canonical serving to its share of the meal's calorie
/// target.
pub fn apply_portions(
    foods: Vec<OptimizedFood>,
    portions: &[FoodPortion],
    target: &MacroTarget,
) -> Vec<OptimizedFood> {
    foods
        .into_iter()
        .map(|food| {
            let ratio = portion_ratio(&food.food_name, portions);
            let target_calories = target.calories * ratio / 100.0;
            debug!(
                food = %food.food_name,
                ratio,
                target_calories,
                "scaling to calorie share"
            );

            OptimizedFood {
                serving: scale_to_calories(&food.serving, target_calories),
                food_name: food.food_name,
            }
        })
        .collect()
}
