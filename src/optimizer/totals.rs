//! Macro aggregation across a meal's foods.

use crate::models::{MacroTarget, OptimizedFood};

/// Sum calories, carbs, proteins, and fats over every food's serving.
///
/// Feeds the rebalancer between passes and becomes the meal's reported
/// macro total.
pub fn meal_macros(foods: &[OptimizedFood]) -> MacroTarget {
    foods.iter().fold(MacroTarget::default(), |mut total, food| {
        let n = &food.serving.nutrients;
        total.calories += n.calories;
        total.carbs += n.carbohydrate;
        total.proteins += n.protein;
        total.fats += n.fat;
        total
    })
}
