//! Meal optimization pipeline.
//!
//! A meal arrives as a macro target plus a food list with portion ratios.
//! Optimization runs in four stages: pick one canonical serving per food,
//! scale each serving to its calorie share, run bounded rebalancing passes
//! against the macro target, then aggregate the achieved macros.

pub mod classify;
pub mod constants;
pub mod rebalance;
pub mod scaling;
pub mod selection;
pub mod totals;

pub use rebalance::{rebalance, RebalanceConfig};
pub use selection::select_canonical;
pub use totals::meal_macros;

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::models::{FoodCandidate, MealRequest, MealResult, OptimizedFood};
use crate::resolver::FoodResolver;

/// Assemble one meal from already-resolved food candidates.
///
/// Pure and synchronous; meals sharing a resolution map can be assembled
/// independently. Foods whose lookup came back empty are dropped from the
/// meal rather than failing it.
pub fn assemble_meal(
    resolved: &HashMap<String, Option<FoodCandidate>>,
    meal: &MealRequest,
    config: &RebalanceConfig,
) -> MealResult {
    let mut foods = Vec::with_capacity(meal.foods.len());
    for portion in &meal.foods {
        let Some(Some(candidate)) = resolved.get(&portion.name) else {
            warn!(food = %portion.name, "dropping unresolved food from meal");
            continue;
        };
        let Some(serving) = select_canonical(candidate) else {
            warn!(food = %portion.name, "candidate has no usable serving");
            continue;
        };
        foods.push(OptimizedFood {
            food_name: portion.name.clone(),
            serving,
        });
    }

    let foods = scaling::apply_portions(foods, &meal.foods, &meal.macro_target);
    let foods = rebalance(foods, &meal.macro_target, config);
    let macros = meal_macros(&foods);

    MealResult {
        foods,
        macro_target: meal.macro_target,
        macros,
    }
}

/// Front door of the crate: resolves foods and optimizes meals.
pub struct MealOptimizer {
    resolver: FoodResolver,
    config: RebalanceConfig,
}

impl MealOptimizer {
    pub fn new(resolver: FoodResolver) -> Self {
        Self {
            resolver,
            config: RebalanceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RebalanceConfig) -> Self {
        self.config = config;
        self
    }

    /// Optimize a single meal: resolve its foods, then assemble.
    pub async fn optimize_meal(&self, meal: &MealRequest) -> MealResult {
        let names: HashSet<String> = meal.foods.iter().map(|p| p.name.clone()).collect();
        let resolved = self.resolver.resolve_all(&names).await;
        assemble_meal(&resolved, meal, &self.config)
    }

    /// Optimize every meal of a plan against one shared resolution.
    ///
    /// Food names are deduplicated across the whole plan so each unique
    /// name hits the lookup exactly once, however many meals list it.
    pub async fn optimize_plan(&self, meals: &[MealRequest]) -> Vec<MealResult> {
        let names: HashSet<String> = meals
            .iter()
            .flat_map(|meal| meal.foods.iter().map(|p| p.name.clone()))
            .collect();

        let started = Instant::now();
        let resolved = self.resolver.resolve_all(&names).await;
        debug!(
            unique_foods = names.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "plan resolution complete"
        );

        let started = Instant::now();
        let results: Vec<MealResult> = meals
            .iter()
            .map(|meal| assemble_meal(&resolved, meal, &self.config))
            .collect();
        info!(
            meals = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "plan optimization complete"
        );

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodPortion, MacroTarget, Nutrients, Serving};

    fn candidate(name: &str, calories: f64, carbs: f64, protein: f64, fat: f64) -> FoodCandidate {
        FoodCandidate {
            food_id: "1".to_string(),
            food_name: name.to_string(),
            food_type: "Generic".to_string(),
            brand_name: String::new(),
            servings: vec![Serving {
                serving_id: "1".to_string(),
                serving_description: "100 g".to_string(),
                measurement_description: "g".to_string(),
                metric_serving_amount: 100.0,
                metric_serving_unit: "g".to_string(),
                number_of_units: "100".to_string(),
                nutrients: Nutrients {
                    calories,
                    carbohydrate: carbs,
                    protein,
                    fat,
                    ..Nutrients::default()
                },
            }],
        }
    }

    fn resolved_map(
        candidates: Vec<FoodCandidate>,
    ) -> HashMap<String, Option<FoodCandidate>> {
        candidates
            .into_iter()
            .map(|c| (c.food_name.clone(), Some(c)))
            .collect()
    }

    #[test]
    fn test_assemble_meal_drops_unresolved_foods() {
        let mut resolved = resolved_map(vec![candidate("Chicken Breast", 165.0, 0.0, 31.0, 3.6)]);
        resolved.insert("Unicorn Steak".to_string(), None);

        let meal = MealRequest {
            macro_target: MacroTarget {
                calories: 400.0,
                carbs: 0.0,
                proteins: 60.0,
                fats: 10.0,
            },
            foods: vec![
                FoodPortion::new("Chicken Breast", 60),
                FoodPortion::new("Unicorn Steak", 40),
            ],
        };

        let result = assemble_meal(&resolved, &meal, &RebalanceConfig::default());
        assert_eq!(result.foods.len(), 1);
        assert_eq!(result.foods[0].food_name, "Chicken Breast");
    }

    #[test]
    fn test_assemble_meal_scales_to_calorie_shares() {
        let resolved = resolved_map(vec![
            candidate("Chicken Breast", 165.0, 0.0, 31.0, 3.6),
            candidate("Broccoli", 34.0, 7.0, 2.8, 0.4),
        ]);
        let meal = MealRequest {
            macro_target: MacroTarget {
                calories: 500.0,
                carbs: 40.0,
                proteins: 50.0,
                fats: 25.0,
            },
            foods: vec![
                FoodPortion::new("Chicken Breast", 70),
                FoodPortion::new("Broccoli", 30),
            ],
        };

        // Neither food triggers a rebalancing pass here, so scaled
        // calories survive to the output.
        let result = assemble_meal(&resolved, &meal, &RebalanceConfig { passes: 0, ..RebalanceConfig::default() });
        assert!((result.foods[0].serving.nutrients.calories - 350.0).abs() < 1e-6);
        assert!((result.foods[1].serving.nutrients.calories - 150.0).abs() < 1e-6);
        assert!((result.macros.calories - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_ratio_food_contributes_nothing() {
        let resolved = resolved_map(vec![
            candidate("Chicken Breast", 165.0, 0.0, 31.0, 3.6),
            candidate("Brown Rice", 112.0, 23.5, 2.3, 0.8),
        ]);
        let meal = MealRequest {
            macro_target: MacroTarget {
                calories: 400.0,
                carbs: 0.0,
                proteins: 60.0,
                fats: 10.0,
            },
            foods: vec![
                FoodPortion::new("Chicken Breast", 100),
                FoodPortion::new("Brown Rice", 0),
            ],
        };

        let result = assemble_meal(
            &resolved,
            &meal,
            &RebalanceConfig {
                passes: 0,
                ..RebalanceConfig::default()
            },
        );

        // A zero calorie share zeroes the serving; its macros must not
        // leak into the aggregate.
        let rice = result
            .foods
            .iter()
            .find(|f| f.food_name == "Brown Rice")
            .expect("rice present");
        assert_eq!(rice.serving.nutrients.calories, 0.0);
        assert_eq!(rice.serving.nutrients.carbohydrate, 0.0);
        assert_eq!(rice.serving.metric_serving_amount, 0.0);
        assert!((result.macros.calories - 400.0).abs() < 1e-9);
        assert!((result.macros.carbs - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_meal_echoes_target_and_aggregates() {
        let resolved = resolved_map(vec![candidate("Oatmeal", 380.0, 67.0, 13.0, 6.5)]);
        let meal = MealRequest {
            macro_target: MacroTarget {
                calories: 380.0,
                carbs: 67.0,
                proteins: 13.0,
                fats: 6.5,
            },
            foods: vec![FoodPortion::new("Oatmeal", 100)],
        };

        let result = assemble_meal(&resolved, &meal, &RebalanceConfig::default());
        assert_eq!(result.macro_target, meal.macro_target);
        assert!((result.macros.carbs - meal_macros(&result.foods).carbs).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_meal_empty_resolution_yields_empty_meal() {
        let resolved = HashMap::new();
        let meal = MealRequest {
            macro_target: MacroTarget::default(),
            foods: vec![FoodPortion::new("Anything", 100)],
        };

        let result = assemble_meal(&resolved, &meal, &RebalanceConfig::default());
        assert!(result.foods.is_empty());
        assert_eq!(result.macros, MacroTarget::default());
    }
}
