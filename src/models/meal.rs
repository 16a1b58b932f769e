use serde::{Deserialize, Serialize};

use crate::models::Serving;

/// A (calories, carbs, proteins, fats) tuple.
///
/// Used both as an input (a meal's nutrient goal) and as an output (the
/// aggregated macros actually achieved).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroTarget {
    pub calories: f64,
    pub carbs: f64,
    pub proteins: f64,
    pub fats: f64,
}

/// One entry of a meal's food list: a name and the share of the meal's
/// calories it should represent, in percent.
///
/// Ratios across a meal are expected (not enforced) to sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPortion {
    pub name: String,
    pub portion_ratio: u8,
}

impl FoodPortion {
    pub fn new(name: impl Into<String>, portion_ratio: u8) -> Self {
        Self {
            name: name.into(),
            portion_ratio,
        }
    }
}

/// One meal as supplied by the plan source: a macro target plus an ordered
/// list of foods with portion ratios.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealRequest {
    pub macro_target: MacroTarget,
    pub foods: Vec<FoodPortion>,
}

/// A food after selection and scaling: exactly one canonical serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedFood {
    pub food_name: String,
    pub serving: Serving,
}

/// The optimized output for one meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealResult {
    /// Foods in request order; foods the lookup could not resolve are
    /// absent.
    pub foods: Vec<OptimizedFood>,

    /// The meal's original macro target, echoed for the caller.
    pub macro_target: MacroTarget,

    /// Aggregated macros actually achieved across `foods`.
    pub macros: MacroTarget,
}
