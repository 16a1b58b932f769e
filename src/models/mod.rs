pub mod decimal;
mod meal;
mod serving;

pub use meal::{FoodPortion, MacroTarget, MealRequest, MealResult, OptimizedFood};
pub use serving::{FoodCandidate, FoodSearchPage, Nutrients, Serving};
