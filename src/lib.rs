pub mod error;
pub mod lookup;
pub mod models;
pub mod optimizer;
pub mod resolver;

pub use error::{OptimizerError, Result};
pub use lookup::{NutritionClient, NutritionLookup};
pub use models::{MacroTarget, MealRequest, MealResult, OptimizedFood};
pub use optimizer::{MealOptimizer, RebalanceConfig};
pub use resolver::FoodResolver;
