mod client;

pub use client::NutritionClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::FoodSearchPage;

/// External nutrition lookup.
///
/// The resolver takes this as an injected capability, so tests and
/// alternative providers plug in without touching the pipeline. Empty
/// result pages and transport errors are both treated as absence by the
/// caller.
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Search the provider for a food by name, returning the first page of
    /// candidates.
    async fn search(&self, food_name: &str) -> Result<FoodSearchPage>;
}
