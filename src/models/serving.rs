use serde::{Deserialize, Serialize};

use crate::models::decimal;

/// Full nutrient breakdown of one serving.
///
/// Field set mirrors the nutrition API's wire schema. Every field is a
/// decimal string on the wire; internally everything is `f64`, with
/// malformed or missing values degrading to zero at parse time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrients {
    #[serde(with = "decimal")]
    pub calories: f64,

    #[serde(with = "decimal")]
    pub protein: f64,

    #[serde(with = "decimal")]
    pub carbohydrate: f64,

    #[serde(with = "decimal")]
    pub fat: f64,

    #[serde(with = "decimal")]
    pub sugar: f64,

    #[serde(with = "decimal")]
    pub fiber: f64,

    #[serde(with = "decimal")]
    pub saturated_fat: f64,

    #[serde(with = "decimal")]
    pub monounsaturated_fat: f64,

    #[serde(with = "decimal")]
    pub polyunsaturated_fat: f64,

    #[serde(with = "decimal")]
    pub cholesterol: f64,

    #[serde(with = "decimal")]
    pub sodium: f64,

    #[serde(with = "decimal")]
    pub potassium: f64,

    #[serde(with = "decimal")]
    pub calcium: f64,

    #[serde(with = "decimal")]
    pub iron: f64,

    #[serde(with = "decimal")]
    pub vitamin_a: f64,

    #[serde(with = "decimal")]
    pub vitamin_b: f64,

    #[serde(with = "decimal")]
    pub vitamin_c: f64,

    #[serde(with = "decimal")]
    pub vitamin_d: f64,
}

impl Nutrients {
    /// Every nutrient multiplied by `factor`.
    ///
    /// Nutrient density is assumed to scale linearly with quantity.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbohydrate: self.carbohydrate * factor,
            fat: self.fat * factor,
            sugar: self.sugar * factor,
            fiber: self.fiber * factor,
            saturated_fat: self.saturated_fat * factor,
            monounsaturated_fat: self.monounsaturated_fat * factor,
            polyunsaturated_fat: self.polyunsaturated_fat * factor,
            cholesterol: self.cholesterol * factor,
            sodium: self.sodium * factor,
            potassium: self.potassium * factor,
            calcium: self.calcium * factor,
            iron: self.iron * factor,
            vitamin_a: self.vitamin_a * factor,
            vitamin_b: self.vitamin_b * factor,
            vitamin_c: self.vitamin_c * factor,
            vitamin_d: self.vitamin_d * factor,
        }
    }
}

/// One serving of a food as returned by the nutrition lookup.
///
/// Immutable once fetched; scaling operations produce a new `Serving`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Serving {
    pub serving_id: String,
    pub serving_description: String,
    pub measurement_description: String,

    #[serde(with = "decimal")]
    pub metric_serving_amount: f64,
    pub metric_serving_unit: String,
    pub number_of_units: String,

    #[serde(flatten)]
    pub nutrients: Nutrients,
}

impl Serving {
    /// Whether the serving is denominated in grams.
    ///
    /// Matches the measurement description exactly (case-insensitively)
    /// against "g", "gram", "grams".
    pub fn is_gram_denominated(&self) -> bool {
        matches!(
            self.measurement_description.to_lowercase().as_str(),
            "g" | "gram" | "grams"
        )
    }

    /// New serving with the gram amount and every nutrient multiplied by
    /// `factor`. Non-positive factors return the serving unchanged.
    pub fn scaled(&self, factor: f64) -> Self {
        if factor <= 0.0 {
            return self.clone();
        }
        Self {
            metric_serving_amount: self.metric_serving_amount * factor,
            nutrients: self.nutrients.scaled(factor),
            ..self.clone()
        }
    }
}

/// A food candidate from the nutrition lookup: identity plus the ordered
/// serving list as returned by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodCandidate {
    pub food_id: String,
    pub food_name: String,
    pub food_type: String,
    pub brand_name: String,
    pub servings: Vec<Serving>,
}

/// One page of lookup results, with provider paging metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodSearchPage {
    pub provider_name: String,
    pub search_tag: String,
    pub page_number: String,
    pub max_results: String,
    pub total_results: String,
    pub foods: Vec<FoodCandidate>,
}
