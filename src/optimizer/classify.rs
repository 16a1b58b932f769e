//! Keyword-based food classification.
//!
//! The rebalancer decides which servings to grow or trim purely from food
//! names. Classification is a case-insensitive substring match against the
//! keyword tables in [`constants`](crate::optimizer::constants).

use crate::optimizer::constants::{
    HIGH_FAT_PROTEIN_KEYWORDS, STARCHY_CARB_KEYWORDS, WHOLE_FOOD_FAT_KEYWORDS,
};

fn matches_any(name: &str, keywords: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k))
}

/// Minimally-processed fat source (nuts, seeds, avocado, cheese, ...).
pub fn is_whole_food_fat(name: &str) -> bool {
    matches_any(name, WHOLE_FOOD_FAT_KEYWORDS)
}

/// High-fat protein, the fallback target for fat-deficit correction.
pub fn is_high_fat_protein(name: &str) -> bool {
    matches_any(name, HIGH_FAT_PROTEIN_KEYWORDS)
}

/// Grain/starch carbohydrate source.
pub fn is_starchy_carb(name: &str) -> bool {
    matches_any(name, STARCHY_CARB_KEYWORDS)
}
