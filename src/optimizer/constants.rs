/// Concurrency ceiling for outstanding nutrition lookups.
pub const MAX_CONCURRENT_LOOKUPS: usize = 10;

/// Tolerance band around each macro target (fraction of the target).
pub const MACRO_TOLERANCE: f64 = 0.05;

/// Default number of rebalancing passes.
pub const DEFAULT_REBALANCE_PASSES: usize = 2;

/// Cap on single-pass growth of a fat-source serving (factor − 1).
pub const FAT_PASS_CAP: f64 = 0.6;

/// Fraction of the measured fat deficit corrected per pass.
pub const FAT_RESPONSE: f64 = 0.8;

/// Cap on single-pass reduction of starchy-carb servings.
pub const STARCH_PASS_CAP: f64 = 0.35;

// ─────────────────────────────────────────────────────────────────────────────
// Food classification keywords (substring match on lowercased names)
// ─────────────────────────────────────────────────────────────────────────────

/// Minimally-processed fat sources, preferred when correcting fat deficits.
pub const WHOLE_FOOD_FAT_KEYWORDS: &[&str] = &[
    "avocado",
    "almond",
    "walnut",
    "pecan",
    "cashew",
    "pistachio",
    "hazelnut",
    "macadamia",
    "peanut",
    "nut butter",
    "peanut butter",
    "almond butter",
    "tahini",
    "sesame",
    "sunflower seed",
    "pumpkin seed",
    "chia",
    "flax",
    "hemp",
    "olive oil",
    "olives",
    "cheese",
];

/// Protein sources fatty enough to stand in when no whole-food fat exists.
pub const HIGH_FAT_PROTEIN_KEYWORDS: &[&str] =
    &["salmon", "beef", "egg", "whole milk", "cheese"];

/// Grain/starch carbohydrate sources, trimmed first on carb excess.
pub const STARCHY_CARB_KEYWORDS: &[&str] = &[
    "rice",
    "oat",
    "oatmeal",
    "potato",
    "sweet potato",
    "pasta",
    "quinoa",
    "bread",
    "tortilla",
    "corn",
    "couscous",
    "barley",
];
