//! Macro rebalancing: bounded corrective passes after portion scaling.
//!
//! Scaling every food to its calorie share tends to leave meals short on
//! fat and long on carbohydrate. Each pass nudges one whole-food fat source
//! up and all starchy-carb sources down, inside per-pass caps that keep
//! portions realistic. This is a heuristic with a fixed pass count, not a
//! solver with a convergence condition.

use tracing::debug;

use crate::models::{MacroTarget, OptimizedFood};
use crate::optimizer::classify::{is_high_fat_protein, is_starchy_carb, is_whole_food_fat};
use crate::optimizer::constants::{
    DEFAULT_REBALANCE_PASSES, FAT_PASS_CAP, FAT_RESPONSE, MACRO_TOLERANCE, STARCH_PASS_CAP,
};
use crate::optimizer::totals::meal_macros;

/// Tunable knobs for the correction loop.
#[derive(Debug, Clone)]
pub struct RebalanceConfig {
    /// Number of correction passes to run.
    pub passes: usize,
    /// Tolerance band as a fraction of each target value.
    pub tolerance: f64,
    /// Cap on single-pass growth of the fat-source serving (factor − 1).
    pub fat_pass_cap: f64,
    /// Fraction of the fat deficit corrected per pass.
    pub fat_response: f64,
    /// Cap on single-pass reduction of starchy-carb servings.
    pub starch_pass_cap: f64,
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            passes: DEFAULT_REBALANCE_PASSES,
            tolerance: MACRO_TOLERANCE,
            fat_pass_cap: FAT_PASS_CAP,
            fat_response: FAT_RESPONSE,
            starch_pass_cap: STARCH_PASS_CAP,
        }
    }
}

/// Run the correction loop over a meal's foods.
///
/// Every pass recomputes aggregated macros, then applies the fat-deficit
/// and carb-excess corrections independently. Passes run to the configured
/// count regardless of whether the meal already sits inside the band.
pub fn rebalance(
    mut foods: Vec<OptimizedFood>,
    target: &MacroTarget,
    config: &RebalanceConfig,
) -> Vec<OptimizedFood> {
    for pass in 0..config.passes {
        let totals = meal_macros(&foods);

        correct_fat_deficit(&mut foods, target, &totals, config, pass);
        correct_carb_excess(&mut foods, target, &totals, config, pass);
    }

    foods
}

/// Grow one fat source when aggregated fat sits below the tolerance band.
///
/// Target priority: first whole-food fat, then first high-fat protein. The
/// growth factor corrects `fat_response` of the deficit, capped at
/// `fat_pass_cap` per pass.
fn correct_fat_deficit(
    foods: &mut [OptimizedFood],
    target: &MacroTarget,
    totals: &MacroTarget,
    config: &RebalanceConfig,
    pass: usize,
) {
    let fat_floor = target.fats * (1.0 - config.tolerance);
    if totals.fats >= fat_floor {
        return;
    }
    let deficit = fat_floor - totals.fats;

    let Some(index) = fat_source_index(foods) else {
        return;
    };
    let fat_per_unit = foods[index].serving.nutrients.fat;
    if fat_per_unit <= 0.0 {
        return;
    }

    let factor = 1.0 + (deficit / fat_per_unit * config.fat_response).min(config.fat_pass_cap);
    debug!(
        pass,
        food = %foods[index].food_name,
        deficit,
        factor,
        "growing fat source"
    );
    foods[index].serving = foods[index].serving.scaled(factor);
}

/// Trim every starchy-carb source when aggregated carbs exceed the band.
///
/// The reduction fraction distributes the excess across the starchy carbs'
/// combined contribution, capped at `starch_pass_cap` per pass.
fn correct_carb_excess(
    foods: &mut [OptimizedFood],
    target: &MacroTarget,
    totals: &MacroTarget,
    config: &RebalanceConfig,
    pass: usize,
) {
    let carb_ceiling = target.carbs * (1.0 + config.tolerance);
    if totals.carbs <= carb_ceiling {
        return;
    }
    let excess = totals.carbs - carb_ceiling;

    let starchy: Vec<usize> = foods
        .iter()
        .enumerate()
        .filter(|(_, f)| is_starchy_carb(&f.food_name))
        .map(|(i, _)| i)
        .collect();

    let starch_carbs: f64 = starchy
        .iter()
        .map(|&i| foods[i].serving.nutrients.carbohydrate)
        .sum();
    if starch_carbs <= 0.0 {
        return;
    }

    let reduction = (excess / starch_carbs).min(config.starch_pass_cap);
    let factor = 1.0 - reduction;
    debug!(pass, excess, factor, "trimming starchy carbs");
    for i in starchy {
        foods[i].serving = foods[i].serving.scaled(factor);
    }
}

/// First food eligible as a fat-correction target.
fn fat_source_index(foods: &[OptimizedFood]) -> Option<usize> {
    foods
        .iter()
        .position(|f| is_whole_food_fat(&f.food_name))
        .or_else(|| foods.iter().position(|f| is_high_fat_protein(&f.food_name)))
}
