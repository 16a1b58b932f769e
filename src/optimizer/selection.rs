//! Canonical serving selection.
//!
//! Reduces a candidate's serving list to one fully-populated, gram-preferred
//! serving. Everything downstream assumes the serving it gets back here is
//! complete.

use crate::models::{FoodCandidate, Serving};

/// Pick the canonical serving for a candidate.
///
/// Gram-denominated servings win; the first one in provider order is taken.
/// When none exists the first serving of any unit is used instead —
/// gram-ness is preferred, never required. Returns `None` only for an empty
/// serving list.
pub fn select_canonical(candidate: &FoodCandidate) -> Option<Serving> {
    let selected = candidate
        .servings
        .iter()
        .find(|s| s.is_gram_denominated())
        .or_else(|| candidate.servings.first())?;

    Some(repair(selected.clone(), &candidate.servings))
}

/// Fill in whatever the provider left empty.
///
/// A serving with no identifier or no calories is considered broken and
/// replaced wholesale by the first available serving; afterward every
/// still-empty descriptive field gets a fixed default. Numeric nutrient
/// fields are already complete (lenient parsing zeroes them at the wire).
fn repair(mut serving: Serving, available: &[Serving]) -> Serving {
    if serving.serving_id.is_empty() || serving.nutrients.calories == 0.0 {
        if let Some(first) = available.first() {
            serving = first.clone();
        }
    }

    if serving.serving_id.is_empty() {
        serving.serving_id = "default".to_string();
    }
    if serving.serving_description.is_empty() {
        serving.serving_description = "1 serving".to_string();
    }
    if serving.measurement_description.is_empty() {
        serving.measurement_description = "g".to_string();
    }
    if serving.metric_serving_amount == 0.0 {
        serving.metric_serving_amount = 1.0;
    }
    if serving.metric_serving_unit.is_empty() {
        serving.metric_serving_unit = "g".to_string();
    }
    if serving.number_of_units.is_empty() {
        serving.number_of_units = "1".to_string();
    }

    serving
}
