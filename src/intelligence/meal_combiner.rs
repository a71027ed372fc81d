// ABOUTME: Nutrition normalizer - portion scaling and multi-food meal combination
// ABOUTME: Combines macros additively and glycemic index as a carb-weighted average
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

//! # Nutrition Normalizer
//!
//! Scales a food's per-serving macros by its portion count and combines multiple
//! foods into one aggregate meal. The combined glycemic index is the
//! carbohydrate-weighted average of the item indices: carbs drive the glucose
//! response, so a 30g-carb item influences the meal index three times as much as
//! a 10g-carb item. The combination absorbs every item's portion multiplier, so
//! the returned fact always carries `portions = 1.0`.

use crate::errors::{EngineError, EngineResult};
use crate::models::{NutritionFact, ScaledMacros};
use tracing::debug;

/// Apply a food's portion multiplier to its per-serving macros
#[must_use]
pub fn scale_to_portions(fact: &NutritionFact) -> ScaledMacros {
    ScaledMacros {
        carbs_g: fact.carbs_g * fact.portions,
        protein_g: fact.protein_g * fact.portions,
        fat_g: fact.fat_g * fact.portions,
        fiber_g: fact.fiber_g * fact.portions,
    }
}

/// Combine a non-empty sequence of foods into one aggregate meal
///
/// Macros sum across items after portion scaling. The meal glycemic index is
/// `Σ(gi·carbs·portions) / Σ(carbs·portions)`, defined as 0 for a zero-carb
/// meal (deliberate edge-case policy, not an error). The serving size is the
/// portion-weighted sum of item serving sizes.
///
/// A single-item sequence runs through the same path; the weighted average
/// reduces exactly to the item's own values.
///
/// # Errors
/// Returns `INVALID_INPUT` when `foods` is empty. Callers must detect the
/// no-food case upstream or handle this error; the combiner never returns a
/// silently zeroed meal.
pub fn combine_meal(foods: &[NutritionFact]) -> EngineResult<NutritionFact> {
    if foods.is_empty() {
        return Err(EngineError::invalid_input(
            "Cannot combine an empty meal - at least one food is required",
        ));
    }

    let mut carbs_g = 0.0;
    let mut protein_g = 0.0;
    let mut fat_g = 0.0;
    let mut fiber_g = 0.0;
    let mut serving_size_g = 0.0;
    let mut gi_carb_product = 0.0;

    for food in foods {
        let scaled = scale_to_portions(food);
        carbs_g += scaled.carbs_g;
        protein_g += scaled.protein_g;
        fat_g += scaled.fat_g;
        fiber_g += scaled.fiber_g;
        serving_size_g += food.serving_size_g * food.portions;
        gi_carb_product += food.glycemic_index * scaled.carbs_g;
    }

    let glycemic_index = if carbs_g > 0.0 {
        gi_carb_product / carbs_g
    } else {
        0.0
    };

    let name = foods
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(" + ");

    debug!(
        meal = %name,
        items = foods.len(),
        carbs_g,
        weighted_gi = glycemic_index,
        "combined meal"
    );

    Ok(NutritionFact {
        name,
        glycemic_index,
        carbs_g,
        protein_g,
        fat_g,
        fiber_g,
        serving_size_g,
        portions: 1.0,
    })
}
