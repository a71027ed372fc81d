// ABOUTME: Glycemic load engine - base load, macro attenuation modifiers, spike classification
// ABOUTME: Pure arithmetic pipeline from nutrition facts to a classified GlycemicLoadResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

//! # Glycemic Load Engine
//!
//! Computes the effective insulin spike potential of a food or meal:
//!
//! 1. Net carbs = total carbs − fiber (fiber is not fully metabolized as glucose)
//! 2. Base GL = GI × net carbs / 100
//! 3. Independent attenuation modifiers for fiber (slows digestion), protein
//!    (slows gastric emptying), and fat (delays absorption)
//! 4. Effective GL = base GL × (1−fiber)(1−protein)(1−fat)
//!
//! The modifiers compose multiplicatively rather than additively: the
//! physiological effects overlap, so a second attenuator acts on the already
//! reduced load (diminishing returns). Both the base and effective loads are
//! classified on the same 3-tier spike scale.
//!
//! This function is total over its declared domain: given well-typed input it
//! never fails. Out-of-range values (negative GI, fiber exceeding carbs)
//! propagate permissively; only negative net carbs are clamped.

use crate::config::{GlycemicConfig, MacroModifierConfig, SpikeThresholdConfig};
use crate::intelligence::{advisory, meal_combiner, risk_calculator};
use crate::models::{GlycemicLoadResult, NutritionFact, ProfileContext, SpikeLevel};
use tracing::debug;

/// Fiber attenuation fraction for the given fiber grams
///
/// Inclusive upper bounds: exactly 5g of fiber maps to the 10% tier, not 15%.
#[must_use]
pub fn calculate_fiber_modifier(fiber_g: f64, config: &MacroModifierConfig) -> f64 {
    for tier in &config.fiber_tiers {
        if fiber_g <= tier.limit {
            return tier.value;
        }
    }
    config.fiber_max_reduction
}

/// Protein attenuation fraction for the given protein grams
///
/// Exclusive upper bounds: exactly 5g of protein already earns the 10% tier.
#[must_use]
pub fn calculate_protein_modifier(protein_g: f64, config: &MacroModifierConfig) -> f64 {
    for tier in &config.protein_tiers {
        if protein_g < tier.limit {
            return tier.value;
        }
    }
    config.protein_max_reduction
}

/// Fat attenuation fraction for the given fat grams
///
/// Exclusive upper bounds, capped lower than fiber/protein: fat delays
/// absorption but does not reduce the total glucose dose as much.
#[must_use]
pub fn calculate_fat_modifier(fat_g: f64, config: &MacroModifierConfig) -> f64 {
    for tier in &config.fat_tiers {
        if fat_g < tier.limit {
            return tier.value;
        }
    }
    config.fat_max_reduction
}

/// Classify a glycemic load value on the 3-tier spike scale
///
/// Applied identically to the base and effective loads.
#[must_use]
pub fn classify_spike_level(load: f64, config: &SpikeThresholdConfig) -> SpikeLevel {
    if load <= config.low_max {
        SpikeLevel::Low
    } else if load <= config.moderate_max {
        SpikeLevel::Moderate
    } else {
        SpikeLevel::High
    }
}

/// Calculate the effective glycemic load for a food or combined meal
///
/// The main entry point of the engine. When `profile` is supplied, the
/// personalized risk adjustment runs on the effective load and attaches to the
/// result; otherwise `risk_score` is `None`. Recommendations and the narrative
/// explanation are generated after classification.
#[must_use]
pub fn calculate_glycemic_load(
    fact: &NutritionFact,
    profile: Option<&ProfileContext>,
    config: &GlycemicConfig,
) -> GlycemicLoadResult {
    let scaled = meal_combiner::scale_to_portions(fact);

    let net_carbs_g = (scaled.carbs_g - scaled.fiber_g).max(0.0);
    let base_load = fact.glycemic_index * net_carbs_g / 100.0;

    let fiber_modifier = calculate_fiber_modifier(scaled.fiber_g, &config.modifiers);
    let protein_modifier = calculate_protein_modifier(scaled.protein_g, &config.modifiers);
    let fat_modifier = calculate_fat_modifier(scaled.fat_g, &config.modifiers);

    let retained = (1.0 - fiber_modifier) * (1.0 - protein_modifier) * (1.0 - fat_modifier);
    let combined_modifier = 1.0 - retained;
    let effective_load = base_load * retained;

    let spike_level_before_modifiers = classify_spike_level(base_load, &config.spike);
    let spike_level = classify_spike_level(effective_load, &config.spike);

    debug!(
        food = %fact.name,
        base_load,
        effective_load,
        combined_modifier,
        spike = spike_level.as_str(),
        "calculated glycemic load"
    );

    let risk_score =
        profile.map(|p| risk_calculator::calculate_risk_score(effective_load, p, config));

    let recommendations = advisory::generate_recommendations(spike_level, &scaled, profile);

    let mut result = GlycemicLoadResult {
        food_name: fact.name.clone(),
        portions: fact.portions,
        serving_size_g: fact.serving_size_g,
        carbs_g: scaled.carbs_g,
        protein_g: scaled.protein_g,
        fat_g: scaled.fat_g,
        fiber_g: scaled.fiber_g,
        net_carbs_g,
        glycemic_index: fact.glycemic_index,
        base_load,
        effective_load,
        fiber_modifier,
        protein_modifier,
        fat_modifier,
        combined_modifier,
        spike_level_before_modifiers,
        spike_level,
        recommendations,
        explanation: String::new(),
        risk_score,
    };
    result.explanation = advisory::generate_explanation(&result);
    result
}
