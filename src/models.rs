// ABOUTME: Domain types for glycemic load scoring and profile-based risk adjustment
// ABOUTME: Nutrition facts, health profile context, classification enums, result structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

//! # Data Model
//!
//! Shared types for the scoring pipeline. Every type here is a plain immutable
//! value: constructed fresh per calculation, serialized by the web layer with
//! lowercase string tags, and discarded after the caller consumes it. The engine
//! holds no instance state.

use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Insulin spike classification for a glycemic load value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpikeLevel {
    /// GL at or below 10 - minimal insulin response expected
    Low,
    /// GL of 11-19 - noticeable but manageable response
    Moderate,
    /// GL of 20 or above - strong insulin response expected
    High,
}

impl SpikeLevel {
    /// Lowercase string tag, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Whether this level warrants caution (moderate or high)
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Moderate | Self::High)
    }
}

/// Personalized risk classification for a profile-adjusted score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Negligible impact for this individual
    Minimal,
    /// Low impact
    Low,
    /// Moderate impact
    Moderate,
    /// High impact - caution advised
    High,
    /// Very high impact - strong caution advised
    VeryHigh,
}

impl RiskLevel {
    /// Lowercase string tag, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

/// Diabetes status reported in a health profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiabetesType {
    /// No diabetes diagnosis
    None,
    /// Type 1 diabetes
    Type1,
    /// Type 2 diabetes
    Type2,
    /// Prediabetes diagnosis
    Prediabetes,
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Active 6-7 days/week
    Active,
    /// Very active, hard daily training
    VeryActive,
}

/// Nutrition facts for one food item, per reference serving
///
/// The engine trusts these values; the boundary layer (food database lookup, AI
/// vision estimation) validates and clamps before construction. `fiber_g` is
/// assumed to not exceed `carbs_g`, but the engine clamps negative net carbs to
/// zero rather than enforcing the invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionFact {
    /// Food identifier (display name)
    pub name: String,
    /// Glycemic index, 0-100+ unitless scale
    pub glycemic_index: f64,
    /// Carbohydrates per reference serving (grams)
    pub carbs_g: f64,
    /// Protein per reference serving (grams)
    pub protein_g: f64,
    /// Fat per reference serving (grams)
    pub fat_g: f64,
    /// Fiber per reference serving (grams)
    pub fiber_g: f64,
    /// Reference serving size (grams)
    pub serving_size_g: f64,
    /// Portion multiplier (number of reference servings, not grams)
    #[serde(default = "default_portions")]
    pub portions: f64,
}

const fn default_portions() -> f64 {
    1.0
}

impl NutritionFact {
    /// Opt-in boundary validation for callers that want range checking
    ///
    /// The engine itself never calls this: out-of-range inputs produce
    /// nonsensical but non-crashing output by design. Callers sitting at a trust
    /// boundary can invoke it before handing facts to the engine.
    ///
    /// # Errors
    /// Returns `VALUE_OUT_OF_RANGE` when a macro is negative, the serving size or
    /// portion count is not positive, or the glycemic index is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.glycemic_index < 0.0 {
            return Err(EngineError::value_out_of_range(
                "Glycemic index cannot be negative",
            ));
        }
        for (label, value) in [
            ("Carbohydrates", self.carbs_g),
            ("Protein", self.protein_g),
            ("Fat", self.fat_g),
            ("Fiber", self.fiber_g),
        ] {
            if value < 0.0 {
                return Err(EngineError::value_out_of_range(format!(
                    "{label} cannot be negative"
                )));
            }
        }
        if self.serving_size_g <= 0.0 {
            return Err(EngineError::value_out_of_range(
                "Serving size must be positive",
            ));
        }
        if self.portions <= 0.0 {
            return Err(EngineError::value_out_of_range(
                "Portion count must be positive",
            ));
        }
        Ok(())
    }
}

/// Macros for a food after applying its portion multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScaledMacros {
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Fiber (grams)
    pub fiber_g: f64,
}

/// Health profile context for personalized risk adjustment
///
/// All fields except the insulin-resistance flag are optional; absent fields
/// simply contribute no risk factors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileContext {
    /// Diagnosed or suspected insulin resistance
    pub has_insulin_resistance: bool,
    /// Diabetes status
    pub diabetes_type: Option<DiabetesType>,
    /// Years since diabetes diagnosis
    pub diabetes_duration_years: Option<f64>,
    /// Body mass index (kg/m²)
    pub body_mass_index: Option<f64>,
    /// Self-reported activity level
    pub activity_level: Option<ActivityLevel>,
    /// Most recent A1C (percent)
    pub a1c: Option<f64>,
    /// Current medication names, free text
    pub medications: Option<Vec<String>>,
    /// Age in years
    pub age: Option<u32>,
}

impl ProfileContext {
    /// Diabetic means a type 1 or type 2 diagnosis
    #[must_use]
    pub fn is_diabetic(&self) -> bool {
        matches!(
            self.diabetes_type,
            Some(DiabetesType::Type1 | DiabetesType::Type2)
        )
    }

    /// Prediabetic means a prediabetes diagnosis or insulin resistance
    #[must_use]
    pub fn is_prediabetic(&self) -> bool {
        self.has_insulin_resistance || matches!(self.diabetes_type, Some(DiabetesType::Prediabetes))
    }
}

/// One named contribution to the profile risk adjustment
///
/// Kept as an ordered list rather than a map: breakdown order is the factor
/// evaluation order and part of the output contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFactor {
    /// Stable factor key (e.g. `insulin_resistance`, `high_a1c`)
    pub factor: String,
    /// Signed fraction this factor contributes
    pub modifier: f64,
}

/// Result of the profile risk adjustment stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskScoreResult {
    /// The effective glycemic load the adjustment started from
    pub base_load: f64,
    /// Load after applying the summed profile modifiers
    pub adjusted_score: f64,
    /// 5-tier classification of the adjusted score, profile-conditioned thresholds
    pub risk_level: RiskLevel,
    /// Sum of all applicable factor modifiers (may be negative)
    pub profile_modifier_total: f64,
    /// Applicable factors in evaluation order; inapplicable factors are omitted
    pub modifier_breakdown: Vec<RiskFactor>,
    /// Condition-specific cautions, in rule-evaluation order
    pub warnings: Vec<String>,
    /// Profile-tailored tips, capped at 4
    pub personalized_tips: Vec<String>,
}

/// Result of the glycemic load calculation for a food or combined meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlycemicLoadResult {
    /// Display name of the food or combined meal
    pub food_name: String,
    /// Portion multiplier the macros were scaled by
    pub portions: f64,
    /// Reference serving size (grams)
    pub serving_size_g: f64,

    /// Carbohydrates after portion scaling (grams)
    pub carbs_g: f64,
    /// Protein after portion scaling (grams)
    pub protein_g: f64,
    /// Fat after portion scaling (grams)
    pub fat_g: f64,
    /// Fiber after portion scaling (grams)
    pub fiber_g: f64,
    /// Carbohydrates minus fiber, clamped at zero (grams)
    pub net_carbs_g: f64,

    /// Glycemic index used for the calculation
    pub glycemic_index: f64,
    /// GI × net carbs / 100, before attenuation
    pub base_load: f64,
    /// Base load after fiber/protein/fat attenuation
    pub effective_load: f64,

    /// Fiber attenuation fraction, 0 to 0.20
    pub fiber_modifier: f64,
    /// Protein attenuation fraction, 0 to 0.20
    pub protein_modifier: f64,
    /// Fat attenuation fraction, 0 to 0.15
    pub fat_modifier: f64,
    /// Overall attenuation: complement of the product of complements
    pub combined_modifier: f64,

    /// Spike classification of the base load
    pub spike_level_before_modifiers: SpikeLevel,
    /// Spike classification of the effective load
    pub spike_level: SpikeLevel,

    /// Ordered, human-readable recommendations
    pub recommendations: Vec<String>,
    /// Deterministic multi-section narrative of the calculation
    pub explanation: String,
    /// Personalized risk adjustment, present when a profile was supplied
    pub risk_score: Option<RiskScoreResult>,
}
