// ABOUTME: Intelligence module tree for the glycemic scoring pipeline
// ABOUTME: Normalizer, load engine, risk adjuster, and advisory generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

//! # Intelligence Module
//!
//! The four stages of the scoring pipeline, each a set of pure functions. Data
//! flows strictly forward: [`meal_combiner`] → [`load_calculator`] →
//! [`risk_calculator`] → [`advisory`]; no stage calls back into an earlier one.

/// Recommendation, tip, and explanation generation
pub mod advisory;
/// Base and effective glycemic load with macro attenuation
pub mod load_calculator;
/// Portion scaling and carb-weighted meal combination
pub mod meal_combiner;
/// Profile-based risk adjustment and warnings
pub mod risk_calculator;

pub use advisory::{generate_explanation, generate_personalized_tips, generate_recommendations};
pub use load_calculator::{
    calculate_fat_modifier, calculate_fiber_modifier, calculate_glycemic_load,
    calculate_protein_modifier, classify_spike_level,
};
pub use meal_combiner::{combine_meal, scale_to_portions};
pub use risk_calculator::{calculate_risk_score, classify_risk_level};
