// ABOUTME: Library entry point for the GlucoGuide glycemic intelligence engine
// ABOUTME: Pure scoring pipeline from nutrition facts to personalized spike/risk results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

#![deny(unsafe_code)]

//! # GlucoGuide Engine
//!
//! Deterministic scoring engine that estimates how much a food or meal will
//! raise blood insulin demand, and adjusts that estimate by an individual's
//! health profile.
//!
//! ## Pipeline
//!
//! 1. **Nutrition normalizer** - scales per-serving macros by portion count and
//!    combines multiple foods into one meal (carbohydrate-weighted GI)
//! 2. **Glycemic load engine** - base load, fiber/protein/fat attenuation,
//!    3-tier spike classification
//! 3. **Profile risk adjuster** - named signed modifiers summed into a
//!    personalized 5-tier risk level with warnings
//! 4. **Advisory generator** - deterministic recommendations, tips, and a
//!    narrative explanation
//!
//! Every function is pure and synchronous: no I/O, no shared mutable state,
//! safely callable concurrently without coordination. The surrounding
//! application (routing, auth, food database, vision model, persistence) is an
//! external collaborator that supplies validated inputs and consumes the
//! serializable results.
//!
//! ## Example
//!
//! ```rust
//! use glucoguide_engine::config::GlycemicConfig;
//! use glucoguide_engine::intelligence::calculate_glycemic_load;
//! use glucoguide_engine::models::NutritionFact;
//!
//! let config = GlycemicConfig::default();
//! let banana = NutritionFact {
//!     name: "banana".to_owned(),
//!     glycemic_index: 51.0,
//!     carbs_g: 23.0,
//!     protein_g: 1.1,
//!     fat_g: 0.3,
//!     fiber_g: 2.6,
//!     serving_size_g: 118.0,
//!     portions: 1.0,
//! };
//!
//! let result = calculate_glycemic_load(&banana, None, &config);
//! assert!(result.effective_load <= result.base_load);
//! ```

/// Threshold and tier configuration
pub mod config;
/// Unified error handling
pub mod errors;
/// Scoring pipeline stages
pub mod intelligence;
/// Shared domain types
pub mod models;

pub use config::GlycemicConfig;
pub use errors::{EngineError, EngineResult, ErrorCode};
pub use intelligence::{calculate_glycemic_load, calculate_risk_score, combine_meal};
pub use models::{
    GlycemicLoadResult, NutritionFact, ProfileContext, RiskLevel, RiskScoreResult, SpikeLevel,
};
