// ABOUTME: Type-safe configuration for glycemic load and risk scoring thresholds
// ABOUTME: All modifier tiers and classification cut-offs live here, declarative and testable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

//! # Engine Configuration
//!
//! Every threshold the calculators use is carried in [`GlycemicConfig`] rather
//! than hard-coded at the use site. Tiered lookups are expressed as ordered
//! `(limit, value)` arrays scanned in order, so a threshold change is a data
//! change, not a control-flow change, and each table is unit-testable in
//! isolation. [`GlycemicConfig::default`] carries the published constants.

use crate::errors::{EngineError, EngineResult};
use crate::models::ActivityLevel;
use serde::{Deserialize, Serialize};

/// One step of a tiered threshold lookup
///
/// For attenuation tables (fiber/protein/fat) `limit` is an upper bound and the
/// first matching tier wins. For escalation tables (duration, A1C, age, BMI)
/// `limit` is a lower bound and the last satisfied tier wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Tier {
    /// Threshold this tier applies up to (or from, for escalation tables)
    pub limit: f64,
    /// Modifier fraction the tier maps to
    pub value: f64,
}

impl Tier {
    /// Construct a tier
    #[must_use]
    pub const fn new(limit: f64, value: f64) -> Self {
        Self { limit, value }
    }
}

/// Macro attenuation tables for the glycemic load engine
///
/// Fiber uses inclusive upper bounds (exactly 5g of fiber lands in the 10%
/// tier); protein and fat use exclusive upper bounds (exactly 5g of protein
/// lands in the 10% tier from the other side). Values beyond the last tier get
/// the corresponding `*_max_reduction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MacroModifierConfig {
    /// Fiber tiers, grams → reduction, inclusive upper bounds
    pub fiber_tiers: Vec<Tier>,
    /// Reduction above the last fiber tier
    pub fiber_max_reduction: f64,
    /// Protein tiers, grams → reduction, exclusive upper bounds
    pub protein_tiers: Vec<Tier>,
    /// Reduction at or above the last protein tier
    pub protein_max_reduction: f64,
    /// Fat tiers, grams → reduction, exclusive upper bounds
    pub fat_tiers: Vec<Tier>,
    /// Reduction at or above the last fat tier
    pub fat_max_reduction: f64,
}

impl Default for MacroModifierConfig {
    fn default() -> Self {
        Self {
            fiber_tiers: vec![
                Tier::new(2.0, 0.0),
                Tier::new(5.0, 0.10),
                Tier::new(10.0, 0.15),
            ],
            fiber_max_reduction: 0.20,
            protein_tiers: vec![
                Tier::new(5.0, 0.0),
                Tier::new(15.0, 0.10),
                Tier::new(25.0, 0.15),
            ],
            protein_max_reduction: 0.20,
            fat_tiers: vec![Tier::new(5.0, 0.0), Tier::new(15.0, 0.10)],
            fat_max_reduction: 0.15,
        }
    }
}

/// Spike classification cut-offs, shared by base and effective load
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpikeThresholdConfig {
    /// Loads at or below this classify as low
    pub low_max: f64,
    /// Loads at or below this (and above `low_max`) classify as moderate
    pub moderate_max: f64,
}

impl Default for SpikeThresholdConfig {
    fn default() -> Self {
        Self {
            low_max: 10.0,
            moderate_max: 19.0,
        }
    }
}

/// 5-tier risk classification cut-offs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskThresholds {
    /// Adjusted scores at or below this classify as minimal
    pub minimal_max: f64,
    /// Upper bound for low
    pub low_max: f64,
    /// Upper bound for moderate
    pub moderate_max: f64,
    /// Upper bound for high; anything above is very high
    pub high_max: f64,
}

impl RiskThresholds {
    const fn diabetic_default() -> Self {
        Self {
            minimal_max: 8.0,
            low_max: 15.0,
            moderate_max: 25.0,
            high_max: 35.0,
        }
    }

    const fn general_default() -> Self {
        Self {
            minimal_max: 10.0,
            low_max: 20.0,
            moderate_max: 30.0,
            high_max: 40.0,
        }
    }
}

/// Signed adjustments per self-reported activity level
///
/// A level whose adjustment is exactly zero is omitted from the modifier
/// breakdown (the published table marks `light` as "0, omitted").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActivityAdjustments {
    /// Little or no exercise
    pub sedentary: f64,
    /// Light exercise 1-3 days/week
    pub light: f64,
    /// Moderate exercise 3-5 days/week
    pub moderate: f64,
    /// Active 6-7 days/week
    pub active: f64,
    /// Very active, hard daily training
    pub very_active: f64,
}

impl ActivityAdjustments {
    /// Adjustment for the given activity level
    #[must_use]
    pub const fn for_level(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

impl Default for ActivityAdjustments {
    fn default() -> Self {
        Self {
            sedentary: 0.10,
            light: 0.0,
            moderate: -0.05,
            active: -0.10,
            very_active: -0.15,
        }
    }
}

/// Profile risk adjustment factors and classification thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskAdjustmentConfig {
    /// Insulin resistance base modifier (no BMI data, or BMI below all tiers)
    pub insulin_resistance_base: f64,
    /// BMI escalation tiers for insulin resistance; highest satisfied tier
    /// replaces the base modifier
    pub insulin_resistance_bmi_tiers: Vec<Tier>,
    /// Type 1 diabetes modifier
    pub type1_diabetes: f64,
    /// Type 2 diabetes modifier
    pub type2_diabetes: f64,
    /// Prediabetes modifier
    pub prediabetes: f64,
    /// Diabetes duration escalation tiers (years, exclusive lower bounds)
    pub duration_tiers: Vec<Tier>,
    /// A1C escalation tiers (percent, exclusive lower bounds), ordered
    /// borderline → elevated → high
    pub a1c_tiers: Vec<Tier>,
    /// Activity level adjustments
    pub activity: ActivityAdjustments,
    /// Age escalation tiers (years, exclusive lower bounds)
    pub age_tiers: Vec<Tier>,
    /// Adjustment when a metformin keyword matches a medication name
    pub metformin_adjustment: f64,
    /// Case-insensitive substrings that identify metformin
    pub metformin_keywords: Vec<String>,
    /// Adjustment when a GLP-1 agonist keyword matches a medication name
    pub glp1_adjustment: f64,
    /// Case-insensitive substrings that identify GLP-1 agonists
    pub glp1_keywords: Vec<String>,
    /// Classification thresholds for diabetic profiles
    pub diabetic_thresholds: RiskThresholds,
    /// Classification thresholds for everyone else
    pub general_thresholds: RiskThresholds,
}

impl Default for RiskAdjustmentConfig {
    fn default() -> Self {
        Self {
            insulin_resistance_base: 0.15,
            insulin_resistance_bmi_tiers: vec![Tier::new(25.0, 0.20), Tier::new(30.0, 0.25)],
            type1_diabetes: 0.10,
            type2_diabetes: 0.20,
            prediabetes: 0.15,
            duration_tiers: vec![
                Tier::new(2.0, 0.05),
                Tier::new(5.0, 0.10),
                Tier::new(10.0, 0.15),
            ],
            a1c_tiers: vec![
                Tier::new(6.5, 0.10),
                Tier::new(7.0, 0.15),
                Tier::new(8.0, 0.20),
            ],
            activity: ActivityAdjustments::default(),
            age_tiers: vec![Tier::new(55.0, 0.05), Tier::new(65.0, 0.10)],
            metformin_adjustment: -0.10,
            metformin_keywords: vec!["metformin".to_owned()],
            glp1_adjustment: -0.15,
            glp1_keywords: vec![
                "ozempic".to_owned(),
                "semaglutide".to_owned(),
                "wegovy".to_owned(),
            ],
            diabetic_thresholds: RiskThresholds::diabetic_default(),
            general_thresholds: RiskThresholds::general_default(),
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlycemicConfig {
    /// Macro attenuation tables
    pub modifiers: MacroModifierConfig,
    /// Spike classification cut-offs
    pub spike: SpikeThresholdConfig,
    /// Profile risk adjustment
    pub risk: RiskAdjustmentConfig,
}

impl GlycemicConfig {
    /// Validate internal consistency of all tier tables and thresholds
    ///
    /// # Errors
    /// Returns `CONFIG_INVALID` when a tier table is not sorted ascending by
    /// limit, an attenuation value falls outside [0, 1), or classification
    /// cut-offs are not strictly increasing.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, tiers) in [
            ("fiber", &self.modifiers.fiber_tiers),
            ("protein", &self.modifiers.protein_tiers),
            ("fat", &self.modifiers.fat_tiers),
        ] {
            validate_sorted(name, tiers)?;
            for tier in tiers {
                if !(0.0..1.0).contains(&tier.value) {
                    return Err(EngineError::config_invalid(format!(
                        "{name} tier reduction {} outside [0, 1)",
                        tier.value
                    )));
                }
            }
        }
        for (name, max) in [
            ("fiber", self.modifiers.fiber_max_reduction),
            ("protein", self.modifiers.protein_max_reduction),
            ("fat", self.modifiers.fat_max_reduction),
        ] {
            if !(0.0..1.0).contains(&max) {
                return Err(EngineError::config_invalid(format!(
                    "{name} max reduction {max} outside [0, 1)"
                )));
            }
        }

        if self.spike.low_max >= self.spike.moderate_max {
            return Err(EngineError::config_invalid(
                "Spike thresholds must be strictly increasing",
            ));
        }

        for (name, tiers) in [
            ("insulin resistance BMI", &self.risk.insulin_resistance_bmi_tiers),
            ("diabetes duration", &self.risk.duration_tiers),
            ("A1C", &self.risk.a1c_tiers),
            ("age", &self.risk.age_tiers),
        ] {
            validate_sorted(name, tiers)?;
        }
        if self.risk.a1c_tiers.len() != 3 {
            return Err(EngineError::config_invalid(
                "A1C table must carry exactly the borderline/elevated/high tiers",
            ));
        }

        for (name, thresholds) in [
            ("diabetic", self.risk.diabetic_thresholds),
            ("general", self.risk.general_thresholds),
        ] {
            let ordered = thresholds.minimal_max < thresholds.low_max
                && thresholds.low_max < thresholds.moderate_max
                && thresholds.moderate_max < thresholds.high_max;
            if !ordered {
                return Err(EngineError::config_invalid(format!(
                    "{name} risk thresholds must be strictly increasing"
                )));
            }
        }

        Ok(())
    }
}

fn validate_sorted(name: &str, tiers: &[Tier]) -> EngineResult<()> {
    let sorted = tiers.windows(2).all(|w| w[0].limit < w[1].limit);
    if sorted {
        Ok(())
    } else {
        Err(EngineError::config_invalid(format!(
            "{name} tiers must be sorted ascending by limit"
        )))
    }
}
