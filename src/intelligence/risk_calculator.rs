// ABOUTME: Profile risk adjuster - named modifier factors, adjusted score, 5-tier risk level
// ABOUTME: Condition-keyed warnings generated in fixed rule-evaluation order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

//! # Profile Risk Adjuster
//!
//! Takes the effective glycemic load and a health profile and produces a
//! personalized risk score. Each profile factor contributes an independent
//! signed modifier; the applicable modifiers sum (absent conditions are omitted
//! from the breakdown, not recorded as zero) and the load scales by
//! `1 + total`. Escalating factors (BMI, diabetes duration, A1C, age) use a
//! single ordered tier scan where the highest satisfied tier wins - tiers never
//! stack within one factor.
//!
//! Classification thresholds are profile-conditioned: diabetic profiles use
//! tighter cut-offs because the same absolute load carries more risk for them.

use crate::config::{GlycemicConfig, RiskThresholds, Tier};
use crate::intelligence::{advisory, load_calculator};
use crate::models::{
    DiabetesType, ProfileContext, RiskFactor, RiskLevel, RiskScoreResult, SpikeLevel,
};
use tracing::debug;

/// Breakdown keys for the three A1C tiers, in table order
const A1C_FACTOR_KEYS: [&str; 3] = ["borderline_a1c", "elevated_a1c", "high_a1c"];

/// Classify an adjusted score on the 5-tier risk scale
#[must_use]
pub fn classify_risk_level(adjusted_score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if adjusted_score <= thresholds.minimal_max {
        RiskLevel::Minimal
    } else if adjusted_score <= thresholds.low_max {
        RiskLevel::Low
    } else if adjusted_score <= thresholds.moderate_max {
        RiskLevel::Moderate
    } else if adjusted_score <= thresholds.high_max {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}

/// Calculate the personalized risk score for an effective glycemic load
///
/// Factors are evaluated in the fixed order of the published table: insulin
/// resistance, diabetes type, diabetes duration, A1C, activity level, age,
/// then medications. The breakdown preserves that order.
#[must_use]
pub fn calculate_risk_score(
    effective_load: f64,
    profile: &ProfileContext,
    config: &GlycemicConfig,
) -> RiskScoreResult {
    let risk = &config.risk;
    let mut breakdown: Vec<RiskFactor> = Vec::new();

    if profile.has_insulin_resistance {
        // BMI escalates the base modifier; the highest satisfied tier replaces it
        let mut modifier = risk.insulin_resistance_base;
        if let Some(bmi) = profile.body_mass_index {
            if let Some(escalated) = highest_tier(bmi, &risk.insulin_resistance_bmi_tiers) {
                modifier = escalated;
            }
        }
        push_factor(&mut breakdown, "insulin_resistance", modifier);
    }

    match profile.diabetes_type {
        Some(DiabetesType::Type2) => {
            push_factor(&mut breakdown, "type2_diabetes", risk.type2_diabetes);
        }
        Some(DiabetesType::Type1) => {
            push_factor(&mut breakdown, "type1_diabetes", risk.type1_diabetes);
        }
        Some(DiabetesType::Prediabetes) => {
            push_factor(&mut breakdown, "prediabetes", risk.prediabetes);
        }
        Some(DiabetesType::None) | None => {}
    }

    if let Some(years) = profile.diabetes_duration_years {
        if let Some(modifier) = highest_tier(years, &risk.duration_tiers) {
            push_factor(&mut breakdown, "diabetes_duration", modifier);
        }
    }

    if let Some(a1c) = profile.a1c {
        if let Some(index) = highest_tier_index(a1c, &risk.a1c_tiers) {
            push_factor(
                &mut breakdown,
                A1C_FACTOR_KEYS[index],
                risk.a1c_tiers[index].value,
            );
        }
    }

    if let Some(level) = profile.activity_level {
        let adjustment = risk.activity.for_level(level);
        // A zero adjustment (light activity) is omitted, not recorded as 0
        if adjustment != 0.0 {
            push_factor(&mut breakdown, "activity_level", adjustment);
        }
    }

    if let Some(age) = profile.age {
        if let Some(modifier) = highest_tier(f64::from(age), &risk.age_tiers) {
            push_factor(&mut breakdown, "age", modifier);
        }
    }

    if medication_matches(profile, &risk.metformin_keywords) {
        push_factor(&mut breakdown, "metformin", risk.metformin_adjustment);
    }
    if medication_matches(profile, &risk.glp1_keywords) {
        push_factor(&mut breakdown, "glp1_agonist", risk.glp1_adjustment);
    }

    let profile_modifier_total: f64 = breakdown.iter().map(|f| f.modifier).sum();
    let adjusted_score = effective_load * (1.0 + profile_modifier_total);

    let thresholds = if profile.is_diabetic() {
        &risk.diabetic_thresholds
    } else {
        &risk.general_thresholds
    };
    let risk_level = classify_risk_level(adjusted_score, thresholds);

    let spike_level = load_calculator::classify_spike_level(effective_load, &config.spike);
    let warnings = generate_warnings(profile, spike_level, config);
    let personalized_tips = advisory::generate_personalized_tips(profile, spike_level, config);

    debug!(
        effective_load,
        adjusted_score,
        total = profile_modifier_total,
        factors = breakdown.len(),
        risk = risk_level.as_str(),
        "calculated risk score"
    );

    RiskScoreResult {
        base_load: effective_load,
        adjusted_score,
        risk_level,
        profile_modifier_total,
        modifier_breakdown: breakdown,
        warnings,
        personalized_tips,
    }
}

/// Condition-keyed warnings, in rule-evaluation order
fn generate_warnings(
    profile: &ProfileContext,
    spike_level: SpikeLevel,
    config: &GlycemicConfig,
) -> Vec<String> {
    let mut warnings = Vec::new();
    // The "elevated" A1C tier boundary doubles as the monitoring-warning cutoff
    let elevated_a1c = config.risk.a1c_tiers.get(1).map(|tier| tier.limit);

    if profile.diabetes_type == Some(DiabetesType::Type1) && spike_level.is_elevated() {
        warnings.push(
            "This meal may need careful insulin dosing - discuss bolus adjustments for meals \
             like this with your care team."
                .to_owned(),
        );
    }

    if profile.diabetes_type == Some(DiabetesType::Type2) {
        if spike_level == SpikeLevel::High {
            warnings.push(
                "High spike potential for type 2 diabetes - consider a smaller portion or \
                 pairing with protein and fiber."
                    .to_owned(),
            );
        }
        if profile.a1c.zip(elevated_a1c).is_some_and(|(a1c, cutoff)| a1c > cutoff) {
            warnings.push(
                "With an A1C above 7%, monitor your glucose response to higher-impact meals \
                 closely."
                    .to_owned(),
            );
        }
    }

    if profile.has_insulin_resistance && spike_level == SpikeLevel::High {
        warnings.push(
            "High glycemic impact - consider lower-GI alternatives to support insulin \
             sensitivity."
                .to_owned(),
        );
    }

    if profile.diabetes_type == Some(DiabetesType::Prediabetes) && spike_level.is_elevated() {
        warnings.push(
            "Limiting meals like this helps prevent progression from prediabetes to type 2 \
             diabetes."
                .to_owned(),
        );
    }

    warnings
}

fn push_factor(breakdown: &mut Vec<RiskFactor>, factor: &str, modifier: f64) {
    breakdown.push(RiskFactor {
        factor: factor.to_owned(),
        modifier,
    });
}

/// Last tier whose limit the value exceeds, or `None` when below all tiers
fn highest_tier(value: f64, tiers: &[Tier]) -> Option<f64> {
    highest_tier_index(value, tiers).map(|i| tiers[i].value)
}

fn highest_tier_index(value: f64, tiers: &[Tier]) -> Option<usize> {
    let mut hit = None;
    for (index, tier) in tiers.iter().enumerate() {
        if value > tier.limit {
            hit = Some(index);
        }
    }
    hit
}

fn medication_matches(profile: &ProfileContext, keywords: &[String]) -> bool {
    profile.medications.as_ref().is_some_and(|medications| {
        medications.iter().any(|name| {
            let lowered = name.to_lowercase();
            keywords
                .iter()
                .any(|keyword| lowered.contains(&keyword.to_lowercase()))
        })
    })
}
