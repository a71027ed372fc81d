// ABOUTME: Advisory generator - recommendations, personalized tips, narrative explanation
// ABOUTME: Deterministic text generation driven purely by classified levels and macro gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

//! # Advisory Generator
//!
//! Turns classified results into ordered, human-readable guidance. Everything
//! here is deterministic: the same levels and macros always produce the same
//! strings in the same order, so the output is safely cacheable and testable.
//! No function in this module computes anything - values are rendered strictly
//! from already-computed fields.

use crate::config::GlycemicConfig;
use crate::models::{
    ActivityLevel, DiabetesType, GlycemicLoadResult, ProfileContext, ScaledMacros, SpikeLevel,
};

/// Macro-gap thresholds driving the suggestion lines (grams)
const PROTEIN_GAP_HIGH_SPIKE: f64 = 10.0;
const PROTEIN_GAP_MODERATE_SPIKE: f64 = 15.0;
const FIBER_GAP: f64 = 5.0;
const FAT_GAP: f64 = 5.0;
const PROTEIN_PRAISE: f64 = 15.0;
const FIBER_PRAISE: f64 = 5.0;

/// Maximum number of personalized tips returned
const MAX_TIPS: usize = 4;

/// Generate ordered recommendations for a classified spike level
///
/// Branches on the spike level and emits macro-gap-driven suggestions. Wording
/// softens to "significant"/"notable" for diabetic profiles (the absolute
/// "high"/"moderate" scale reads differently when every meal is a dosing
/// decision), and the generic post-meal-walk tip is suppressed for them - the
/// risk adjuster supplies profile-specific tips instead.
#[must_use]
pub fn generate_recommendations(
    spike_level: SpikeLevel,
    macros: &ScaledMacros,
    profile: Option<&ProfileContext>,
) -> Vec<String> {
    let diabetic = profile.is_some_and(ProfileContext::is_diabetic);
    let mut recommendations = Vec::new();

    match spike_level {
        SpikeLevel::High => {
            let adjective = if diabetic { "significant" } else { "high" };
            recommendations.push(format!(
                "This food has a {adjective} insulin spike potential."
            ));
            if macros.protein_g < PROTEIN_GAP_HIGH_SPIKE {
                recommendations.push(
                    "Add a protein source (chicken, fish, eggs, tofu) to slow digestion."
                        .to_owned(),
                );
            }
            if macros.fiber_g < FIBER_GAP {
                recommendations.push(
                    "Pair with fiber-rich vegetables or a salad to reduce the spike.".to_owned(),
                );
            }
            if macros.fat_g < FAT_GAP {
                recommendations
                    .push("Adding healthy fats (avocado, olive oil, nuts) can help.".to_owned());
            }
            recommendations.push("Consider reducing the portion size by 25-50%.".to_owned());
            if !diabetic {
                recommendations.push(
                    "A 15-minute walk after eating can help manage blood sugar.".to_owned(),
                );
            }
        }
        SpikeLevel::Moderate => {
            let adjective = if diabetic { "notable" } else { "moderate" };
            recommendations.push(format!(
                "This food has a {adjective} insulin spike potential."
            ));
            if macros.protein_g < PROTEIN_GAP_MODERATE_SPIKE {
                recommendations
                    .push("Adding more protein would help reduce the spike.".to_owned());
            }
            if macros.fiber_g < FIBER_GAP {
                recommendations.push("Adding fiber-rich foods would be beneficial.".to_owned());
            }
            recommendations
                .push("Safe to eat in moderation as part of a balanced meal.".to_owned());
        }
        SpikeLevel::Low => {
            recommendations.push("This food has a low insulin spike potential.".to_owned());
            recommendations.push("Safe to eat freely as part of your healthy diet.".to_owned());
            if macros.protein_g > PROTEIN_PRAISE {
                recommendations
                    .push("Great protein content helps maintain stable blood sugar.".to_owned());
            }
            if macros.fiber_g > FIBER_PRAISE {
                recommendations
                    .push("Excellent fiber content for digestive health.".to_owned());
            }
        }
    }

    recommendations
}

/// Generate profile-tailored tips, capped at 4
///
/// Evaluated in fixed order - activity, diabetes type, insulin resistance, BMI,
/// medications - then truncated, so the most behavior-changing tips survive the
/// cap.
#[must_use]
pub fn generate_personalized_tips(
    profile: &ProfileContext,
    spike_level: SpikeLevel,
    config: &GlycemicConfig,
) -> Vec<String> {
    let mut tips = Vec::new();

    if let Some(level) = profile.activity_level {
        match level {
            ActivityLevel::Sedentary => {
                if spike_level.is_elevated() {
                    tips.push(
                        "A 10-15 minute walk after higher-impact meals like this one will \
                         noticeably blunt the glucose rise."
                            .to_owned(),
                    );
                } else {
                    tips.push(
                        "Adding light movement after meals is the easiest first step toward \
                         better insulin sensitivity."
                            .to_owned(),
                    );
                }
            }
            ActivityLevel::Light => {
                tips.push(
                    "Building toward 30 minutes of daily activity would further improve your \
                     insulin sensitivity."
                        .to_owned(),
                );
            }
            ActivityLevel::Moderate => {
                tips.push(
                    "Your regular activity is already improving how your body handles \
                     carbohydrates - keep it up."
                        .to_owned(),
                );
            }
            ActivityLevel::Active | ActivityLevel::VeryActive => {
                tips.push(
                    "Your high activity level gives you extra flexibility with \
                     carbohydrate-rich meals, especially around training."
                        .to_owned(),
                );
            }
        }
    }

    match profile.diabetes_type {
        Some(DiabetesType::Type1) => {
            tips.push(
                "Check your glucose before and two hours after this meal to fine-tune your \
                 insulin-to-carb ratio."
                    .to_owned(),
            );
        }
        Some(DiabetesType::Type2) => {
            tips.push(
                "Pairing carbohydrates with protein and fiber consistently blunts post-meal \
                 glucose rises."
                    .to_owned(),
            );
        }
        Some(DiabetesType::Prediabetes) => {
            tips.push(
                "Choosing lower-GI alternatives now is one of the most effective ways to \
                 prevent progression."
                    .to_owned(),
            );
        }
        Some(DiabetesType::None) | None => {}
    }

    if profile.has_insulin_resistance {
        tips.push(
            "With insulin resistance, spreading carbohydrates across the day works better \
             than one large serving."
                .to_owned(),
        );
    }

    if let Some(bmi) = profile.body_mass_index {
        // Same BMI cut-offs the risk adjuster escalates on
        let tiers = &config.risk.insulin_resistance_bmi_tiers;
        let obese = tiers.last().map(|t| t.limit);
        let overweight = tiers.first().map(|t| t.limit);
        if obese.is_some_and(|limit| bmi > limit) {
            tips.push(
                "Even modest weight loss significantly improves insulin sensitivity.".to_owned(),
            );
        } else if overweight.is_some_and(|limit| bmi > limit) {
            tips.push(
                "Keeping portions moderate supports both weight and glucose goals.".to_owned(),
            );
        }
    }

    if let Some(medications) = &profile.medications {
        let lowered: Vec<String> = medications.iter().map(|m| m.to_lowercase()).collect();
        let matches = |keywords: &[String]| {
            lowered
                .iter()
                .any(|name| keywords.iter().any(|k| name.contains(&k.to_lowercase())))
        };
        if matches(&config.risk.metformin_keywords) {
            tips.push(
                "Metformin works best alongside consistent meal timing and portion sizes."
                    .to_owned(),
            );
        }
        if matches(&config.risk.glp1_keywords) {
            tips.push(
                "GLP-1 medications slow stomach emptying, so eat slowly and expect fullness \
                 earlier."
                    .to_owned(),
            );
        }
    }

    tips.truncate(MAX_TIPS);
    tips
}

/// Render the deterministic multi-section narrative for a result
///
/// Sections: nutritional breakdown, glycemic load with modifier percentages,
/// and - when a risk score is attached - the personalized risk section with the
/// factor breakdown and warnings. Performs no computation of its own.
#[must_use]
pub fn generate_explanation(result: &GlycemicLoadResult) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Analysis for {}", result.food_name));
    lines.push(String::new());

    lines.push("Nutritional breakdown (per serving):".to_owned());
    lines.push(format!("- Carbohydrates: {:.1}g", result.carbs_g));
    lines.push(format!(
        "- Fiber: {:.1}g (net carbs: {:.1}g)",
        result.fiber_g, result.net_carbs_g
    ));
    lines.push(format!("- Protein: {:.1}g", result.protein_g));
    lines.push(format!("- Fat: {:.1}g", result.fat_g));
    lines.push(format!("- Glycemic index: {:.0}", result.glycemic_index));
    lines.push(String::new());

    lines.push("Glycemic load:".to_owned());
    lines.push(format!(
        "- Base GL: {:.1} ({} spike)",
        result.base_load,
        result.spike_level_before_modifiers.as_str().to_uppercase()
    ));

    if result.combined_modifier > 0.0 {
        if result.fiber_modifier > 0.0 {
            lines.push(format!(
                "- Fiber: -{:.0}% (fiber slows digestion)",
                result.fiber_modifier * 100.0
            ));
        }
        if result.protein_modifier > 0.0 {
            lines.push(format!(
                "- Protein: -{:.0}% (protein slows gastric emptying)",
                result.protein_modifier * 100.0
            ));
        }
        if result.fat_modifier > 0.0 {
            lines.push(format!(
                "- Fat: -{:.0}% (fat delays absorption)",
                result.fat_modifier * 100.0
            ));
        }
        lines.push(format!(
            "- Effective GL: {:.1} ({} spike)",
            result.effective_load,
            result.spike_level.as_str().to_uppercase()
        ));
        if result.spike_level != result.spike_level_before_modifiers {
            lines.push(format!(
                "- The protein, fat, and fiber in this meal reduced the spike from {} to {}.",
                result.spike_level_before_modifiers.as_str().to_uppercase(),
                result.spike_level.as_str().to_uppercase()
            ));
        }
    } else {
        lines.push(format!(
            "- Effective GL: {:.1} (no significant modifiers)",
            result.effective_load
        ));
    }

    if let Some(risk) = &result.risk_score {
        lines.push(String::new());
        lines.push("Personalized risk:".to_owned());
        lines.push(format!(
            "- Adjusted score: {:.1} ({} risk)",
            risk.adjusted_score,
            risk.risk_level.as_str().to_uppercase()
        ));
        lines.push(format!(
            "- Profile adjustment: {:+.0}%",
            risk.profile_modifier_total * 100.0
        ));
        for factor in &risk.modifier_breakdown {
            lines.push(format!(
                "  - {}: {:+.0}%",
                factor.factor,
                factor.modifier * 100.0
            ));
        }
        for warning in &risk.warnings {
            lines.push(format!("- Warning: {warning}"));
        }
    }

    lines.join("\n")
}
