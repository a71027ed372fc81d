// ABOUTME: Unit tests for the profile risk adjuster - factor table, thresholds, warnings
// ABOUTME: Covers highest-tier-wins factors, omitted conditions, and profile-conditioned classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoGuide

use glucoguide_engine::config::GlycemicConfig;
use glucoguide_engine::intelligence::{calculate_risk_score, classify_risk_level};
use glucoguide_engine::models::{ActivityLevel, DiabetesType, ProfileContext, RiskLevel};

const EPSILON: f64 = 1e-9;

fn factor_names(result: &glucoguide_engine::models::RiskScoreResult) -> Vec<&str> {
    result
        .modifier_breakdown
        .iter()
        .map(|f| f.factor.as_str())
        .collect()
}

#[test]
fn test_scenario_type2_high_a1c_sedentary() {
    // type2 +0.20, a1c 8.5 -> high_a1c +0.20, sedentary +0.10 => total +0.50
    let config = GlycemicConfig::default();
    let profile = ProfileContext {
        diabetes_type: Some(DiabetesType::Type2),
        a1c: Some(8.5),
        activity_level: Some(ActivityLevel::Sedentary),
        ..ProfileContext::default()
    };

    let result = calculate_risk_score(20.0, &profile, &config);
    assert!((result.profile_modifier_total - 0.50).abs() < EPSILON);
    assert!((result.adjusted_score - 30.0).abs() < EPSILON);
    // Diabetic thresholds: 30 falls in (25, 35] => high
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(
        factor_names(&result),
        vec!["type2_diabetes", "high_a1c", "activity_level"]
    );
}

#[test]
fn test_empty_profile_contributes_nothing() {
    let config = GlycemicConfig::default();
    let result = calculate_risk_score(12.0, &ProfileContext::default(), &config);

    assert!(result.modifier_breakdown.is_empty());
    assert!(result.profile_modifier_total.abs() < EPSILON);
    assert!((result.adjusted_score - 12.0).abs() < EPSILON);
    // General thresholds: 12 falls in (10, 20] => low
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.warnings.is_empty());
}

// ============================================================================
// HIGHEST TIER WINS
// ============================================================================

#[test]
fn test_insulin_resistance_bmi_escalation() {
    let config = GlycemicConfig::default();
    for (bmi, expected) in [
        (None, 0.15),
        (Some(24.0), 0.15),
        (Some(26.0), 0.20),
        (Some(31.0), 0.25),
    ] {
        let profile = ProfileContext {
            has_insulin_resistance: true,
            body_mass_index: bmi,
            ..ProfileContext::default()
        };
        let result = calculate_risk_score(10.0, &profile, &config);
        assert_eq!(factor_names(&result), vec!["insulin_resistance"]);
        assert!(
            (result.modifier_breakdown[0].modifier - expected).abs() < EPSILON,
            "bmi {bmi:?} should contribute {expected}"
        );
    }
}

#[test]
fn test_diabetes_duration_single_tier_no_stacking() {
    let config = GlycemicConfig::default();
    for (years, expected) in [(1.0, None), (3.0, Some(0.05)), (7.0, Some(0.10)), (12.0, Some(0.15))]
    {
        let profile = ProfileContext {
            diabetes_duration_years: Some(years),
            ..ProfileContext::default()
        };
        let result = calculate_risk_score(10.0, &profile, &config);
        match expected {
            None => assert!(result.modifier_breakdown.is_empty()),
            Some(value) => {
                assert_eq!(factor_names(&result), vec!["diabetes_duration"]);
                assert!((result.modifier_breakdown[0].modifier - value).abs() < EPSILON);
            }
        }
    }
}

#[test]
fn test_a1c_tier_names_track_severity() {
    let config = GlycemicConfig::default();
    for (a1c, expected) in [
        (6.0, None),
        (6.8, Some(("borderline_a1c", 0.10))),
        (7.5, Some(("elevated_a1c", 0.15))),
        (9.0, Some(("high_a1c", 0.20))),
    ] {
        let profile = ProfileContext {
            a1c: Some(a1c),
            ..ProfileContext::default()
        };
        let result = calculate_risk_score(10.0, &profile, &config);
        match expected {
            None => assert!(result.modifier_breakdown.is_empty()),
            Some((name, value)) => {
                assert_eq!(factor_names(&result), vec![name]);
                assert!((result.modifier_breakdown[0].modifier - value).abs() < EPSILON);
            }
        }
    }
}

#[test]
fn test_age_tiers() {
    let config = GlycemicConfig::default();
    for (age, expected) in [(40, None), (60, Some(0.05)), (70, Some(0.10))] {
        let profile = ProfileContext {
            age: Some(age),
            ..ProfileContext::default()
        };
        let result = calculate_risk_score(10.0, &profile, &config);
        match expected {
            None => assert!(result.modifier_breakdown.is_empty()),
            Some(value) => {
                assert_eq!(factor_names(&result), vec!["age"]);
                assert!((result.modifier_breakdown[0].modifier - value).abs() < EPSILON);
            }
        }
    }
}

// ============================================================================
// ACTIVITY AND MEDICATIONS
// ============================================================================

#[test]
fn test_light_activity_omitted_from_breakdown() {
    let config = GlycemicConfig::default();
    let profile = ProfileContext {
        activity_level: Some(ActivityLevel::Light),
        ..ProfileContext::default()
    };
    let result = calculate_risk_score(10.0, &profile, &config);
    assert!(result.modifier_breakdown.is_empty());
}

#[test]
fn test_activity_adjustments_can_reduce_risk() {
    let config = GlycemicConfig::default();
    for (level, expected) in [
        (ActivityLevel::Sedentary, 0.10),
        (ActivityLevel::Moderate, -0.05),
        (ActivityLevel::Active, -0.10),
        (ActivityLevel::VeryActive, -0.15),
    ] {
        let profile = ProfileContext {
            activity_level: Some(level),
            ..ProfileContext::default()
        };
        let result = calculate_risk_score(10.0, &profile, &config);
        assert_eq!(factor_names(&result), vec!["activity_level"]);
        assert!((result.modifier_breakdown[0].modifier - expected).abs() < EPSILON);
    }
}

#[test]
fn test_medication_matching_is_case_insensitive_substring() {
    let config = GlycemicConfig::default();
    let profile = ProfileContext {
        medications: Some(vec![
            "Metformin 500mg ER".to_owned(),
            "OZEMPIC 1mg weekly".to_owned(),
        ]),
        ..ProfileContext::default()
    };
    let result = calculate_risk_score(10.0, &profile, &config);
    assert_eq!(factor_names(&result), vec!["metformin", "glp1_agonist"]);
    assert!((result.profile_modifier_total - (-0.25)).abs() < EPSILON);
}

#[test]
fn test_negative_total_reduces_adjusted_score() {
    // very_active -0.15, metformin -0.10, semaglutide -0.15 => total -0.40
    let config = GlycemicConfig::default();
    let profile = ProfileContext {
        activity_level: Some(ActivityLevel::VeryActive),
        medications: Some(vec!["metformin".to_owned(), "semaglutide".to_owned()]),
        ..ProfileContext::default()
    };
    let result = calculate_risk_score(20.0, &profile, &config);
    assert!((result.profile_modifier_total + 0.40).abs() < EPSILON);
    assert!((result.adjusted_score - 12.0).abs() < EPSILON);
}

// ============================================================================
// PROFILE-CONDITIONED CLASSIFICATION
// ============================================================================

#[test]
fn test_diabetic_thresholds_are_tighter() {
    let config = GlycemicConfig::default();
    // Same raw score classifies differently depending on diabetic status
    assert_eq!(
        classify_risk_level(9.0, &config.risk.diabetic_thresholds),
        RiskLevel::Low
    );
    assert_eq!(
        classify_risk_level(9.0, &config.risk.general_thresholds),
        RiskLevel::Minimal
    );
    assert_eq!(
        classify_risk_level(36.0, &config.risk.diabetic_thresholds),
        RiskLevel::VeryHigh
    );
    assert_eq!(
        classify_risk_level(36.0, &config.risk.general_thresholds),
        RiskLevel::High
    );
}

#[test]
fn test_risk_level_boundaries_general() {
    let config = GlycemicConfig::default();
    let thresholds = &config.risk.general_thresholds;
    assert_eq!(classify_risk_level(10.0, thresholds), RiskLevel::Minimal);
    assert_eq!(classify_risk_level(20.0, thresholds), RiskLevel::Low);
    assert_eq!(classify_risk_level(30.0, thresholds), RiskLevel::Moderate);
    assert_eq!(classify_risk_level(40.0, thresholds), RiskLevel::High);
    assert_eq!(classify_risk_level(40.1, thresholds), RiskLevel::VeryHigh);
}

// ============================================================================
// WARNINGS
// ============================================================================

#[test]
fn test_type1_warning_on_moderate_spike() {
    let config = GlycemicConfig::default();
    let profile = ProfileContext {
        diabetes_type: Some(DiabetesType::Type1),
        ..ProfileContext::default()
    };
    // Effective load 15 => moderate spike
    let result = calculate_risk_score(15.0, &profile, &config);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("insulin dosing"));

    // Low spike => no warning
    let quiet = calculate_risk_score(5.0, &profile, &config);
    assert!(quiet.warnings.is_empty());
}

#[test]
fn test_type2_warnings_cooccur_in_rule_order() {
    let config = GlycemicConfig::default();
    let profile = ProfileContext {
        diabetes_type: Some(DiabetesType::Type2),
        a1c: Some(7.5),
        ..ProfileContext::default()
    };
    // Effective load 25 => high spike: portion warning then a1c monitoring warning
    let result = calculate_risk_score(25.0, &profile, &config);
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[0].contains("smaller portion"));
    assert!(result.warnings[1].contains("A1C"));

    // Low spike still carries the a1c monitoring warning
    let low = calculate_risk_score(5.0, &profile, &config);
    assert_eq!(low.warnings.len(), 1);
    assert!(low.warnings[0].contains("A1C"));
}

#[test]
fn test_insulin_resistance_and_prediabetes_warnings() {
    let config = GlycemicConfig::default();
    let profile = ProfileContext {
        has_insulin_resistance: true,
        diabetes_type: Some(DiabetesType::Prediabetes),
        ..ProfileContext::default()
    };
    // High spike triggers both, alternatives first
    let result = calculate_risk_score(25.0, &profile, &config);
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[0].contains("lower-GI alternatives"));
    assert!(result.warnings[1].contains("progression"));

    // Moderate spike: only the prediabetes progression warning fires
    let moderate = calculate_risk_score(15.0, &profile, &config);
    assert_eq!(moderate.warnings.len(), 1);
    assert!(moderate.warnings[0].contains("progression"));
}

#[test]
fn test_personalized_tips_capped_at_four() {
    let config = GlycemicConfig::default();
    // Profile hitting every tip source: activity, diabetes, IR, BMI, medications
    let profile = ProfileContext {
        has_insulin_resistance: true,
        diabetes_type: Some(DiabetesType::Type2),
        body_mass_index: Some(32.0),
        activity_level: Some(ActivityLevel::Sedentary),
        medications: Some(vec!["metformin".to_owned(), "ozempic".to_owned()]),
        ..ProfileContext::default()
    };
    let result = calculate_risk_score(25.0, &profile, &config);
    assert_eq!(result.personalized_tips.len(), 4);
}
