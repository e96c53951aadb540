//! Health metrics calculations module
//!
//! BMI, BMR, TDEE and the goal-adjusted calorie target.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Mifflin-St Jeor for resting energy use
//! 3. **Round Late**: BMR stays unrounded; only derived integers are rounded

use crate::models::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};

/// Lowest calorie target a weight-loss plan may suggest
pub const MIN_LOSS_CALORIES: i32 = 1200;

/// Daily deficit applied for weight loss
pub const LOSS_DEFICIT_KCAL: i32 = 500;

/// Daily surplus applied for weight gain
pub const GAIN_SURPLUS_KCAL: i32 = 400;

/// Round to `decimals` places, halves away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to a whole number, halves toward +∞ (`-58.5` becomes `-58`)
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Healthy weight")]
    HealthyWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category (lower bound inclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::HealthyWeight => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::HealthyWeight => "Healthy weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI rounded to one decimal place, the value that gets classified and shown
pub fn rounded_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    round_to(calculate_bmi(weight_kg, height_cm), 1)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::HealthyWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
/// Unspecified: same base, - 78
pub fn calculate_bmr_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + gender.bmr_offset()
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier, rounded to whole kcal (halves up)
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> i32 {
    round_half_up(bmr * activity.multiplier()) as i32
}

/// Adjust TDEE for the user's goal
///
/// Weight loss never drops below [`MIN_LOSS_CALORIES`].
pub fn goal_calories(tdee: i32, goal: Goal) -> i32 {
    match goal {
        Goal::Lose => (tdee - LOSS_DEFICIT_KCAL).max(MIN_LOSS_CALORIES),
        Goal::Gain => tdee + GAIN_SURPLUS_KCAL,
        Goal::Maintain => tdee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 175cm -> BMI ~22.86
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.857).abs() < 0.001);
        assert_eq!(rounded_bmi(70.0, 175.0), 22.9);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(22.25, 1), 22.3);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[rstest]
    #[case(2.5, 3.0)]
    #[case(2.4, 2.0)]
    #[case(-58.5, -58.0)]
    #[case(-58.6, -59.0)]
    #[case(0.0, 0.0)]
    fn test_round_half_up(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round_half_up(value), expected);
    }

    #[rstest]
    #[case(15.0, BmiCategory::Underweight)]
    #[case(18.4, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::HealthyWeight)]
    #[case(24.9, BmiCategory::HealthyWeight)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.9, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(45.0, BmiCategory::Obese)]
    fn test_bmi_categories(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_category_labels_serialize_as_shown() {
        assert_eq!(
            serde_json::to_string(&BmiCategory::HealthyWeight).unwrap(),
            "\"Healthy weight\""
        );
        assert_eq!(BmiCategory::Obese.description(), "Obese");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: rounded BMI is the formula value to one decimal
        #[test]
        fn prop_bmi_matches_formula(weight in 20.0f64..500.0, height in 80.0f64..250.0) {
            let height_m = height / 100.0;
            let expected = ((weight / (height_m * height_m)) * 10.0).round() / 10.0;
            prop_assert_eq!(rounded_bmi(weight, height), expected);
            prop_assert!(rounded_bmi(weight, height) > 0.0);
        }

        /// Property: category ranges agree with classification
        #[test]
        fn prop_category_range_contains_bmi(bmi in 0.0f64..80.0) {
            let (low, high) = classify_bmi(bmi).range();
            prop_assert!(bmi >= low && bmi < high);
        }
    }

    // =========================================================================
    // BMR/TDEE Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin() {
        assert_eq!(calculate_bmr_mifflin(70.0, 175.0, 30, Gender::Male), 1648.75);
        assert_eq!(calculate_bmr_mifflin(70.0, 175.0, 30, Gender::Female), 1482.75);
        assert_eq!(calculate_bmr_mifflin(70.0, 175.0, 30, Gender::Unspecified), 1565.75);
    }

    #[test]
    fn test_tdee_rounds_to_whole_kcal() {
        // 1648.75 × 1.55 = 2555.5625
        assert_eq!(calculate_tdee(1648.75, ActivityLevel::Moderate), 2556);
        assert_eq!(calculate_tdee(1500.0, ActivityLevel::Sedentary), 1800);
    }

    #[test]
    fn test_negative_tdee_rounds_half_up() {
        // 120 y, female, 20.25 kg, 80 cm gives BMR -58.5; -58.5 × 1.2 = -70.2
        let bmr = calculate_bmr_mifflin(20.25, 80.0, 120, Gender::Female);
        assert_eq!(bmr, -58.5);
        assert_eq!(calculate_tdee(bmr, ActivityLevel::Sedentary), -70);
        // -4 × 1.375 = -5.5 exactly
        assert_eq!(calculate_tdee(-4.0, ActivityLevel::Light), -5);
    }

    #[rstest]
    #[case(1000, Goal::Lose, 1200)]
    #[case(1700, Goal::Lose, 1200)]
    #[case(2000, Goal::Lose, 1500)]
    #[case(2000, Goal::Gain, 2400)]
    #[case(2000, Goal::Maintain, 2000)]
    fn test_goal_calories(#[case] tdee: i32, #[case] goal: Goal, #[case] expected: i32) {
        assert_eq!(goal_calories(tdee, goal), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: each gender branch is the exact formula
        #[test]
        fn prop_bmr_gender_offsets(
            weight in 20.0f64..500.0,
            height in 80.0f64..250.0,
            age in 5u32..=120
        ) {
            let base = 10.0 * weight + 6.25 * height - 5.0 * age as f64;
            let bmr = |gender| calculate_bmr_mifflin(weight, height, age, gender);
            prop_assert_eq!(bmr(Gender::Male), base + 5.0);
            prop_assert_eq!(bmr(Gender::Female), base - 161.0);
            prop_assert_eq!(bmr(Gender::Unspecified), base - 78.0);
        }

        /// Property: weight loss target never drops below the floor
        #[test]
        fn prop_loss_floor(tdee in -1000i32..6000) {
            let target = goal_calories(tdee, Goal::Lose);
            prop_assert!(target >= MIN_LOSS_CALORIES);
            prop_assert_eq!(target, (tdee - 500).max(1200));
        }
    }
}
