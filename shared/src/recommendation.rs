//! Recommendation engine entry point
//!
//! Validates a raw submission, evaluates the metrics and assembles either a
//! full [`Recommendation`] or an [`ErrorPayload`]. Nothing is cached between
//! calls; the caller's RNG is the only input besides the form values.

use crate::errors::ValidationError;
use crate::health_metrics::{
    calculate_bmr_mifflin, calculate_tdee, classify_bmi, goal_calories, rounded_bmi, BmiCategory,
};
use crate::meals::{daily_tips, select_meals, MealPlan};
use crate::models::{Gender, RawInput, ValidatedInput};
use crate::nutrition::{MacroGrams, MacroSplit};
use crate::validation::validate_input;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything shown for a valid submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// One decimal place
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Unrounded kcal/day
    pub bmr: f64,
    pub tdee: i32,
    pub target_calories: i32,
    pub macro_percent: MacroSplit,
    pub macro_grams: MacroGrams,
    pub meals: MealPlan,
    pub tips: Vec<String>,
    pub goal_label: String,
}

/// Ordered validation messages for a rejected submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub errors: Vec<String>,
}

impl From<Vec<ValidationError>> for ErrorPayload {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self {
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Outcome {
    #[serde(rename = "ok")]
    Recommendation(Recommendation),
    #[serde(rename = "invalid")]
    Invalid(ErrorPayload),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Recommendation(_))
    }
}

/// Build the recommendation for an already validated input
pub fn build_recommendation<R: Rng + ?Sized>(
    input: &ValidatedInput,
    rng: &mut R,
) -> Recommendation {
    let bmi = rounded_bmi(input.weight_kg(), input.height_cm());
    let bmr = calculate_bmr_mifflin(
        input.weight_kg(),
        input.height_cm(),
        input.age_years(),
        input.gender(),
    );
    let tdee = calculate_tdee(bmr, input.activity());
    let target_calories = goal_calories(tdee, input.goal());
    let macro_percent = MacroSplit::for_diet(input.diet());

    debug!(
        bmi,
        tdee,
        target_calories,
        diet = ?input.diet(),
        goal = ?input.goal(),
        "Built recommendation"
    );

    Recommendation {
        name: input.name().map(str::to_string),
        age: input.age_years(),
        gender: input.gender(),
        weight_kg: input.weight_kg(),
        height_cm: input.height_cm(),
        bmi,
        bmi_category: classify_bmi(bmi),
        bmr,
        tdee,
        target_calories,
        macro_percent,
        macro_grams: macro_percent.grams_for(target_calories),
        meals: select_meals(input.diet(), rng),
        tips: daily_tips(),
        goal_label: input.goal().label().to_string(),
    }
}

/// Run a raw form submission through validation and the calculators
pub fn recommend<R: Rng + ?Sized>(raw: &RawInput, rng: &mut R) -> Outcome {
    match validate_input(raw) {
        Ok(input) => Outcome::Recommendation(build_recommendation(&input, rng)),
        Err(errors) => {
            debug!(
                error_count = errors.len(),
                fields = ?errors.iter().map(ValidationError::field).collect::<Vec<_>>(),
                "Rejected submission"
            );
            Outcome::Invalid(errors.into())
        }
    }
}
