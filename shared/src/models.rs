//! Form input models
//!
//! `RawInput` is exactly what the form hands over: untrusted text. The
//! enumerated fields are mapped onto the enums below with a permissive
//! policy: an unknown token never fails, it falls back to the documented
//! default for that field. Only the numeric fields are validated, see
//! [`crate::validation`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Raw form input
// ============================================================================

/// Untrusted form values as collected by the UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInput {
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub age: String,
    #[serde(deserialize_with = "text_or_number")]
    pub weight: String,
    #[serde(deserialize_with = "text_or_number")]
    pub height: String,
    pub gender: String,
    pub activity: String,
    pub diet_pref: String,
    pub goal: String,
}

/// Accept `"70"`, `70`, or `null` for the numeric-as-text fields
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

// ============================================================================
// Enumerated fields
// ============================================================================

/// Gender as used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    /// Anything other than `male` or `female`
    #[default]
    Unspecified,
}

impl Gender {
    /// Constant term of the Mifflin-St Jeor equation for this gender
    ///
    /// The unspecified offset is the mean of the male and female constants.
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
            Gender::Unspecified => -78.0,
        }
    }
}

impl From<&str> for Gender {
    fn from(token: &str) -> Self {
        match token {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    #[serde(rename = "very")]
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl From<&str> for ActivityLevel {
    fn from(token: &str) -> Self {
        match token {
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Sedentary,
        }
    }
}

/// Dietary preference, drives the macro split and the sample meals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    Vegan,
    Vegetarian,
    /// Also the fallback for unknown tokens
    #[default]
    Balanced,
    Pescatarian,
    LowCarb,
    Keto,
}

impl From<&str> for DietPreference {
    fn from(token: &str) -> Self {
        match token {
            "vegan" => DietPreference::Vegan,
            "vegetarian" => DietPreference::Vegetarian,
            "pescatarian" => DietPreference::Pescatarian,
            "lowcarb" => DietPreference::LowCarb,
            "keto" => DietPreference::Keto,
            _ => DietPreference::Balanced,
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Gain,
    #[default]
    Maintain,
}

impl Goal {
    /// Label shown next to the target calories
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight",
            Goal::Gain => "Gain weight",
            Goal::Maintain => "Maintain / Improve habits",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Goal {
    fn from(token: &str) -> Self {
        match token {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }
}

// ============================================================================
// Validated input
// ============================================================================

/// Input that passed validation
///
/// Only [`crate::validation::validate_input`] builds one, so holding a
/// `ValidatedInput` means age is in 5-120, weight in 20-500 kg and height in
/// 80-250 cm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedInput {
    name: Option<String>,
    age_years: u32,
    weight_kg: f64,
    height_cm: f64,
    gender: Gender,
    activity: ActivityLevel,
    diet: DietPreference,
    goal: Goal,
}

impl ValidatedInput {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: Option<String>,
        age_years: u32,
        weight_kg: f64,
        height_cm: f64,
        gender: Gender,
        activity: ActivityLevel,
        diet: DietPreference,
        goal: Goal,
    ) -> Self {
        Self {
            name,
            age_years,
            weight_kg,
            height_cm,
            gender,
            activity,
            diet,
            goal,
        }
    }

    /// Trimmed name, `None` when the field was blank
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn activity(&self) -> ActivityLevel {
        self.activity
    }

    pub fn diet(&self) -> DietPreference {
        self.diet
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }
}
