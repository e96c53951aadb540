//! Sample meals and daily habit tips
//!
//! Meal text is picked per diet preference from small lookup tables; every
//! table has a default entry used when it has nothing specific for the diet.
//! The snack is the one random element and takes its randomness from the
//! caller so results stay reproducible under a seeded RNG.

use crate::models::DietPreference;
use rand::Rng;
use serde::{Deserialize, Serialize};

const DEFAULT_BREAKFAST: &str =
    "Oat porridge with fruit, nuts and a spoon of yogurt or plant-based alternative";
const VEGETARIAN_BREAKFAST: &str = "Greek yogurt, berries, granola, and a drizzle of honey";
const VEGAN_BREAKFAST: &str = "Overnight oats with almond milk, chia seeds and banana";

const DEFAULT_LUNCH: &str =
    "Grain bowl with mixed greens, protein (chicken/legumes/fish), veggies and a light dressing";
const LOWCARB_LUNCH: &str = "Large salad with salmon/eggs, avocado and olive oil dressing";
const KETO_LUNCH: &str = "Grilled salmon or chicken, sautéed greens and generous avocado/olive oil";

const DEFAULT_DINNER: &str =
    "Lean protein, roasted vegetables and a portion of whole grains (quinoa/brown rice)";
const VEGAN_DINNER: &str = "Lentil curry with mixed vegetables and a side of brown rice";
const VEGETARIAN_DINNER: &str =
    "Paneer/tofu stir fry with vegetables and a small portion of whole grain";

/// Snacks, one is picked uniformly at random per recommendation
pub const SNACKS: [&str; 3] = [
    "Handful of nuts and a piece of fruit",
    "Hummus with carrot/cucumber sticks",
    "Cottage cheese or a small protein smoothie",
];

/// Habit tips, the same for everyone and always in this order
pub const DAILY_TIPS: [&str; 5] = [
    "Prioritise whole foods: vegetables, fruits, whole grains, legumes, nuts, seeds, lean proteins.",
    "Hydrate regularly — aim for several glasses of water spread across the day.",
    "Include a protein source at each meal to support satiety and muscle maintenance.",
    "Aim for consistent sleep (7–9 hours) and regular physical activity.",
    "If you have specific medical conditions, consult a registered dietitian or doctor for tailored advice.",
];

/// One day of sample meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

pub fn breakfast_for(diet: DietPreference) -> &'static str {
    match diet {
        DietPreference::Vegetarian => VEGETARIAN_BREAKFAST,
        DietPreference::Vegan => VEGAN_BREAKFAST,
        _ => DEFAULT_BREAKFAST,
    }
}

pub fn lunch_for(diet: DietPreference) -> &'static str {
    match diet {
        DietPreference::LowCarb => LOWCARB_LUNCH,
        DietPreference::Keto => KETO_LUNCH,
        _ => DEFAULT_LUNCH,
    }
}

pub fn dinner_for(diet: DietPreference) -> &'static str {
    match diet {
        DietPreference::Vegan => VEGAN_DINNER,
        DietPreference::Vegetarian => VEGETARIAN_DINNER,
        _ => DEFAULT_DINNER,
    }
}

/// Pick a snack using the supplied RNG
pub fn pick_snack<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SNACKS[rng.gen_range(0..SNACKS.len())]
}

/// Assemble the sample meals for a diet preference
pub fn select_meals<R: Rng + ?Sized>(diet: DietPreference, rng: &mut R) -> MealPlan {
    MealPlan {
        breakfast: breakfast_for(diet).to_string(),
        lunch: lunch_for(diet).to_string(),
        dinner: dinner_for(diet).to_string(),
        snack: pick_snack(rng).to_string(),
    }
}

/// The habit tips as owned strings
pub fn daily_tips() -> Vec<String> {
    DAILY_TIPS.iter().map(|tip| tip.to_string()).collect()
}
