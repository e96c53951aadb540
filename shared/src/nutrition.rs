//! Macro-nutrient allocation
//!
//! Splits a calorie target into carbohydrate, protein and fat grams using a
//! fixed split per diet preference.

use crate::health_metrics::round_half_up;
use crate::models::DietPreference;
use serde::{Deserialize, Serialize};

/// Energy density of carbohydrate and protein
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy density of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Share of daily calories per macro, the three fractions sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Daily gram targets per macro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub carb: i32,
    pub protein: i32,
    pub fat: i32,
}

impl MacroSplit {
    const fn new(carb: f64, protein: f64, fat: f64) -> Self {
        Self { carb, protein, fat }
    }

    /// Split used for a diet preference
    pub fn for_diet(diet: DietPreference) -> Self {
        match diet {
            DietPreference::Vegan | DietPreference::Vegetarian | DietPreference::Balanced => {
                Self::new(0.50, 0.20, 0.30)
            }
            DietPreference::Pescatarian => Self::new(0.45, 0.25, 0.30),
            DietPreference::LowCarb => Self::new(0.30, 0.35, 0.35),
            DietPreference::Keto => Self::new(0.05, 0.25, 0.70),
        }
    }

    /// Convert a calorie target into grams
    ///
    /// Each macro is rounded on its own (halves up), so the grams may not add
    /// back up to exactly `calories`.
    pub fn grams_for(&self, calories: i32) -> MacroGrams {
        let calories = f64::from(calories);
        MacroGrams {
            carb: round_half_up(calories * self.carb / KCAL_PER_GRAM_CARB) as i32,
            protein: round_half_up(calories * self.protein / KCAL_PER_GRAM_PROTEIN) as i32,
            fat: round_half_up(calories * self.fat / KCAL_PER_GRAM_FAT) as i32,
        }
    }

    /// Whole-number percentages for display, in carb/protein/fat order
    pub fn percentages(&self) -> (i32, i32, i32) {
        (
            round_half_up(self.carb * 100.0) as i32,
            round_half_up(self.protein * 100.0) as i32,
            round_half_up(self.fat * 100.0) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    const ALL_DIETS: [DietPreference; 6] = [
        DietPreference::Vegan,
        DietPreference::Vegetarian,
        DietPreference::Balanced,
        DietPreference::Pescatarian,
        DietPreference::LowCarb,
        DietPreference::Keto,
    ];

    #[test]
    fn test_splits_sum_to_one() {
        for diet in ALL_DIETS {
            let split = MacroSplit::for_diet(diet);
            let total = split.carb + split.protein + split.fat;
            assert!((total - 1.0).abs() < 1e-9, "{:?} sums to {}", diet, total);
        }
    }

    #[rstest]
    #[case(DietPreference::Vegan, (50, 20, 30))]
    #[case(DietPreference::Pescatarian, (45, 25, 30))]
    #[case(DietPreference::LowCarb, (30, 35, 35))]
    #[case(DietPreference::Keto, (5, 25, 70))]
    fn test_split_table(#[case] diet: DietPreference, #[case] expected: (i32, i32, i32)) {
        assert_eq!(MacroSplit::for_diet(diet).percentages(), expected);
    }

    #[test]
    fn test_grams_for_balanced() {
        let grams = MacroSplit::for_diet(DietPreference::Balanced).grams_for(2556);
        // 1278/4 = 319.5 rounds up, 511.2/4 = 127.8, 766.8/9 = 85.2
        assert_eq!(grams, MacroGrams { carb: 320, protein: 128, fat: 85 });
    }

    #[test]
    fn test_grams_for_keto() {
        let grams = MacroSplit::for_diet(DietPreference::Keto).grams_for(2000);
        assert_eq!(grams, MacroGrams { carb: 25, protein: 125, fat: 156 });
    }

    #[test]
    fn test_negative_grams_round_half_up() {
        // -70 × 0.5 / 4 = -8.75, -70 × 0.2 / 4 = -3.5, -70 × 0.3 / 9 = -2.33
        let grams = MacroSplit::for_diet(DietPreference::Balanced).grams_for(-70);
        assert_eq!(grams, MacroGrams { carb: -9, protein: -3, fat: -2 });
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: grams are the per-macro rounded energy share
        #[test]
        fn prop_grams_match_formula(calories in 1200i32..6000, idx in 0usize..6) {
            let split = MacroSplit::for_diet(ALL_DIETS[idx]);
            let grams = split.grams_for(calories);
            let kcal = calories as f64;
            prop_assert_eq!(grams.carb, round_half_up(kcal * split.carb / 4.0) as i32);
            prop_assert_eq!(grams.protein, round_half_up(kcal * split.protein / 4.0) as i32);
            prop_assert_eq!(grams.fat, round_half_up(kcal * split.fat / 9.0) as i32);
        }
    }
}
