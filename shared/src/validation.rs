//! Input validation
//!
//! Numeric fields are parsed the way a browser form reads them: leading
//! whitespace is skipped, the longest numeric prefix is taken and anything
//! after it is ignored. Age only keeps the integer part.
//!
//! Validation is not fail-fast. Every bound check runs and failures are
//! reported in field order: age, weight, height.

use crate::errors::ValidationError;
use crate::models::{ActivityLevel, DietPreference, Gender, Goal, RawInput, ValidatedInput};
use std::ops::RangeInclusive;

/// Accepted age in years
pub const AGE_RANGE: RangeInclusive<u32> = 5..=120;

/// Accepted weight in kilograms
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 20.0..=500.0;

/// Accepted height in centimeters
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 80.0..=250.0;

// ============================================================================
// Lenient number parsing
// ============================================================================

/// Length of the `[+-]?digits` run at the start of `s`, 0 if there are no digits
fn integer_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        end + digits
    }
}

/// Parse the leading integer of `s`, ignoring trailing text
///
/// `"30"`, `" 30 years"` and `"30.9"` all give 30.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let len = integer_prefix_len(s);
    if len == 0 {
        return None;
    }
    s[..len].parse().ok()
}

/// Parse the leading decimal number of `s`, ignoring trailing text
///
/// Accepts an optional sign, digits with an optional fraction (`"70"`,
/// `"70.5"`, `".5"`) and an optional exponent.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_len = integer_prefix_len(&s[end + 1..]);
        if exp_len > 0 {
            end += 1 + exp_len;
        }
    }

    s[..end].parse().ok()
}

// ============================================================================
// Field validators
// ============================================================================

/// Validate the age field (whole years, 5-120)
pub fn validate_age(raw: &str) -> Result<u32, ValidationError> {
    parse_leading_int(raw)
        .and_then(|age| u32::try_from(age).ok())
        .filter(|age| AGE_RANGE.contains(age))
        .ok_or(ValidationError::Age)
}

/// Validate the weight field (kg, 20-500)
pub fn validate_weight(raw: &str) -> Result<f64, ValidationError> {
    parse_leading_float(raw)
        .filter(|weight| weight.is_finite() && WEIGHT_RANGE_KG.contains(weight))
        .ok_or(ValidationError::Weight)
}

/// Validate the height field (cm, 80-250)
pub fn validate_height(raw: &str) -> Result<f64, ValidationError> {
    parse_leading_float(raw)
        .filter(|height| height.is_finite() && HEIGHT_RANGE_CM.contains(height))
        .ok_or(ValidationError::Height)
}

/// Validate a whole form submission
///
/// Returns every failed check, ordered age, weight, height. Enumerated
/// fields never fail; unknown tokens map to their defaults.
pub fn validate_input(raw: &RawInput) -> Result<ValidatedInput, Vec<ValidationError>> {
    let age = validate_age(&raw.age);
    let weight = validate_weight(&raw.weight);
    let height = validate_height(&raw.height);

    match (age, weight, height) {
        (Ok(age), Ok(weight), Ok(height)) => {
            let name = raw.name.trim();
            Ok(ValidatedInput::new(
                (!name.is_empty()).then(|| name.to_string()),
                age,
                weight,
                height,
                Gender::from(raw.gender.as_str()),
                ActivityLevel::from(raw.activity.as_str()),
                DietPreference::from(raw.diet_pref.as_str()),
                Goal::from(raw.goal.as_str()),
            ))
        }
        (age, weight, height) => Err([age.err(), weight.err(), height.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn raw(age: &str, weight: &str, height: &str) -> RawInput {
        RawInput {
            age: age.to_string(),
            weight: weight.to_string(),
            height: height.to_string(),
            gender: "male".to_string(),
            activity: "moderate".to_string(),
            diet_pref: "balanced".to_string(),
            goal: "maintain".to_string(),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("30", Some(30))]
    #[case("  42", Some(42))]
    #[case("30.9", Some(30))]
    #[case("30 years", Some(30))]
    #[case("-5", Some(-5))]
    #[case("+7", Some(7))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("-", None)]
    fn test_parse_leading_int(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_leading_int(input), expected);
    }

    #[rstest]
    #[case("70", Some(70.0))]
    #[case("70.5", Some(70.5))]
    #[case("70kg", Some(70.0))]
    #[case(" 175 cm", Some(175.0))]
    #[case(".5", Some(0.5))]
    #[case("5.", Some(5.0))]
    #[case("1e2", Some(100.0))]
    #[case("1e", Some(1.0))]
    #[case("-3.5", Some(-3.5))]
    #[case(".", None)]
    #[case("kg70", None)]
    #[case("", None)]
    fn test_parse_leading_float(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_leading_float(input), expected);
    }

    #[test]
    fn test_validate_age_bounds() {
        assert_eq!(validate_age("5"), Ok(5));
        assert_eq!(validate_age("120"), Ok(120));
        assert_eq!(validate_age("4"), Err(ValidationError::Age));
        assert_eq!(validate_age("121"), Err(ValidationError::Age));
        assert_eq!(validate_age("0"), Err(ValidationError::Age));
        assert_eq!(validate_age("-30"), Err(ValidationError::Age));
        assert_eq!(validate_age("99999999999999999999"), Err(ValidationError::Age));
    }

    #[test]
    fn test_validate_weight_and_height_bounds() {
        assert_eq!(validate_weight("20"), Ok(20.0));
        assert_eq!(validate_weight("500"), Ok(500.0));
        assert_eq!(validate_weight("19.99"), Err(ValidationError::Weight));
        assert_eq!(validate_weight("1e400"), Err(ValidationError::Weight));
        assert_eq!(validate_height("80"), Ok(80.0));
        assert_eq!(validate_height("250"), Ok(250.0));
        assert_eq!(validate_height("250.1"), Err(ValidationError::Height));
        assert_eq!(validate_height("tall"), Err(ValidationError::Height));
    }

    #[test]
    fn test_age_error_alone_in_first_position() {
        let errors = validate_input(&raw("130", "70", "175")).unwrap_err();
        assert_eq!(errors, vec![ValidationError::Age]);
    }

    #[test]
    fn test_weight_error_precedes_height_error() {
        let errors = validate_input(&raw("30", "10", "300")).unwrap_err();
        assert_eq!(errors, vec![ValidationError::Weight, ValidationError::Height]);
    }

    #[test]
    fn test_missing_values_collect_all_errors() {
        let errors = validate_input(&RawInput::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::Age, ValidationError::Weight, ValidationError::Height]
        );
    }

    #[test]
    fn test_valid_input_maps_tokens_permissively() {
        let mut input = raw("30", "70", "175");
        input.name = "  Ada  ".to_string();
        input.gender = "nonbinary".to_string();
        input.activity = "couch".to_string();
        input.diet_pref = "carnivore".to_string();
        input.goal = "bulk".to_string();

        let validated = validate_input(&input).unwrap();
        assert_eq!(validated.name(), Some("Ada"));
        assert_eq!(validated.age_years(), 30);
        assert_eq!(validated.gender(), Gender::Unspecified);
        assert_eq!(validated.activity(), ActivityLevel::Sedentary);
        assert_eq!(validated.diet(), DietPreference::Balanced);
        assert_eq!(validated.goal(), Goal::Maintain);
    }

    #[test]
    fn test_blank_name_is_none() {
        let mut input = raw("30", "70", "175");
        input.name = "   ".to_string();
        assert_eq!(validate_input(&input).unwrap().name(), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_ranges_accepted(
            age in 5u32..=120,
            weight in 20.0f64..=500.0,
            height in 80.0f64..=250.0
        ) {
            let input = raw(&age.to_string(), &weight.to_string(), &height.to_string());
            let validated = validate_input(&input);
            prop_assert!(validated.is_ok(), "{:?}", validated);
        }

        #[test]
        fn prop_age_above_max_rejected(age in 121u32..10_000) {
            prop_assert_eq!(validate_age(&age.to_string()), Err(ValidationError::Age));
        }

        #[test]
        fn prop_weight_below_min_rejected(weight in 0.0f64..20.0) {
            prop_assert_eq!(validate_weight(&weight.to_string()), Err(ValidationError::Weight));
        }

        #[test]
        fn prop_height_above_max_rejected(height in 250.001f64..1000.0) {
            prop_assert_eq!(validate_height(&height.to_string()), Err(ValidationError::Height));
        }

        #[test]
        fn prop_validation_never_panics(age in ".*", weight in ".*", height in ".*") {
            let _ = validate_input(&raw(&age, &weight, &height));
        }
    }
}
