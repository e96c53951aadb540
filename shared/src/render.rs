//! HTML rendering for the results panel
//!
//! Produces the markup the form's result element is filled with. Every piece
//! of free text goes through [`escape_html`] before it is embedded.

use crate::health_metrics::round_half_up;
use crate::recommendation::{ErrorPayload, Outcome, Recommendation};

/// Escape `&`, `<` and `>` for embedding in element content
///
/// Ampersands are replaced first so entities produced for `<` and `>` are
/// not escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn list_items<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

/// Markup for a rejected submission
pub fn render_errors(payload: &ErrorPayload) -> String {
    format!(
        "<div class=\"card small error\"><strong>Please fix these:</strong><ul>{}</ul></div>",
        list_items(payload.errors.iter().map(String::as_str))
    )
}

/// Markup for a full recommendation
pub fn render_recommendation(rec: &Recommendation) -> String {
    let greeting = rec.name.as_deref().map(escape_html);
    let (carb_pct, protein_pct, fat_pct) = rec.macro_percent.percentages();
    let grams = &rec.macro_grams;
    let meals = &rec.meals;

    format!(
        r#"<div class="result-inner">
  <h3>Hi {name}, here are your personalised recommendations</h3>
  <section class="results-summary card small">
    <ul>
      <li><strong>BMI:</strong> {bmi} ({category})</li>
      <li><strong>BMR:</strong> {bmr} kcal/day</li>
      <li><strong>Estimated daily needs (TDEE):</strong> {tdee} kcal/day</li>
      <li><strong>Target calories ({goal}):</strong> {target} kcal/day</li>
    </ul>
  </section>
  <section class="macros card small">
    <h4>Macro target</h4>
    <p>{carb_pct}% carbs • {protein_pct}% protein • {fat_pct}% fat</p>
    <p><strong>Goal grams / day:</strong>
      {carb_g}g carbs • {protein_g}g protein • {fat_g}g fat</p>
  </section>
  <section class="meal-suggestions card small">
    <h4>Sample meals</h4>
    <ul>
      <li><strong>Breakfast:</strong> {breakfast}</li>
      <li><strong>Lunch:</strong> {lunch}</li>
      <li><strong>Dinner:</strong> {dinner}</li>
      <li><strong>Snack:</strong> {snack}</li>
    </ul>
  </section>
  <section class="tips card small">
    <h4>Daily habit tips</h4>
    <ul>{tips}</ul>
  </section>
</div>"#,
        name = greeting.as_deref().unwrap_or("there"),
        bmi = rec.bmi,
        category = rec.bmi_category.description(),
        bmr = round_half_up(rec.bmr) as i64,
        tdee = rec.tdee,
        goal = escape_html(&rec.goal_label),
        target = rec.target_calories,
        carb_g = grams.carb,
        protein_g = grams.protein,
        fat_g = grams.fat,
        breakfast = escape_html(&meals.breakfast),
        lunch = escape_html(&meals.lunch),
        dinner = escape_html(&meals.dinner),
        snack = escape_html(&meals.snack),
        tips = list_items(rec.tips.iter().map(String::as_str)),
    )
}

/// Markup for either kind of outcome
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Recommendation(rec) => render_recommendation(rec),
        Outcome::Invalid(payload) => render_errors(payload),
    }
}
