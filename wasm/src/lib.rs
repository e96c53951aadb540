//! Nutriplan WASM Module
//!
//! This crate provides WebAssembly bindings for the recommendation engine:
//! a form adapter that wires the health form to the engine, and stateless
//! JSON helpers for pages that drive the engine themselves.

mod adapter;
pub mod config;
pub mod error;
pub mod logging;

pub use adapter::{FormAdapter, HealthFormApp};
pub use config::AdapterConfig;
pub use error::AdapterError;

use nutriplan_shared::{recommend, render_outcome, Gender, RawInput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

/// Mount the health form adapter
///
/// `config_json` optionally overrides element ids and logging, see
/// [`AdapterConfig`].
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<HealthFormApp, JsError> {
    let config = AdapterConfig::from_json(config_json.as_deref())?;
    logging::init_tracing(&config.log_filter)?;
    Ok(HealthFormApp::mount(&config)?)
}

/// Evaluate a JSON form submission, returning the outcome as JSON
#[wasm_bindgen]
pub fn recommend_json(input_json: &str) -> Result<String, JsError> {
    Ok(recommend_from_json(input_json, &mut rand::thread_rng())?)
}

/// Same as [`recommend_json`] with a reproducible snack choice
#[wasm_bindgen]
pub fn recommend_json_seeded(input_json: &str, seed: u64) -> Result<String, JsError> {
    Ok(recommend_from_json(input_json, &mut ChaCha8Rng::seed_from_u64(seed))?)
}

/// Evaluate a JSON form submission, returning the results panel markup
#[wasm_bindgen]
pub fn render_json(input_json: &str) -> Result<String, JsError> {
    Ok(render_from_json(input_json, &mut rand::thread_rng())?)
}

/// Escape text for embedding in markup
#[wasm_bindgen]
pub fn escape_html(text: &str) -> String {
    nutriplan_shared::escape_html(text)
}

/// Calculate BMI from weight (kg) and height (cm), one decimal place
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    nutriplan_shared::rounded_bmi(weight_kg, height_cm)
}

/// Calculate TDEE (Total Daily Energy Expenditure) in whole kcal
/// Uses Mifflin-St Jeor equation; tokens fall back like the form does
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: &str,
    activity: &str,
) -> i32 {
    let bmr = nutriplan_shared::calculate_bmr_mifflin(
        weight_kg,
        height_cm,
        age_years,
        Gender::from(gender),
    );
    nutriplan_shared::calculate_tdee(bmr, activity.into())
}

/// Parse a submission, run the engine and serialize the outcome
pub fn recommend_from_json<R: Rng + ?Sized>(
    input_json: &str,
    rng: &mut R,
) -> Result<String, AdapterError> {
    let raw: RawInput = serde_json::from_str(input_json)?;
    Ok(serde_json::to_string(&recommend(&raw, rng))?)
}

/// Parse a submission, run the engine and render the outcome
pub fn render_from_json<R: Rng + ?Sized>(
    input_json: &str,
    rng: &mut R,
) -> Result<String, AdapterError> {
    let raw: RawInput = serde_json::from_str(input_json)?;
    Ok(render_outcome(&recommend(&raw, rng)))
}
