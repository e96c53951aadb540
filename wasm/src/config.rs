//! Adapter configuration
//!
//! Element ids and presentation settings for the form adapter. Every field
//! has a default matching the stock page markup, so `start()` works without
//! any configuration; a JSON object passed from JS overrides individual
//! fields.

use crate::error::AdapterError;
use serde::{Deserialize, Serialize};

/// Form adapter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub form_id: String,
    pub result_id: String,
    /// Optional on the page; reset is simply not wired when absent
    pub reset_id: String,
    pub fields: FieldIds,
    /// Class toggled on the result element to hide it
    pub hidden_class: String,
    /// `EnvFilter` directives for console logging
    pub log_filter: String,
    /// Seed snack selection for reproducible demos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snack_seed: Option<u64>,
}

/// Ids of the form's input fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub activity: String,
    pub diet_pref: String,
    pub goal: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            age: "age".to_string(),
            gender: "gender".to_string(),
            weight: "weight".to_string(),
            height: "height".to_string(),
            activity: "activity".to_string(),
            diet_pref: "dietPref".to_string(),
            goal: "goal".to_string(),
        }
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            form_id: "healthForm".to_string(),
            result_id: "result".to_string(),
            reset_id: "resetBtn".to_string(),
            fields: FieldIds::default(),
            hidden_class: "visually-hidden".to_string(),
            log_filter: "nutriplan_shared=info,nutriplan_wasm=info".to_string(),
            snack_seed: None,
        }
    }
}

impl AdapterConfig {
    /// Load configuration from an optional JSON object
    ///
    /// `None` or a blank string yields the defaults.
    pub fn from_json(json: Option<&str>) -> Result<Self, AdapterError> {
        let config = match json.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => serde_json::from_str(json)
                .map_err(|e| AdapterError::Config(e.to_string()))?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AdapterError> {
        if self.form_id.is_empty() || self.result_id.is_empty() {
            return Err(AdapterError::Config(
                "form_id and result_id must not be empty".to_string(),
            ));
        }
        if self.hidden_class.split_whitespace().count() != 1 {
            return Err(AdapterError::Config(
                "hidden_class must be a single class name".to_string(),
            ));
        }
        Ok(())
    }
}
