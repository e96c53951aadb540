//! Error types for the recommendation engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed bound check on one of the numeric form fields
///
/// The `Display` text is the user-facing message shown in the results panel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationError {
    #[error("Please enter a valid age (5–120).")]
    Age,

    #[error("Please enter a valid weight (kg).")]
    Weight,

    #[error("Please enter a valid height (cm).")]
    Height,
}

impl ValidationError {
    /// Form field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Age => "age",
            ValidationError::Weight => "weight",
            ValidationError::Height => "height",
        }
    }
}
