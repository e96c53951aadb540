//! Nutriplan Shared Library
//!
//! The recommendation engine behind the health form: input validation,
//! BMI/BMR/TDEE calculations, macro allocation, meal and tip selection, and
//! the HTML rendering of the resulting payload. Holds no global state.

pub mod errors;
pub mod health_metrics;
pub mod meals;
pub mod models;
pub mod nutrition;
pub mod recommendation;
pub mod render;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use nutrition::{MacroGrams, MacroSplit};
pub use recommendation::{build_recommendation, recommend, ErrorPayload, Outcome, Recommendation};
pub use render::{escape_html, render_outcome};
pub use validation::validate_input;
