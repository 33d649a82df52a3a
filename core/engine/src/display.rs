//! FILENAME: core/engine/src/display.rs
//! PURPOSE: The value held by the calculator display.
//! CONTEXT: The display is either a numeric literal being typed or shown as a
//! result, or an error sentinel. Keeping the two apart as variants means the
//! engine never has to string-compare against sentinel text to know it is in
//! an error state.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::number_format::parse_display;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayValue {
    /// A numeric literal, possibly with a trailing decimal point ("12.").
    Entry(String),
    Error(EngineError),
}

impl DisplayValue {
    pub fn zero() -> Self {
        DisplayValue::Entry("0".to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayValue::Error(_))
    }

    /// The exact text shown to the user.
    pub fn text(&self) -> String {
        match self {
            DisplayValue::Entry(s) => s.clone(),
            DisplayValue::Error(e) => e.to_string(),
        }
    }

    /// Numeric value of the display. Sentinels parse as `EngineError::Generic`.
    pub fn number(&self) -> Result<f64, EngineError> {
        match self {
            DisplayValue::Entry(s) => parse_display(s),
            DisplayValue::Error(_) => Err(EngineError::Generic),
        }
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Result<String, EngineError>> for DisplayValue {
    fn from(result: Result<String, EngineError>) -> Self {
        match result {
            Ok(text) => DisplayValue::Entry(text),
            Err(e) => DisplayValue::Error(e),
        }
    }
}
