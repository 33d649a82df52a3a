//! FILENAME: core/engine/src/error.rs
//! PURPOSE: Error taxonomy of the accumulator engine.
//! CONTEXT: These errors never leave the engine as `Err` values from the
//! keypad operations. They are rendered as sentinel display text instead,
//! so the `Display` impl below is the exact text shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    #[error("cannot divide by zero")]
    DivideByZero,

    /// Square root of a negative number.
    #[error("invalid input")]
    InvalidInput,

    /// Catch-all for parse failures and non-finite results.
    #[error("error")]
    Generic,
}

impl EngineError {
    /// Maps a sentinel text back to its error, if the text is one.
    pub fn from_sentinel(text: &str) -> Option<EngineError> {
        match text {
            "cannot divide by zero" => Some(EngineError::DivideByZero),
            "invalid input" => Some(EngineError::InvalidInput),
            "error" => Some(EngineError::Generic),
            _ => None,
        }
    }
}
