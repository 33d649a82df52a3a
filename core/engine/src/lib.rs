//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports the accumulator and its value types for use by hosts.
//!
//! PIPELINE: Keypress --> KeypadCommand --> Accumulator --> display text / Readout
//!
//! SUPPORTED FEATURES:
//! - Digit and decimal entry with leading-zero replacement
//! - Binary operators +, -, *, / chained left to right (no precedence)
//! - Square root, percent, reciprocal
//! - Memory register (MC, MR, MS, M+, M-)
//! - Bounded history tape and clipboard paste

pub mod accumulator;
pub mod command;
pub mod display;
pub mod error;
pub mod history;
pub mod number_format;
pub mod operator;
pub mod options;


// Re-export commonly used types at the crate root
pub use accumulator::{Accumulator, Readout};
pub use command::KeypadCommand;
pub use display::DisplayValue;
pub use error::EngineError;
pub use history::{History, HistoryEntry, DEFAULT_HISTORY_LIMIT};
pub use number_format::{format_display, parse_display, sanitize_pasted};
pub use operator::Operator;
pub use options::EngineOptions;
