//! FILENAME: core/engine/src/command.rs
//! PURPOSE: One variant per calculator button.
//! CONTEXT: Hosts translate key presses or button clicks into a `KeypadCommand`
//! and hand it to `Accumulator::apply`, so the mapping from input device to
//! engine operation lives in one place outside the engine.

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum KeypadCommand {
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    ClearAll,
    ClearEntry,
    Backspace,
    Negate,
    Sqrt,
    Percent,
    Reciprocal,
    MemoryClear,
    MemoryRecall,
    MemoryStore,
    MemoryAdd,
    MemorySubtract,
}

impl std::fmt::Display for KeypadCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeypadCommand::Digit(d) => write!(f, "{}", d),
            KeypadCommand::DecimalPoint => write!(f, "."),
            KeypadCommand::Operator(op) => write!(f, "{}", op),
            KeypadCommand::Equals => write!(f, "="),
            KeypadCommand::ClearAll => write!(f, "C"),
            KeypadCommand::ClearEntry => write!(f, "CE"),
            KeypadCommand::Backspace => write!(f, "BACK"),
            KeypadCommand::Negate => write!(f, "+/-"),
            KeypadCommand::Sqrt => write!(f, "sqrt"),
            KeypadCommand::Percent => write!(f, "%"),
            KeypadCommand::Reciprocal => write!(f, "1/x"),
            KeypadCommand::MemoryClear => write!(f, "MC"),
            KeypadCommand::MemoryRecall => write!(f, "MR"),
            KeypadCommand::MemoryStore => write!(f, "MS"),
            KeypadCommand::MemoryAdd => write!(f, "M+"),
            KeypadCommand::MemorySubtract => write!(f, "M-"),
        }
    }
}
