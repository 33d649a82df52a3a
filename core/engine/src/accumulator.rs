//! FILENAME: core/engine/src/accumulator.rs
//! PURPOSE: Digit, operator and memory state machine behind the calculator display.
//! CONTEXT: One `Accumulator` is owned by one calculator session. Binary
//! operators chain strictly left to right with no precedence: pressing a second
//! operator resolves the pending one first, so 2 + 3 * 4 gives 20.
//!
//! No operation returns an error. Failures become sentinel text on the display
//! (see `EngineError`) and the next digit or operator starts a fresh entry.

use serde::{Deserialize, Serialize};

use crate::command::KeypadCommand;
use crate::display::DisplayValue;
use crate::error::EngineError;
use crate::history::{History, HistoryEntry};
use crate::number_format::{format_display, parse_display, sanitize_pasted};
use crate::operator::Operator;
use crate::options::EngineOptions;

/// Snapshot of what the presentation layer needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readout {
    pub display: String,
    /// Drives the "M" indicator lamp.
    pub has_memory: bool,
    pub pending_operator: Option<Operator>,
    pub is_error: bool,
}

#[derive(Debug, Clone)]
pub struct Accumulator {
    display: DisplayValue,
    /// Left-hand operand staged by the last operator press.
    previous_value: Option<f64>,
    pending_operator: Option<Operator>,
    /// Set after an operator or a result; the next digit starts a new number.
    awaiting_new_operand: bool,
    /// Survives clear and clear-entry.
    memory: f64,
    history: History,
    options: EngineOptions,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Accumulator {
            display: DisplayValue::zero(),
            previous_value: None,
            pending_operator: None,
            awaiting_new_operand: false,
            memory: 0.0,
            history: History::with_max_size(options.history_limit),
            options,
        }
    }

    // ========================================================================
    // ENTRY
    // ========================================================================

    /// Type a digit '0'..='9'. Any other character is ignored.
    pub fn digit(&mut self, d: char) -> String {
        if !d.is_ascii_digit() {
            log::warn!("ignoring non-digit keypad input {:?}", d);
            return self.display_text();
        }

        if self.awaiting_new_operand || self.display.is_error() {
            self.display = DisplayValue::Entry(d.to_string());
            self.awaiting_new_operand = false;
            return self.display_text();
        }

        let max_len = self.options.max_entry_length;
        if let DisplayValue::Entry(text) = &mut self.display {
            if *text == "0" {
                *text = d.to_string();
            } else if max_len.map_or(true, |max| text.len() < max) {
                text.push(d);
            }
        }
        self.display_text()
    }

    /// Type a decimal point. A second point in the same entry is a no-op.
    pub fn decimal_point(&mut self) -> String {
        if self.awaiting_new_operand || self.display.is_error() {
            self.display = DisplayValue::Entry("0.".to_string());
            self.awaiting_new_operand = false;
            return self.display_text();
        }

        let max_len = self.options.max_entry_length;
        if let DisplayValue::Entry(text) = &mut self.display {
            if !text.contains('.') && max_len.map_or(true, |max| text.len() < max) {
                text.push('.');
            }
        }
        self.display_text()
    }

    // ========================================================================
    // OPERATORS
    // ========================================================================

    /// Stage `op` with the current display as its left operand.
    ///
    /// If an operator is already pending and a new operand has been typed, the
    /// pending operation is computed first. If that computation fails, the
    /// sentinel stays on screen and `op` is not staged.
    pub fn set_operator(&mut self, op: Operator) -> String {
        if self.display.is_error() {
            // Start over from a clean entry; the failed chain is abandoned.
            self.display = DisplayValue::zero();
            self.previous_value = None;
            self.pending_operator = None;
        } else if self.pending_operator.is_some() && !self.awaiting_new_operand {
            self.compute();
            if self.display.is_error() {
                return self.display_text();
            }
        }

        match self.display.number() {
            Ok(value) => {
                log::debug!("staging {} {}", value, op);
                self.previous_value = Some(value);
                self.pending_operator = Some(op);
                self.awaiting_new_operand = true;
                self.display_text()
            }
            Err(e) => self.fail(e),
        }
    }

    /// Apply the pending operator to the staged operand and the display.
    ///
    /// Division by zero shows the sentinel but leaves the staged operand and
    /// operator as they were, so a later operator press reuses them.
    pub fn compute(&mut self) -> String {
        let (op, left) = match (self.pending_operator, self.previous_value) {
            (Some(op), Some(left)) => (op, left),
            _ => return self.display_text(),
        };

        let right = match self.display.number() {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };

        let expression = format!("{} {} {}", operand_text(left), op, operand_text(right));

        match op.apply(left, right).and_then(|result| format_display(result).map(|text| (result, text))) {
            Ok((result, text)) => {
                log::debug!("computed {} = {}", expression, text);
                self.display = DisplayValue::Entry(text);
                self.previous_value = Some(result);
                self.awaiting_new_operand = true;
            }
            Err(e) => {
                log::debug!("compute failed: {} ({})", expression, e);
                self.display = DisplayValue::Error(e);
                self.awaiting_new_operand = true;
            }
        }

        self.record(expression);
        self.display_text()
    }

    // ========================================================================
    // CLEARING & EDITING
    // ========================================================================

    /// Reset display and operator chain. Memory and history are kept.
    pub fn clear_all(&mut self) -> String {
        self.display = DisplayValue::zero();
        self.previous_value = None;
        self.pending_operator = None;
        self.awaiting_new_operand = false;
        self.display_text()
    }

    pub fn clear_entry(&mut self) -> String {
        self.display = DisplayValue::zero();
        self.display_text()
    }

    pub fn backspace(&mut self) -> String {
        if self.display.is_error() {
            self.display = DisplayValue::zero();
        } else if let DisplayValue::Entry(text) = &mut self.display {
            text.pop();
            if text.is_empty() || *text == "-" {
                *text = "0".to_string();
            }
        }
        self.display_text()
    }

    /// Toggle the sign of the display. "0" and sentinels are left alone.
    pub fn negate(&mut self) -> String {
        if let DisplayValue::Entry(text) = &mut self.display {
            if let Some(stripped) = text.strip_prefix('-') {
                *text = stripped.to_string();
            } else if *text != "0" {
                text.insert(0, '-');
            }
        }
        self.display_text()
    }

    // ========================================================================
    // UNARY FUNCTIONS
    // ========================================================================

    pub fn sqrt(&mut self) -> String {
        let value = match self.display.number() {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };

        self.display = if value < 0.0 {
            DisplayValue::Error(EngineError::InvalidInput)
        } else {
            format_display(value.sqrt()).into()
        };
        self.awaiting_new_operand = true;
        self.record(format!("sqrt({})", operand_text(value)));
        self.display_text()
    }

    pub fn percent(&mut self) -> String {
        let value = match self.display.number() {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };

        self.display = format_display(value / 100.0).into();
        self.awaiting_new_operand = true;
        self.record(format!("{}%", operand_text(value)));
        self.display_text()
    }

    pub fn reciprocal(&mut self) -> String {
        let value = match self.display.number() {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };

        self.display = if value == 0.0 {
            DisplayValue::Error(EngineError::DivideByZero)
        } else {
            format_display(1.0 / value).into()
        };
        self.awaiting_new_operand = true;
        self.record(format!("1/({})", operand_text(value)));
        self.display_text()
    }

    // ========================================================================
    // MEMORY
    // ========================================================================

    pub fn memory_clear(&mut self) -> String {
        self.memory = 0.0;
        self.display_text()
    }

    pub fn memory_recall(&mut self) -> String {
        self.display = format_display(self.memory).into();
        self.awaiting_new_operand = true;
        self.display_text()
    }

    /// Store the display in memory. No-op while a sentinel is shown.
    pub fn memory_store(&mut self) -> String {
        self.update_memory(|_, value| value)
    }

    pub fn memory_add(&mut self) -> String {
        self.update_memory(|memory, value| memory + value)
    }

    pub fn memory_subtract(&mut self) -> String {
        self.update_memory(|memory, value| memory - value)
    }

    fn update_memory(&mut self, combine: impl FnOnce(f64, f64) -> f64) -> String {
        if let Ok(value) = self.display.number() {
            self.memory = combine(self.memory, value);
            self.awaiting_new_operand = true;
        }
        self.display_text()
    }

    // ========================================================================
    // CLIPBOARD
    // ========================================================================

    /// Replace the display with a pasted number.
    /// Returns `None` and leaves the state untouched if nothing numeric was pasted.
    pub fn paste(&mut self, text: &str) -> Option<String> {
        let cleaned = sanitize_pasted(text);
        let formatted = parse_display(&cleaned).and_then(format_display).ok()?;

        self.display = DisplayValue::Entry(formatted);
        self.awaiting_new_operand = false;
        self.history.record(HistoryEntry::new("paste", self.display_text()));
        Some(self.display_text())
    }

    pub fn copy_text(&self) -> String {
        self.display_text()
    }

    // ========================================================================
    // DISPATCH & ACCESSORS
    // ========================================================================

    pub fn apply(&mut self, command: KeypadCommand) -> String {
        match command {
            KeypadCommand::Digit(d) => self.digit(d),
            KeypadCommand::DecimalPoint => self.decimal_point(),
            KeypadCommand::Operator(op) => self.set_operator(op),
            KeypadCommand::Equals => self.compute(),
            KeypadCommand::ClearAll => self.clear_all(),
            KeypadCommand::ClearEntry => self.clear_entry(),
            KeypadCommand::Backspace => self.backspace(),
            KeypadCommand::Negate => self.negate(),
            KeypadCommand::Sqrt => self.sqrt(),
            KeypadCommand::Percent => self.percent(),
            KeypadCommand::Reciprocal => self.reciprocal(),
            KeypadCommand::MemoryClear => self.memory_clear(),
            KeypadCommand::MemoryRecall => self.memory_recall(),
            KeypadCommand::MemoryStore => self.memory_store(),
            KeypadCommand::MemoryAdd => self.memory_add(),
            KeypadCommand::MemorySubtract => self.memory_subtract(),
        }
    }

    pub fn display_text(&self) -> String {
        self.display.text()
    }

    pub fn display(&self) -> &DisplayValue {
        &self.display
    }

    pub fn has_memory(&self) -> bool {
        self.memory != 0.0
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_history(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn readout(&self) -> Readout {
        Readout {
            display: self.display_text(),
            has_memory: self.has_memory(),
            pending_operator: self.pending_operator,
            is_error: self.display.is_error(),
        }
    }

    fn fail(&mut self, error: EngineError) -> String {
        self.display = DisplayValue::Error(error);
        self.awaiting_new_operand = true;
        self.display_text()
    }

    fn record(&mut self, expression: String) {
        let result = self.display_text();
        self.history.record(HistoryEntry::new(expression, result));
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Operands on the tape use the display formatting; they are always finite here.
fn operand_text(value: f64) -> String {
    format_display(value).unwrap_or_else(|e| e.to_string())
}
