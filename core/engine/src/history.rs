//! FILENAME: core/engine/src/history.rs
//! PURPOSE: Bounded tape of completed calculations.
//! CONTEXT: Each result-producing keypad action appends one entry. The tape
//! is shown in the history sidebar and is independent of the accumulator
//! state, so clearing the calculator does not clear it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of entries kept on the tape.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// One line of the tape, e.g. expression "2 + 3" with result "5".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub expression: String,
    /// Display text produced by the action (may be a sentinel).
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        HistoryEntry {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

#[derive(Debug, Clone)]
pub struct History {
    /// Oldest at front, newest at back
    entries: VecDeque<HistoryEntry>,
    max_size: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// A limit of zero disables recording.
    pub fn with_max_size(max_size: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(max_size.min(DEFAULT_HISTORY_LIMIT)),
            max_size,
        }
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        if self.max_size == 0 {
            return;
        }
        while self.entries.len() >= self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
