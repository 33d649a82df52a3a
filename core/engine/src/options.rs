//! FILENAME: core/engine/src/options.rs
//! PURPOSE: Tunables for an accumulator instance.

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    /// Maximum characters in a typed entry. `None` leaves entry length unbounded.
    pub max_entry_length: Option<usize>,
    /// Entries kept on the history tape. Zero disables the tape.
    pub history_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            max_entry_length: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
