//! FILENAME: app/host/src/api_types.rs
// PURPOSE: Shared type definitions for host command results.
// CONTEXT: All structs use camelCase serialization so a JavaScript or
// console front end reads the same shapes.

use calendar::{DateInfo, WeekRow};
use engine::Readout;
use serde::{Deserialize, Serialize};

/// A freshly opened calculator session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub session_id: String,
    pub readout: Readout,
}

/// Result of a raw key press. `handled` is false for keys with no mapping,
/// in which case the readout is unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPressResult {
    pub handled: bool,
    pub readout: Readout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteResult {
    pub accepted: bool,
    pub readout: Readout,
}

/// Grid coordinates of a day cell. Column 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

/// Everything the calendar panel draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// `YYYY-MM`
    pub title: String,
    pub rows: Vec<WeekRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<CellPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<CellPosition>,
    /// Info panel text source: the selected date, else today.
    pub info: DateInfo,
}
