//! FILENAME: core/calendar/src/month_grid.rs
//! PURPOSE: Month view layout: Sunday-first week rows with ISO week numbers.
//! CONTEXT: Rows are laid out Sunday to Saturday for display, but the week
//! number shown beside each row is ISO-8601 (Monday-start), taken from the
//! row's first real day. A Sunday-led row therefore carries the number of the
//! ISO week that Sunday closes.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::iso_week::iso_week;
use crate::shift::{roll_months, MAX_MONTH_SHIFT};

pub const DAYS_PER_WEEK: usize = 7;

// ============================================================================
// YEAR/MONTH CURSOR
// ============================================================================

/// The month a calendar view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        CalendarDate::new(year, month, 1)?;
        Ok(YearMonth { year, month })
    }

    pub fn of(date: CalendarDate) -> Self {
        YearMonth { year: date.year(), month: date.month() }
    }

    pub fn first_day(self) -> Result<CalendarDate, CalendarError> {
        CalendarDate::new(self.year, self.month, 1)
    }

    pub fn next(self) -> Result<Self, CalendarError> {
        self.shifted(1)
    }

    pub fn prev(self) -> Result<Self, CalendarError> {
        self.shifted(-1)
    }

    /// The month `months` steps away (negative goes back).
    pub fn shifted(self, months: i64) -> Result<Self, CalendarError> {
        if months.unsigned_abs() > MAX_MONTH_SHIFT {
            return Err(CalendarError::OutOfRange);
        }
        let (year, month, _) = roll_months(self.year as i64, self.month, 1, months);
        let year = i32::try_from(year).map_err(|_| CalendarError::OutOfRange)?;
        YearMonth::new(year, month).map_err(|_| CalendarError::OutOfRange)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// ============================================================================
// GRID
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRow {
    pub iso_week: u32,
    /// Column 0 is Sunday. `None` pads slots outside the month.
    pub days: [Option<u32>; DAYS_PER_WEEK],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// The date under a cell, or None for padding and out-of-bounds cells.
    pub fn date_at(&self, row: usize, col: usize) -> Option<CalendarDate> {
        let day = (*self.rows.get(row)?.days.get(col)?)?;
        CalendarDate::new(self.year, self.month, day).ok()
    }

    /// Grid row and column holding `date`, if it falls in this month.
    pub fn position_of(&self, date: CalendarDate) -> Option<(usize, usize)> {
        if date.year() != self.year || date.month() != self.month {
            return None;
        }
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.days
                .iter()
                .position(|d| *d == Some(date.day()))
                .map(|c| (r, c))
        })
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth { year: self.year, month: self.month }
    }
}

/// Lay out `month` of `year` as Sunday-first week rows.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a month outside 1..=12, or
/// [`CalendarError::InvalidDate`] if the year is outside chrono's range.
pub fn build_month_grid(year: i32, month: u32) -> Result<MonthGrid, CalendarError> {
    let first = CalendarDate::new(year, month, 1)?;
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut rows: Vec<WeekRow> = Vec::with_capacity(6);
    let days = first.naive().iter_days().take_while(|d| d.month() == month);

    for (offset, naive) in days.enumerate() {
        let slot = lead + offset;
        let (row, col) = (slot / DAYS_PER_WEEK, slot % DAYS_PER_WEEK);

        if row == rows.len() {
            rows.push(WeekRow {
                iso_week: iso_week(CalendarDate::from(naive)),
                days: [None; DAYS_PER_WEEK],
            });
        }
        rows[row].days[col] = Some(naive.day());
    }

    log::debug!("built grid for {:04}-{:02}: {} rows", year, month, rows.len());

    Ok(MonthGrid { year, month, rows })
}
