//! FILENAME: core/calendar/src/iso_week.rs
//! PURPOSE: ISO-8601 week numbering.
//! CONTEXT: Weeks run Monday to Sunday and week 1 is the week holding the
//! year's first Thursday. Around New Year the ISO year can differ from the
//! calendar year: 2021-01-01 is in week 53 of 2020.

use chrono::Datelike;

use crate::date::CalendarDate;

/// ISO week number, 1..=53.
pub fn iso_week(date: CalendarDate) -> u32 {
    date.naive().iso_week().week()
}

/// ISO (week-year, week) pair.
pub fn iso_year_week(date: CalendarDate) -> (i32, u32) {
    let week = date.naive().iso_week();
    (week.year(), week.week())
}
