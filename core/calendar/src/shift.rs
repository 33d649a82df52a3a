//! FILENAME: core/calendar/src/shift.rs
//! PURPOSE: Moving a date by days, weeks, months or years.
//! CONTEXT: Days and weeks are fixed-length steps. Months and years are
//! calendar steps that clamp to the last valid day of the target month
//! (Jan 31 + 1 month = Feb 28/29, Feb 29 + 1 year = Feb 28). `roll_months`
//! is the one place that rule lives; month navigation and interval
//! decomposition both go through it.

use std::str::FromStr;

use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::date::{month_length, CalendarDate};
use crate::error::CalendarError;

/// Upper bound on a month shift; far beyond chrono's representable years.
pub(crate) const MAX_MONTH_SHIFT: u64 = 12 * 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Day,
    Week,
    Month,
    Year,
}

impl FromStr for CalendarUnit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "days" => Ok(CalendarUnit::Day),
            "w" | "week" | "weeks" => Ok(CalendarUnit::Week),
            "m" | "month" | "months" => Ok(CalendarUnit::Month),
            "y" | "year" | "years" => Ok(CalendarUnit::Year),
            other => Err(CalendarError::Parse(format!("unknown calendar unit {:?}", other))),
        }
    }
}

impl std::fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CalendarUnit::Day => "days",
            CalendarUnit::Week => "weeks",
            CalendarUnit::Month => "months",
            CalendarUnit::Year => "years",
        };
        write!(f, "{}", name)
    }
}

/// Shift `date` by `amount` units (negative moves backwards).
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result cannot be represented.
pub fn shift_by_calendar_unit(
    date: CalendarDate,
    amount: i64,
    unit: CalendarUnit,
) -> Result<CalendarDate, CalendarError> {
    match unit {
        CalendarUnit::Day => add_days(date, amount),
        CalendarUnit::Week => add_days(date, amount.checked_mul(7).ok_or(CalendarError::OutOfRange)?),
        CalendarUnit::Month => add_months_clamped(date, amount),
        CalendarUnit::Year => {
            add_months_clamped(date, amount.checked_mul(12).ok_or(CalendarError::OutOfRange)?)
        }
    }
}

/// Move by whole calendar months, clamping the day to the target month's length.
pub fn add_months_clamped(date: CalendarDate, months: i64) -> Result<CalendarDate, CalendarError> {
    if months.unsigned_abs() > MAX_MONTH_SHIFT {
        return Err(CalendarError::OutOfRange);
    }

    let (year, month, day) = roll_months(date.year() as i64, date.month(), date.day(), months);
    let year = i32::try_from(year).map_err(|_| CalendarError::OutOfRange)?;
    CalendarDate::new(year, month, day).map_err(|_| CalendarError::OutOfRange)
}

fn add_days(date: CalendarDate, days: i64) -> Result<CalendarDate, CalendarError> {
    let naive = date.naive();
    let shifted = if days >= 0 {
        naive.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        naive.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.map(CalendarDate::from).ok_or(CalendarError::OutOfRange)
}

/// The (year, month, day) reached by moving `months` calendar months from the
/// given triple, with the day clamped to the length of the target month.
/// Callers keep `months` small enough that the year arithmetic cannot overflow.
pub(crate) fn roll_months(year: i64, month: u32, day: u32, months: i64) -> (i64, u32, u32) {
    let total = year * 12 + (month as i64 - 1) + months;
    let target_year = total.div_euclid(12);
    let target_month = (total.rem_euclid(12) + 1) as u32;
    let target_day = day.min(month_length(target_year, target_month));
    (target_year, target_month, target_day)
}
