//! FILENAME: core/calendar/src/interval.rs
//! PURPOSE: Decomposition of the span between two dates.
//! CONTEXT: The years/months/days breakdown is calendar-aware: count whole
//! months from the earlier date (clamping to month ends), back off while the
//! anchor overshoots, and leave the rest as days. This is "relative delta"
//! subtraction, not a days/30 approximation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::iso_week::iso_week;
use crate::shift::roll_months;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    /// Earlier of the two inputs.
    pub start: CalendarDate,
    /// Later of the two inputs.
    pub end: CalendarDate,
    /// True when the inputs arrived later-first.
    pub swapped: bool,
    pub total_days: i64,
    pub weeks: i64,
    pub remainder_days: i64,
    pub years: i64,
    pub months: i64,
    pub days: i64,
    /// `years * 12 + months`.
    pub total_months: i64,
    /// Monday-Friday dates in `[start, end]`, both ends included.
    pub workdays: i64,
    pub start_iso_week: u32,
    pub end_iso_week: u32,
}

/// Span between two dates, normalised so `start <= end`.
pub fn interval(a: CalendarDate, b: CalendarDate) -> Interval {
    let swapped = a > b;
    let (start, end) = if swapped { (b, a) } else { (a, b) };

    let total_days = end.days_since(start);
    let (whole_months, days) = month_breakdown(start, end);

    Interval {
        start,
        end,
        swapped,
        total_days,
        weeks: total_days / 7,
        remainder_days: total_days % 7,
        years: whole_months / 12,
        months: whole_months % 12,
        days,
        total_months: whole_months,
        workdays: count_workdays(start, end),
        start_iso_week: iso_week(start),
        end_iso_week: iso_week(end),
    }
}

/// Whole calendar months from `start` towards `end`, plus leftover days.
fn month_breakdown(start: CalendarDate, end: CalendarDate) -> (i64, i64) {
    let (sy, sm, sd) = (start.year() as i64, start.month(), start.day());
    let mut months = (end.year() as i64 - sy) * 12 + (end.month() as i64 - sm as i64);

    // roll_months clamps the day, so the only way to miss is a year outside chrono's range
    let anchor = |months: i64| {
        let (y, m, d) = roll_months(sy, sm, sd, months);
        i32::try_from(y).ok().and_then(|y| NaiveDate::from_ymd_opt(y, m, d))
    };

    let end_date = end.naive();
    let mut anchor_date = anchor(months);
    while months > 0 && anchor_date.map_or(true, |a| a > end_date) {
        months -= 1;
        anchor_date = anchor(months);
    }

    let anchor_date = anchor_date.unwrap_or(start.naive());
    (months, end_date.signed_duration_since(anchor_date).num_days())
}

fn count_workdays(start: CalendarDate, end: CalendarDate) -> i64 {
    start
        .naive()
        .iter_days()
        .take_while(|d| *d <= end.naive())
        .filter(|d| CalendarDate::from(*d).is_workday())
        .count() as i64
}
