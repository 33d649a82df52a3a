//! FILENAME: core/calendar/src/lib.rs
//! PURPOSE: Main library entry point for calendar math.
//! CONTEXT: Pure functions over naive dates. Nothing here reads the clock
//! except `CalendarDate::today()`, and nothing holds state; the host owns the
//! "which month is showing" cursor.
//!
//! SUPPORTED FEATURES:
//! - ISO-8601 week numbers (including week 53 and year-boundary weeks)
//! - Sunday-first month grids with per-row ISO week numbers
//! - Day/week/month/year offsets with month-end clamping
//! - Interval breakdown into total days, weeks, years/months/days, workdays

pub mod date;
pub mod error;
pub mod info;
pub mod interval;
pub mod iso_week;
pub mod month_grid;
pub mod shift;

#[cfg(test)]
mod tests;

pub use date::{days_in_month, is_leap_year, CalendarDate};
pub use error::CalendarError;
pub use info::{describe, offset_summary, DateInfo, Offset};
pub use interval::{interval, Interval};
pub use iso_week::{iso_week, iso_year_week};
pub use month_grid::{build_month_grid, MonthGrid, WeekRow, YearMonth, DAYS_PER_WEEK};
pub use shift::{add_months_clamped, shift_by_calendar_unit, CalendarUnit};

pub use chrono::Weekday;
