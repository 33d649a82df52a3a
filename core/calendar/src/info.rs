//! FILENAME: core/calendar/src/info.rs
//! PURPOSE: Summaries for the date info panel and the date offset tool.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::iso_week::iso_week;
use crate::shift::{shift_by_calendar_unit, CalendarUnit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    pub date: CalendarDate,
    pub weekday: Weekday,
    pub iso_week: u32,
    pub day_of_year: u32,
}

pub fn describe(date: CalendarDate) -> DateInfo {
    DateInfo {
        date,
        weekday: date.weekday(),
        iso_week: iso_week(date),
        day_of_year: date.day_of_year(),
    }
}

/// Result of shifting a base date, with the distance actually travelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offset {
    pub base: CalendarDate,
    pub amount: i64,
    pub unit: CalendarUnit,
    pub result: CalendarDate,
    pub base_iso_week: u32,
    pub result_iso_week: u32,
    pub result_weekday: Weekday,
    /// Absolute day count between base and result.
    pub day_distance: i64,
    pub weeks: i64,
    pub remainder_days: i64,
}

/// Shift `base` by `amount` units and describe where it landed.
///
/// Month and year shifts clamp, so `day_distance` can be shorter than the
/// nominal length of the shift (Jan 31 + 1 month covers 28 days).
pub fn offset_summary(
    base: CalendarDate,
    amount: i64,
    unit: CalendarUnit,
) -> Result<Offset, CalendarError> {
    let result = shift_by_calendar_unit(base, amount, unit)?;
    let day_distance = result.days_since(base).abs();

    Ok(Offset {
        base,
        amount,
        unit,
        result,
        base_iso_week: iso_week(base),
        result_iso_week: iso_week(result),
        result_weekday: result.weekday(),
        day_distance,
        weeks: day_distance / 7,
        remainder_days: day_distance % 7,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let info = describe(CalendarDate::new(2021, 3, 1).unwrap());
        assert_eq!(info.weekday, Weekday::Mon);
        assert_eq!(info.iso_week, 9);
        assert_eq!(info.day_of_year, 60);
    }

    #[test]
    fn test_offset_backwards_reports_absolute_distance() {
        let base = CalendarDate::new(2021, 1, 20).unwrap();
        let offset = offset_summary(base, -10, CalendarUnit::Day).unwrap();
        assert_eq!(offset.result.to_string(), "2021-01-10");
        assert_eq!(offset.day_distance, 10);
        assert_eq!((offset.weeks, offset.remainder_days), (1, 3));
        assert_eq!(offset.result_weekday, Weekday::Sun);
        assert_eq!((offset.base_iso_week, offset.result_iso_week), (3, 1));
    }
}
