//! FILENAME: core/calendar/src/tests.rs
//! PURPOSE: Consolidated calendar scenarios across grid, shift and interval.

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::info::offset_summary;
use crate::interval::interval;
use crate::month_grid::{build_month_grid, YearMonth};
use crate::shift::{add_months_clamped, shift_by_calendar_unit, CalendarUnit};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

// ========================================
// MONTH GRID
// ========================================

#[test]
fn january_2021_grid() {
    let grid = build_month_grid(2021, 1).unwrap();
    assert_eq!(grid.rows.len(), 6);

    // Jan 1 is a Friday
    assert_eq!(
        grid.rows[0].days,
        [None, None, None, None, None, Some(1), Some(2)]
    );
    assert_eq!(grid.rows[5].days, [Some(31), None, None, None, None, None, None]);

    let weeks: Vec<u32> = grid.rows.iter().map(|r| r.iso_week).collect();
    assert_eq!(weeks, vec![53, 53, 1, 2, 3, 4]);
}

#[test]
fn february_2015_fits_four_rows() {
    // Starts on a Sunday, 28 days
    let grid = build_month_grid(2015, 2).unwrap();
    assert_eq!(grid.rows.len(), 4);
    assert!(grid.rows.iter().all(|r| r.days.iter().all(Option::is_some)));
}

#[test]
fn grid_covers_every_day_once() {
    for (year, month) in [(2020, 2), (2021, 5), (2024, 12), (1999, 8)] {
        let grid = build_month_grid(year, month).unwrap();
        let days: Vec<u32> = grid.rows.iter().flat_map(|r| r.days.iter().flatten().copied()).collect();
        let expected: Vec<u32> = (1..=crate::days_in_month(year, month)).collect();
        assert_eq!(days, expected, "{}-{}", year, month);
    }
}

#[test]
fn grid_rejects_bad_month() {
    assert_eq!(build_month_grid(2021, 13), Err(CalendarError::InvalidMonth { month: 13 }));
}

#[test]
fn grid_cell_selection() {
    let grid = build_month_grid(2021, 1).unwrap();
    assert_eq!(grid.date_at(0, 5), Some(date(2021, 1, 1)));
    assert_eq!(grid.date_at(0, 0), None);
    assert_eq!(grid.date_at(9, 0), None);
    assert_eq!(grid.date_at(0, 7), None);
    assert_eq!(grid.position_of(date(2021, 1, 31)), Some((5, 0)));
    assert_eq!(grid.position_of(date(2021, 2, 1)), None);
}

#[test]
fn year_month_navigation_wraps() {
    let dec = YearMonth::new(2021, 12).unwrap();
    assert_eq!(dec.next().unwrap(), YearMonth::new(2022, 1).unwrap());

    let jan = YearMonth::new(2021, 1).unwrap();
    assert_eq!(jan.prev().unwrap(), YearMonth::new(2020, 12).unwrap());

    let mut cursor = jan;
    for _ in 0..12 {
        cursor = cursor.next().unwrap();
    }
    assert_eq!(cursor, YearMonth::new(2022, 1).unwrap());
    assert_eq!(jan.to_string(), "2021-01");
}

// ========================================
// SHIFTING
// ========================================

#[test]
fn jan_31_plus_one_month() {
    let result = shift_by_calendar_unit(date(2021, 1, 31), 1, CalendarUnit::Month).unwrap();
    assert_eq!(result, date(2021, 2, 28));
}

#[test]
fn month_shift_is_not_reversible_after_clamp() {
    let there = add_months_clamped(date(2021, 1, 31), 1).unwrap();
    let back = add_months_clamped(there, -1).unwrap();
    assert_eq!(back, date(2021, 1, 28));
}

#[test]
fn offset_summary_for_clamped_month() {
    let offset = offset_summary(date(2021, 1, 31), 1, CalendarUnit::Month).unwrap();
    assert_eq!(offset.result, date(2021, 2, 28));
    assert_eq!(offset.day_distance, 28);
    assert_eq!((offset.weeks, offset.remainder_days), (4, 0));
}

// ========================================
// INTERVALS
// ========================================

#[test]
fn interval_decomposition() {
    let iv = interval(date(2020, 1, 15), date(2021, 3, 20));
    assert_eq!((iv.years, iv.months, iv.days), (1, 2, 5));
    assert_eq!(iv.total_days, 430);
    assert_eq!(iv.total_months, 14);
    assert_eq!((iv.weeks, iv.remainder_days), (61, 3));
    assert!(!iv.swapped);
}

#[test]
fn interval_normalizes_reversed_input() {
    let forward = interval(date(2020, 1, 15), date(2021, 3, 20));
    let reversed = interval(date(2021, 3, 20), date(2020, 1, 15));

    assert!(reversed.swapped);
    assert_eq!(reversed.start, forward.start);
    assert_eq!(reversed.end, forward.end);
    assert_eq!(reversed.total_days, forward.total_days);
    assert_eq!((reversed.years, reversed.months, reversed.days), (1, 2, 5));
    assert_eq!(reversed.workdays, forward.workdays);
}

#[test]
fn workdays_are_inclusive() {
    // Mon 2021-01-04 through Fri 2021-01-15: two full working weeks
    let iv = interval(date(2021, 1, 4), date(2021, 1, 15));
    assert_eq!(iv.workdays, 10);

    // Mon through the following Mon
    let iv = interval(date(2021, 1, 4), date(2021, 1, 11));
    assert_eq!(iv.workdays, 6);
}

#[test]
fn leap_day_interval() {
    let iv = interval(date(2020, 2, 29), date(2021, 2, 28));
    assert_eq!((iv.years, iv.months, iv.days), (1, 0, 0));
    assert_eq!(iv.total_days, 365);
}

#[test]
fn interval_serializes_camel_case() {
    let iv = interval(date(2021, 1, 1), date(2021, 1, 2));
    let json = serde_json::to_value(&iv).unwrap();
    assert_eq!(json["start"], "2021-01-01");
    assert_eq!(json["totalDays"], 1);
    assert_eq!(json["startIsoWeek"], 53);
}
