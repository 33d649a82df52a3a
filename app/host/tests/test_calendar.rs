//! FILENAME: tests/test_calendar.rs
//! Integration tests for calendar view and date tool commands.

mod common;

use app_lib::{commands, CellPosition};
use calendar::{CalendarDate, CalendarUnit, Weekday};
use common::{date, TestHarness};

// ============================================================================
// MONTH VIEW
// ============================================================================

#[test]
fn test_month_view_layout() {
    let harness = TestHarness::with_month(2021, 1);
    let view = commands::get_month_view(&harness.state).unwrap();

    assert_eq!(view.title, "2021-01");
    assert_eq!(view.rows.len(), 6);
    assert_eq!(view.rows[0].iso_week, 53);
    assert_eq!(view.rows[0].days[5], Some(1));
    assert!(view.selected.is_none());
}

#[test]
fn test_navigation_crosses_year() {
    let harness = TestHarness::with_month(2021, 1);

    let view = commands::navigate_month(&harness.state, -1).unwrap();
    assert_eq!((view.year, view.month), (2020, 12));

    let view = commands::navigate_month(&harness.state, 2).unwrap();
    assert_eq!((view.year, view.month), (2021, 2));
}

#[test]
fn test_show_month_validates() {
    let harness = TestHarness::with_month(2021, 1);
    assert!(commands::show_month(&harness.state, 2021, 13).is_err());

    let view = commands::show_month(&harness.state, 2024, 2).unwrap();
    let days: usize = view.rows.iter().map(|r| r.days.iter().flatten().count()).sum();
    assert_eq!(days, 29);
}

#[test]
fn test_select_date() {
    let harness = TestHarness::with_month(2021, 1);

    let info = commands::select_date(&harness.state, 0, 5).unwrap();
    assert_eq!(info.date, date(2021, 1, 1));
    assert_eq!(info.weekday, Weekday::Fri);
    assert_eq!(info.iso_week, 53);
    assert_eq!(info.day_of_year, 1);
    assert_eq!(harness.selected(), Some(date(2021, 1, 1)));

    let view = commands::get_month_view(&harness.state).unwrap();
    assert_eq!(view.selected, Some(CellPosition { row: 0, col: 5 }));
    assert_eq!(view.info.date, date(2021, 1, 1));
}

#[test]
fn test_select_padding_cell_fails() {
    let harness = TestHarness::with_month(2021, 1);
    assert!(commands::select_date(&harness.state, 0, 0).is_err());
    assert!(commands::select_date(&harness.state, 6, 0).is_err());
    assert_eq!(harness.selected(), None);
}

#[test]
fn test_selection_hidden_in_other_months() {
    let harness = TestHarness::with_month(2021, 1);
    commands::select_date(&harness.state, 1, 0).unwrap();

    let view = commands::navigate_month(&harness.state, 1).unwrap();
    assert!(view.selected.is_none());
    assert_eq!(harness.selected(), Some(date(2021, 1, 3)));
}

#[test]
fn test_go_to_today() {
    let harness = TestHarness::with_month(1999, 5);
    let view = commands::go_to_today(&harness.state).unwrap();
    let today = CalendarDate::today();

    assert_eq!((view.year, view.month), (today.year(), today.month()));
    assert_eq!(harness.selected(), Some(today));
    assert!(view.today.is_some());
    assert_eq!(view.today, view.selected);
}

// ============================================================================
// DATE TOOLS
// ============================================================================

#[test]
fn test_calculate_interval() {
    let interval = commands::calculate_interval("2021-03-20", "2020-01-15").unwrap();
    assert!(interval.swapped);
    assert_eq!(interval.total_days, 430);
    assert_eq!((interval.years, interval.months, interval.days), (1, 2, 5));
    assert_eq!(interval.start, date(2020, 1, 15));

    assert!(commands::calculate_interval("2021-02-30", "2021-03-01").is_err());
}

#[test]
fn test_calculate_offset() {
    let offset = commands::calculate_offset("2021-01-31", 1, "months").unwrap();
    assert_eq!(offset.result, date(2021, 2, 28));
    assert_eq!(offset.unit, CalendarUnit::Month);
    assert_eq!(offset.day_distance, 28);

    let offset = commands::calculate_offset("2021-01-01", -2, "weeks").unwrap();
    assert_eq!(offset.result, date(2020, 12, 18));

    let err = commands::calculate_offset("2021-01-01", 1, "fortnights").unwrap_err();
    assert!(err.contains("unknown calendar unit"));
}

#[test]
fn test_describe_date() {
    let info = commands::describe_date("2018-12-31").unwrap();
    assert_eq!(info.weekday, Weekday::Mon);
    assert_eq!(info.iso_week, 1);
    assert_eq!(info.day_of_year, 365);

    assert!(commands::describe_date("yesterday").is_err());
}
