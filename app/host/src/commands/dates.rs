//! FILENAME: app/host/src/commands/dates.rs
// PURPOSE: Calendar panel navigation and the date tools.

use calendar::{
    build_month_grid, describe, interval, offset_summary, CalendarDate, CalendarUnit, DateInfo,
    Interval, Offset, YearMonth,
};

use crate::api_types::{CellPosition, MonthView};
use crate::{log_debug, AppState, CalendarView};

fn parse_date(text: &str) -> Result<CalendarDate, String> {
    text.parse::<CalendarDate>().map_err(|e| e.to_string())
}

fn render_view(view: CalendarView) -> Result<MonthView, String> {
    let grid = build_month_grid(view.month.year, view.month.month).map_err(|e| e.to_string())?;
    let today = CalendarDate::today();
    let position = |date: CalendarDate| {
        grid.position_of(date).map(|(row, col)| CellPosition { row, col })
    };

    Ok(MonthView {
        year: grid.year,
        month: grid.month,
        title: view.month.to_string(),
        today: position(today),
        selected: view.selected.and_then(position),
        info: describe(view.selected.unwrap_or(today)),
        rows: grid.rows,
    })
}

/// Apply `update` to the calendar view and render the result.
fn update_view(
    state: &AppState,
    update: impl FnOnce(&mut CalendarView) -> Result<(), String>,
) -> Result<MonthView, String> {
    let mut view = state.calendar.lock().map_err(|e| e.to_string())?;
    update(&mut *view)?;
    render_view(*view)
}

pub fn get_month_view(state: &AppState) -> Result<MonthView, String> {
    update_view(state, |_| Ok(()))
}

/// Jump to a specific month. The selection is kept.
pub fn show_month(state: &AppState, year: i32, month: u32) -> Result<MonthView, String> {
    let target = YearMonth::new(year, month).map_err(|e| e.to_string())?;
    update_view(state, |view| {
        view.month = target;
        Ok(())
    })
}

/// Move the view `delta` months (negative goes back).
pub fn navigate_month(state: &AppState, delta: i64) -> Result<MonthView, String> {
    update_view(state, |view| {
        view.month = view.month.shifted(delta).map_err(|e| e.to_string())?;
        log_debug!("CAL", "navigate {} -> {}", delta, view.month);
        Ok(())
    })
}

/// Show the current month with today selected.
pub fn go_to_today(state: &AppState) -> Result<MonthView, String> {
    let today = CalendarDate::today();
    update_view(state, |view| {
        *view = CalendarView { month: YearMonth::of(today), selected: Some(today) };
        Ok(())
    })
}

/// Select the day under a grid cell of the current view.
pub fn select_date(state: &AppState, row: usize, col: usize) -> Result<DateInfo, String> {
    let mut view = state.calendar.lock().map_err(|e| e.to_string())?;
    let grid = build_month_grid(view.month.year, view.month.month).map_err(|e| e.to_string())?;
    let date = grid
        .date_at(row, col)
        .ok_or_else(|| format!("No date at row {}, col {}", row, col))?;

    view.selected = Some(date);
    log_debug!("CAL", "selected {}", date);
    Ok(describe(date))
}

pub fn calculate_interval(start: &str, end: &str) -> Result<Interval, String> {
    Ok(interval(parse_date(start)?, parse_date(end)?))
}

pub fn calculate_offset(base: &str, amount: i64, unit: &str) -> Result<Offset, String> {
    let unit = unit.parse::<CalendarUnit>().map_err(|e| e.to_string())?;
    offset_summary(parse_date(base)?, amount, unit).map_err(|e| e.to_string())
}

pub fn describe_date(date: &str) -> Result<DateInfo, String> {
    Ok(describe(parse_date(date)?))
}
