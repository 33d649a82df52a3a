//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for host integration tests.

#![allow(dead_code)]

use app_lib::{create_app_state, create_app_state_with_config, AppConfig, AppState, CalendarView};
use calendar::{CalendarDate, YearMonth};
use engine::{EngineOptions, Readout};

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with default config.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    /// Create a harness whose sessions use `engine` options.
    pub fn with_engine_options(engine: EngineOptions) -> Self {
        TestHarness {
            state: create_app_state_with_config(AppConfig { engine, ..AppConfig::default() }),
        }
    }

    /// Create a harness whose calendar view shows the given month.
    pub fn with_month(year: i32, month: u32) -> Self {
        let harness = Self::new();
        *harness.state.calendar.lock().unwrap() = CalendarView {
            month: YearMonth::new(year, month).unwrap(),
            selected: None,
        };
        harness
    }

    /// Open a calculator session and return its id.
    pub fn open(&self) -> String {
        app_lib::commands::open_session(&self.state).unwrap().session_id
    }

    /// Press each key name in order, returning the final readout.
    pub fn press(&self, session_id: &str, keys: &[&str]) -> Readout {
        let mut readout = app_lib::commands::get_readout(&self.state, session_id).unwrap();
        for key in keys {
            readout = app_lib::commands::press_key(&self.state, session_id, key).unwrap().readout;
        }
        readout
    }

    /// Type a string one character at a time.
    pub fn type_keys(&self, session_id: &str, keys: &str) -> Readout {
        let names: Vec<String> = keys.chars().filter(|c| !c.is_whitespace()).map(String::from).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        self.press(session_id, &refs)
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.state.calendar.lock().unwrap().selected
    }

    pub fn session_count(&self) -> usize {
        self.state.sessions.lock().unwrap().len()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}
