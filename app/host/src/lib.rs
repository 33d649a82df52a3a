//! FILENAME: app/host/src/lib.rs
// PURPOSE: Main library entry point (host bridge).
// CONTEXT: Owns the shared application state and exposes the command layer
// that a UI (or the console loop in `console`) drives.

use std::collections::HashMap;
use std::sync::Mutex;

use calendar::{CalendarDate, YearMonth};
use engine::Accumulator;

pub mod api_types;
pub mod commands;
pub mod config;
pub mod console;
pub mod keymap;
pub mod logging;

pub use api_types::{CellPosition, KeyPressResult, MonthView, PasteResult, SessionData};
pub use config::{AppConfig, ConfigError, CONFIG_ENV_VAR};
pub use logging::{get_log_path, init_log_file, install_log_bridge, next_seq, write_log};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Which month the calendar panel shows and which day is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub month: YearMonth,
    pub selected: Option<CalendarDate>,
}

impl CalendarView {
    /// View of the current month with nothing selected.
    pub fn current() -> Self {
        CalendarView {
            month: YearMonth::of(CalendarDate::today()),
            selected: None,
        }
    }
}

pub struct AppState {
    /// One accumulator per open calculator session, keyed by session id
    pub sessions: Mutex<HashMap<String, Accumulator>>,
    pub calendar: Mutex<CalendarView>,
    pub config: AppConfig,
}

pub fn create_app_state() -> AppState {
    create_app_state_with_config(AppConfig::default())
}

pub fn create_app_state_with_config(config: AppConfig) -> AppState {
    log_info!("SYS", "Creating AppState");
    AppState {
        sessions: Mutex::new(HashMap::new()),
        calendar: Mutex::new(CalendarView::current()),
        config,
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

pub fn run() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[CONFIG] {}; using defaults", e);
            AppConfig::default()
        }
    };

    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    install_log_bridge(level);

    if let Some(ref path) = config.log_file {
        match init_log_file(path) {
            Ok(path) => log_info!("SYS", "Host starting, log={}", path.display()),
            Err(e) => {
                eprintln!("[LOG_INIT] FAILED: {}", e);
                eprintln!("[LOG_INIT] Continuing with console-only logging");
            }
        }
    } else {
        log_info!("SYS", "Host starting, console-only logging");
    }

    let state = create_app_state_with_config(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = console::run_console(&state, stdin.lock(), stdout.lock()) {
        log_error!("SYS", "console loop failed: {}", e);
        std::process::exit(1);
    }

    log_info!("SYS", "Host stopped");
}
