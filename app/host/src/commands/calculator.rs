//! FILENAME: app/host/src/commands/calculator.rs
// PURPOSE: Session lifecycle and keypad commands.
// CONTEXT: Each session owns one accumulator. All access goes through the
// sessions mutex, so presses on one session are applied one at a time.

use engine::{Accumulator, HistoryEntry, KeypadCommand, Readout};
use uuid::Uuid;

use crate::api_types::{KeyPressResult, PasteResult, SessionData};
use crate::keymap::map_key;
use crate::{log_debug, log_enter_info, log_exit_info, AppState};

/// Run `f` against the accumulator of `session_id`.
fn with_session<T>(
    state: &AppState,
    session_id: &str,
    f: impl FnOnce(&mut Accumulator) -> T,
) -> Result<T, String> {
    let mut sessions = state.sessions.lock().map_err(|e| e.to_string())?;
    let acc = sessions
        .get_mut(session_id)
        .ok_or_else(|| format!("Unknown session: {}", session_id))?;
    Ok(f(acc))
}

pub fn open_session(state: &AppState) -> Result<SessionData, String> {
    log_enter_info!("CALC", "open_session");

    let session_id = Uuid::new_v4().to_string();
    let acc = Accumulator::with_options(state.config.engine.clone());
    let readout = acc.readout();

    state
        .sessions
        .lock()
        .map_err(|e| e.to_string())?
        .insert(session_id.clone(), acc);

    log_exit_info!("CALC", "open_session", "id={}", session_id);
    Ok(SessionData { session_id, readout })
}

pub fn close_session(state: &AppState, session_id: &str) -> Result<(), String> {
    let removed = state
        .sessions
        .lock()
        .map_err(|e| e.to_string())?
        .remove(session_id);

    match removed {
        Some(_) => {
            log_debug!("CALC", "closed session {}", session_id);
            Ok(())
        }
        None => Err(format!("Unknown session: {}", session_id)),
    }
}

/// Feed one keyboard key. Keys with no mapping leave the state untouched.
pub fn press_key(state: &AppState, session_id: &str, key: &str) -> Result<KeyPressResult, String> {
    let command = map_key(key);
    with_session(state, session_id, |acc| {
        match command {
            Some(command) => {
                acc.apply(command);
                log_debug!("CALC", "key {:?} -> {} => {}", key, command, acc.display_text());
            }
            None => log_debug!("CALC", "key {:?} ignored", key),
        }
        KeyPressResult { handled: command.is_some(), readout: acc.readout() }
    })
}

pub fn apply_command(
    state: &AppState,
    session_id: &str,
    command: KeypadCommand,
) -> Result<Readout, String> {
    with_session(state, session_id, |acc| {
        acc.apply(command);
        acc.readout()
    })
}

pub fn get_readout(state: &AppState, session_id: &str) -> Result<Readout, String> {
    with_session(state, session_id, |acc| acc.readout())
}

/// History tape, oldest first.
pub fn get_history(state: &AppState, session_id: &str) -> Result<Vec<HistoryEntry>, String> {
    with_session(state, session_id, |acc| acc.history().entries().cloned().collect())
}

pub fn clear_history(state: &AppState, session_id: &str) -> Result<(), String> {
    with_session(state, session_id, |acc| acc.clear_history())
}

pub fn paste_value(state: &AppState, session_id: &str, text: &str) -> Result<PasteResult, String> {
    with_session(state, session_id, |acc| {
        let accepted = acc.paste(text).is_some();
        if !accepted {
            log_debug!("CALC", "paste rejected: {:?}", text);
        }
        PasteResult { accepted, readout: acc.readout() }
    })
}

pub fn copy_value(state: &AppState, session_id: &str) -> Result<String, String> {
    with_session(state, session_id, |acc| acc.copy_text())
}
