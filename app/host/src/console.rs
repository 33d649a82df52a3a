//! FILENAME: app/host/src/console.rs
// PURPOSE: Line-oriented console front end over the command layer.
// CONTEXT: Each input line is either a calendar command or a run of
// keystrokes for the console's calculator session. Each reply is one JSON
// line: `{"ok": ...}` or `{"error": "..."}`.
//
// Calendar commands:
//   cal [YYYY MM]        show the current (or given) month
//   next | prev          move the view one month
//   today                jump to today and select it
//   select ROW COL       select a grid cell
//   diff DATE DATE       interval between two dates
//   add DATE N UNIT      shift a date (UNIT: days, weeks, months, years)
//   info DATE            weekday, ISO week and day of year
// Calculator commands:
//   history | copy | paste TEXT | readout
//   anything else is keystrokes, e.g. `12 + 3 =` or `9 <esc>`
// `quit` or `exit`, in any case, ends the loop.

use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::{json, Value};

use crate::commands;
use crate::keymap::parse_keystrokes;
use crate::{log_debug, log_warn, AppState};

fn to_json<T: Serialize>(value: T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

fn arg<'a>(args: &[&'a str], index: usize, name: &str) -> Result<&'a str, String> {
    args.get(index).copied().ok_or_else(|| format!("missing argument: {}", name))
}

fn parse_arg<T: std::str::FromStr>(args: &[&str], index: usize, name: &str) -> Result<T, String> {
    let text = arg(args, index, name)?;
    text.parse::<T>().map_err(|_| format!("invalid {}: {:?}", name, text))
}

/// Run one console line against `session_id`.
pub fn execute_line(state: &AppState, session_id: &str, line: &str) -> Result<Value, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Err("empty line".to_string());
    };

    match head.to_ascii_lowercase().as_str() {
        "cal" if args.is_empty() => to_json(commands::get_month_view(state)?),
        "cal" => {
            let year = parse_arg::<i32>(args, 0, "year")?;
            let month = parse_arg::<u32>(args, 1, "month")?;
            to_json(commands::show_month(state, year, month)?)
        }
        "next" => to_json(commands::navigate_month(state, 1)?),
        "prev" => to_json(commands::navigate_month(state, -1)?),
        "today" => to_json(commands::go_to_today(state)?),
        "select" => {
            let row = parse_arg::<usize>(args, 0, "row")?;
            let col = parse_arg::<usize>(args, 1, "col")?;
            to_json(commands::select_date(state, row, col)?)
        }
        "diff" => to_json(commands::calculate_interval(
            arg(args, 0, "start date")?,
            arg(args, 1, "end date")?,
        )?),
        "add" => {
            let amount = parse_arg::<i64>(args, 1, "amount")?;
            to_json(commands::calculate_offset(
                arg(args, 0, "date")?,
                amount,
                arg(args, 2, "unit")?,
            )?)
        }
        "info" => to_json(commands::describe_date(arg(args, 0, "date")?)?),
        "history" => to_json(commands::get_history(state, session_id)?),
        "copy" => to_json(commands::copy_value(state, session_id)?),
        "paste" => to_json(commands::paste_value(state, session_id, &args.join(" "))?),
        "readout" => to_json(commands::get_readout(state, session_id)?),
        _ => {
            let keys = parse_keystrokes(line)?;
            let mut readout = commands::get_readout(state, session_id)?;
            for key in keys {
                readout = commands::apply_command(state, session_id, key)?;
            }
            to_json(readout)
        }
    }
}

/// Read lines from `input` until EOF or `quit`, answering each on `output`.
pub fn run_console<R: BufRead, W: Write>(
    state: &AppState,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    let session = commands::open_session(state).map_err(std::io::Error::other)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = match execute_line(state, &session.session_id, trimmed) {
            Ok(value) => json!({ "ok": value }),
            Err(message) => {
                log_warn!("CONSOLE", "{:?}: {}", trimmed, message);
                json!({ "error": message })
            }
        };
        writeln!(output, "{}", reply)?;
        output.flush()?;
    }

    log_debug!("CONSOLE", "input closed");
    commands::close_session(state, &session.session_id).map_err(std::io::Error::other)
}
