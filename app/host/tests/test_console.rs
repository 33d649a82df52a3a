//! FILENAME: tests/test_console.rs
//! Integration tests for the line-oriented console.

mod common;

use app_lib::console::{execute_line, run_console};
use common::TestHarness;
use serde_json::Value;

fn run(harness: &TestHarness, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    run_console(&harness.state, input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_keystroke_lines() {
    let harness = TestHarness::new();
    let replies = run(&harness, "12 + 8\n=\n= \n");

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["ok"]["display"], "8");
    assert_eq!(replies[1]["ok"]["display"], "20");
    assert_eq!(replies[2]["ok"]["display"], "40");
}

#[test]
fn test_session_closed_at_end() {
    let harness = TestHarness::new();
    run(&harness, "1\nquit\n2\n");
    assert_eq!(harness.session_count(), 0);
}

#[test]
fn test_quit_stops_reading() {
    let harness = TestHarness::new();
    let replies = run(&harness, "1\nquit\n2\n");
    assert_eq!(replies.len(), 1);
}

#[test]
fn test_quit_ignores_case() {
    let harness = TestHarness::new();
    assert_eq!(run(&harness, "1\nQUIT\n2\n").len(), 1);

    let harness = TestHarness::new();
    assert_eq!(run(&harness, "1\n Exit \n2\n").len(), 1);
    assert_eq!(harness.session_count(), 0);
}

#[test]
fn test_calendar_commands() {
    let harness = TestHarness::with_month(2021, 1);
    let replies = run(
        &harness,
        "cal\nnext\ncal 2020 2\ndiff 2020-01-15 2021-03-20\nadd 2021-01-31 1 month\ninfo 2021-01-04\n",
    );

    assert_eq!(replies[0]["ok"]["title"], "2021-01");
    assert_eq!(replies[1]["ok"]["title"], "2021-02");
    assert_eq!(replies[2]["ok"]["title"], "2020-02");
    assert_eq!(replies[3]["ok"]["totalDays"], 430);
    assert_eq!(replies[4]["ok"]["result"], "2021-02-28");
    assert_eq!(replies[5]["ok"]["isoWeek"], 1);
}

#[test]
fn test_errors_are_reported_inline() {
    let harness = TestHarness::new();
    let replies = run(&harness, "info 2021-13-01\n1 <bogus>\nadd 2021-01-01 x days\n5/0=\n");

    assert!(replies[0]["error"].is_string());
    assert!(replies[1]["error"].as_str().unwrap().contains("unknown key"));
    assert_eq!(replies[2]["error"], "invalid amount: \"x\"");
    assert_eq!(replies[3]["ok"]["display"], "cannot divide by zero");
    assert_eq!(replies[3]["ok"]["isError"], true);
}

#[test]
fn test_clipboard_and_history_lines() {
    let harness = TestHarness::new();
    let id = harness.open();

    execute_line(&harness.state, &id, "paste 3.5e2").unwrap();
    let copied = execute_line(&harness.state, &id, "copy").unwrap();
    assert_eq!(copied, "350");

    let history = execute_line(&harness.state, &id, "history").unwrap();
    assert_eq!(history[0]["expression"], "paste");
    assert_eq!(history[0]["result"], "350");
}
