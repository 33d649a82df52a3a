//! FILENAME: app/host/src/main.rs
// PURPOSE: Console entry point with unified logging.
// FORMAT: seq|level|category|message

fn main() {
    app_lib::run();
}
