//! Error specs: every rejected call exits 1 with a message and no output.

use crate::prelude::*;

#[test]
fn no_source_is_invalid_input() {
    cli()
        .args(&["--separator", " "])
        .fails()
        .code(1)
        .stdout_eq("")
        .stderr_has("Error: expected exactly one of duration, seconds, milliseconds or microseconds, got 0");
}

#[test]
fn two_sources_are_invalid_input() {
    cli()
        .args(&["--seconds", "60", "--milliseconds", "1000"])
        .fails()
        .code(1)
        .stderr_has("got 2");
}

#[test]
fn non_numeric_is_invalid_type() {
    cli()
        .args(&["--seconds", "soon"])
        .fails()
        .code(1)
        .stderr_has("Error: expected int or float for seconds, got 'soon'");
}

#[test]
fn unknown_precision_is_invalid_precision() {
    cli()
        .args(&["--seconds", "60", "--precision", "nanoseconds"])
        .fails()
        .code(1)
        .stderr_has("unknown precision 'nanoseconds'");
}

#[test]
fn type_error_reported_before_count() {
    cli()
        .args(&["--seconds", "x", "--milliseconds", "1"])
        .fails()
        .stderr_has("expected int or float for seconds");
}

#[test]
fn request_conflicts_with_flags() {
    cli()
        .args(&["--request", "{\"seconds\": 1}", "--seconds", "1"])
        .fails()
        .code(2)
        .stderr_has("cannot be used with");
}
