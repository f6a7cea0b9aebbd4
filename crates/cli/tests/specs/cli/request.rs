//! JSON request specs.

use crate::prelude::*;

#[test]
fn request_argument() {
    cli()
        .args(&["--request", r#"{"duration": {"secs": 12000}, "all_zeroes": true}"#])
        .passes()
        .stdout_eq("0w0d3h20m0s\n");
}

#[test]
fn request_from_stdin() {
    cli()
        .args(&["--request", "-"])
        .stdin(r#"{"microseconds": 1500000, "precision": "milliseconds"}"#)
        .passes()
        .stdout_eq("1s500ms\n");
}

#[test]
fn flags_override_request_options() {
    cli()
        .args(&["--request", r#"{"seconds": 12000, "separator": "-"}"#, "-s", " "])
        .passes()
        .stdout_eq("3h 20m\n");
}

#[test]
fn request_type_error() {
    cli()
        .args(&["--request", r#"{"duration": "3h"}"#])
        .fails()
        .code(1)
        .stderr_has("expected duration object");
}

#[test]
fn malformed_json() {
    cli()
        .args(&["--request", "{"])
        .fails()
        .code(1)
        .stderr_has("invalid request JSON");
}
