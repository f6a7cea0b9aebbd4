//! CLI help output specs

use crate::prelude::*;

#[test]
fn nd_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn nd_help_lists_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--seconds")
        .stdout_has("--precision")
        .stdout_has("--all-zeroes");
}

#[test]
fn nd_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
