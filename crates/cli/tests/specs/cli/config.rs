//! Config file and environment specs.

use crate::prelude::*;

#[test]
fn default_config_file_supplies_defaults() {
    let config = ConfigDir::with("separator = \" \"\ninfix_zeroes = true\n");
    cli()
        .env("XDG_CONFIG_HOME", config.root())
        .args(&["--seconds", "259920"])
        .passes()
        .stdout_eq("3d 0h 12m\n");
}

#[test]
fn flags_override_config() {
    let config = ConfigDir::with("separator = \" \"\n");
    cli()
        .env("XDG_CONFIG_HOME", config.root())
        .args(&["--seconds", "12000", "-s", ","])
        .passes()
        .stdout_eq("3h,20m\n");
}

#[test]
fn explicit_config_path() {
    let config = ConfigDir::with("precision = \"hours\"\n");
    let path = config.file().to_string_lossy().into_owned();
    cli()
        .args(&["--seconds", "12000", "--config", path.as_str()])
        .passes()
        .stdout_eq("3h\n");
}

#[test]
fn nd_config_env() {
    let config = ConfigDir::with("precision = \"minutes\"\n");
    cli()
        .env("ND_CONFIG", config.file())
        .args(&["--seconds", "12345"])
        .passes()
        .stdout_eq("3h25m\n");
}

#[test]
fn missing_explicit_config_fails() {
    cli()
        .args(&["--seconds", "1", "--config", "/nonexistent/nd.toml"])
        .fails()
        .code(1)
        .stderr_has("config file not found: /nonexistent/nd.toml");
}

#[test]
fn environment_overrides_config() {
    let config = ConfigDir::with("separator = \" \"\n");
    cli()
        .env("XDG_CONFIG_HOME", config.root())
        .env("ND_SEPARATOR", "_")
        .env("ND_PRECISION", "minutes")
        .args(&["--seconds", "12345"])
        .passes()
        .stdout_eq("3h_25m\n");
}

#[test]
fn invalid_precision_in_config() {
    let config = ConfigDir::with("precision = \"fortnights\"\n");
    cli()
        .env("XDG_CONFIG_HOME", config.root())
        .args(&["--seconds", "1"])
        .fails()
        .code(1)
        .stderr_has("invalid config")
        .stderr_has("unknown precision 'fortnights'");
}

#[test]
fn flag_precision_wins_over_bad_env() {
    cli()
        .env("ND_PRECISION", "fortnights")
        .args(&["--seconds", "12345", "-p", "minutes"])
        .passes()
        .stdout_eq("3h25m\n");
}

#[test]
fn bad_env_precision_is_blamed_on_env() {
    cli()
        .env("ND_PRECISION", "fortnights")
        .args(&["--seconds", "12345"])
        .fails()
        .code(1)
        .stderr_has("invalid ND_PRECISION")
        .stderr_has("unknown precision 'fortnights'");
}

#[test]
fn flags_turn_off_config_zero_flags() {
    let config = ConfigDir::with("infix_zeroes = true\n");
    cli()
        .env("XDG_CONFIG_HOME", config.root())
        .args(&["--seconds", "259920", "--no-infix-zeroes"])
        .passes()
        .stdout_eq("3d12m\n");
}

#[test]
fn flags_narrow_config_all_zeroes() {
    let config = ConfigDir::with("all_zeroes = true\n");
    cli()
        .env("XDG_CONFIG_HOME", config.root())
        .args(&["--seconds", "259920", "--no-infix-zeroes"])
        .passes()
        .stdout_eq("0w3d12m0s\n");
    cli()
        .env("XDG_CONFIG_HOME", config.root())
        .args(&["--seconds", "259920", "--no-all-zeroes"])
        .passes()
        .stdout_eq("3d12m\n");
}
