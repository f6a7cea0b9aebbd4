// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! nd - format elapsed time as compact strings like `3h20m`

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod env;
mod output;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use nd_core::{Amount, DurationInputs, FormatOptions, FormatRequest};

use crate::config::Config;
use crate::output::OutputFormat;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "nd",
    version,
    about = "Format elapsed time as compact strings like 3h20m"
)]
struct Cli {
    /// Elapsed time in seconds (fractions are truncated)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    seconds: Option<String>,

    /// Elapsed time in milliseconds
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    milliseconds: Option<String>,

    /// Elapsed time in microseconds
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    microseconds: Option<String>,

    /// Full request as JSON, or "-" to read it from stdin
    #[arg(
        long,
        value_name = "JSON",
        conflicts_with_all = ["seconds", "milliseconds", "microseconds"]
    )]
    request: Option<String>,

    /// Text placed between units
    #[arg(short, long, value_name = "STR")]
    separator: Option<String>,

    /// Keep zero units before the first non-zero unit
    #[arg(long, overrides_with = "no_leading_zeroes")]
    leading_zeroes: bool,

    /// Drop zero units before the first non-zero unit
    #[arg(long, overrides_with = "leading_zeroes")]
    no_leading_zeroes: bool,

    /// Keep zero units after the last non-zero unit
    #[arg(long, overrides_with = "no_trailing_zeroes")]
    trailing_zeroes: bool,

    /// Drop zero units after the last non-zero unit
    #[arg(long, overrides_with = "trailing_zeroes")]
    no_trailing_zeroes: bool,

    /// Keep zero units between non-zero units
    #[arg(long, overrides_with = "no_infix_zeroes")]
    infix_zeroes: bool,

    /// Drop zero units between non-zero units
    #[arg(long, overrides_with = "infix_zeroes")]
    no_infix_zeroes: bool,

    /// Keep every zero unit
    #[arg(short, long, overrides_with = "no_all_zeroes")]
    all_zeroes: bool,

    /// Ignore an all_zeroes default from the config file or request
    #[arg(long, overrides_with = "all_zeroes")]
    no_all_zeroes: bool,

    /// Smallest unit shown (weeks .. microseconds)
    #[arg(short, long, value_name = "UNIT")]
    precision: Option<String>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,

    /// Config file (defaults to $XDG_CONFIG_HOME/nd/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Duration sources given as flags, type-checked but not counted.
    fn inputs(&self) -> Result<DurationInputs, nd_core::FormatError> {
        let mut inputs = DurationInputs::new();
        if let Some(raw) = &self.seconds {
            inputs = inputs.seconds(Amount::parse("seconds", raw)?);
        }
        if let Some(raw) = &self.milliseconds {
            inputs = inputs.milliseconds(Amount::parse("milliseconds", raw)?);
        }
        if let Some(raw) = &self.microseconds {
            inputs = inputs.microseconds(Amount::parse("microseconds", raw)?);
        }
        Ok(inputs)
    }

    /// Option flags as a request; unset flags leave lower layers alone.
    fn overrides(&self) -> FormatRequest {
        FormatRequest {
            separator: self.separator.clone(),
            precision: self.precision.clone(),
            leading_zeroes: toggle(self.leading_zeroes, self.no_leading_zeroes),
            trailing_zeroes: toggle(self.trailing_zeroes, self.no_trailing_zeroes),
            infix_zeroes: toggle(self.infix_zeroes, self.no_infix_zeroes),
            all_zeroes: toggle(self.all_zeroes, self.no_all_zeroes),
            ..FormatRequest::default()
        }
    }
}

/// `--x` / `--no-x` pair: `None` when neither was given.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// A layer of formatting defaults, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Config,
    Env,
    Request,
    Flags,
}

impl Layer {
    fn label(self) -> &'static str {
        match self {
            Layer::Config => "invalid config file",
            Layer::Env => "invalid ND_PRECISION",
            Layer::Request => "invalid request",
            Layer::Flags => "invalid --precision",
        }
    }
}

/// Merge option layers and parse the result once.
///
/// Raw values are overlaid first so a bad value in a lower layer is
/// harmless when a higher layer replaces it. A parse failure is blamed on
/// the layer that supplied the winning precision.
fn resolve_options(layers: Vec<(Layer, FormatRequest)>) -> Result<FormatOptions> {
    let origin = layers
        .iter()
        .rev()
        .find(|(_, layer)| layer.precision.is_some())
        .map(|(origin, _)| *origin);
    let merged = layers
        .into_iter()
        .fold(FormatRequest::default(), |acc, (_, layer)| acc.overlay(layer));
    merged
        .options(FormatOptions::default())
        .with_context(|| origin.map_or("invalid options", Layer::label))
}

fn env_overrides() -> FormatRequest {
    FormatRequest {
        separator: env::separator(),
        precision: env::precision(),
        ..FormatRequest::default()
    }
}

fn main() {
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {source}")]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn read_request(raw: &str) -> Result<FormatRequest> {
    let text = if raw == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        raw.to_string()
    };
    serde_json::from_str(&text).context("invalid request JSON")
}

fn run() -> Result<()> {
    // No arguments at all: show help
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse();
    setup_logging();

    let config = Config::load(cli.config.as_deref())?;
    let request = match &cli.request {
        Some(raw) => read_request(raw)?,
        None => FormatRequest::default(),
    };

    // Checks run in a fixed order: value types, source count, precision
    let inputs = match &cli.request {
        Some(_) => request.inputs()?,
        None => cli.inputs()?,
    };
    let source = inputs.into_source()?;

    let options = resolve_options(vec![
        (Layer::Config, config.into_request()),
        (Layer::Env, env_overrides()),
        (Layer::Request, request.options_only()),
        (Layer::Flags, cli.overrides()),
    ])?;
    tracing::debug!(?source, ?options, "formatting");

    let formatted = options.format(source)?;
    println!("{}", output::render(&formatted, cli.output)?);
    Ok(())
}
