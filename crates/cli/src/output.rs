// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use nd_core::Formatted;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a formatted duration for stdout, without the trailing newline.
pub fn render(formatted: &Formatted, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(formatted.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(formatted)?),
    }
}
