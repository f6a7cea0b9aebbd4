// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The formatting pipeline: normalize, decompose, filter zeroes, render.

use crate::decompose::decompose;
use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::render::{render, Formatted};
use crate::source::{DurationInputs, DurationSource};
use crate::zeroes::keep_zeroes;

impl FormatOptions {
    /// Format `source`, keeping the parts alongside the string.
    pub fn format(&self, source: impl Into<DurationSource>) -> Result<Formatted, FormatError> {
        let magnitude = source.into().normalize()?;
        let parts = decompose(magnitude.micros, self.precision);
        let kept = keep_zeroes(&parts, self.zeroes);
        Ok(render(
            kept,
            self.precision,
            &self.separator,
            magnitude.negative,
        ))
    }
}

/// Format a duration as a compact string such as `"3h20m"` or `"-1m15s"`.
///
/// ```
/// use std::time::Duration;
/// use nd_core::{format_duration, FormatOptions};
///
/// let s = format_duration(Duration::from_secs(12_000), &FormatOptions::new())?;
/// assert_eq!(s, "3h20m");
/// # Ok::<(), nd_core::FormatError>(())
/// ```
pub fn format_duration(
    source: impl Into<DurationSource>,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    options.format(source).map(String::from)
}

/// Like [`format_duration`], for callers holding the four optional sources.
///
/// Fails with [`FormatError::InvalidInput`] unless exactly one is set.
pub fn format_inputs(inputs: DurationInputs, options: &FormatOptions) -> Result<String, FormatError> {
    format_duration(inputs.into_source()?, options)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
