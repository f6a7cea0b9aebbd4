// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting options.

use serde::Deserialize;

use crate::error::FormatError;
use crate::unit::Unit;
use crate::zeroes::ZeroFlags;

/// How a duration is rendered.
///
/// Defaults: no separator, all zero parts suppressed, `seconds` precision.
///
/// Deserializes from the flat keyword form, every key optional:
///
/// ```
/// let options: nd_core::FormatOptions =
///     serde_json::from_str(r#"{"separator": " ", "all_zeroes": true, "precision": "hours"}"#)?;
/// assert!(options.zeroes.infix);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "OptionKeywords")]
pub struct FormatOptions {
    pub separator: String,
    pub zeroes: ZeroFlags,
    pub precision: Unit,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn leading_zeroes(mut self, keep: bool) -> Self {
        self.zeroes.leading = keep;
        self
    }

    pub fn trailing_zeroes(mut self, keep: bool) -> Self {
        self.zeroes.trailing = keep;
        self
    }

    pub fn infix_zeroes(mut self, keep: bool) -> Self {
        self.zeroes.infix = keep;
        self
    }

    /// Shorthand that turns on all three zero flags. `false` leaves them as is.
    pub fn all_zeroes(mut self, keep: bool) -> Self {
        if keep {
            self.zeroes = ZeroFlags::all();
        }
        self
    }

    pub fn precision(mut self, precision: Unit) -> Self {
        self.precision = precision;
        self
    }
}

/// Wire form of [`FormatOptions`]: the keywords of a format call.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OptionKeywords {
    separator: String,
    leading_zeroes: bool,
    trailing_zeroes: bool,
    infix_zeroes: bool,
    all_zeroes: bool,
    precision: Option<String>,
}

impl TryFrom<OptionKeywords> for FormatOptions {
    type Error = FormatError;

    fn try_from(keywords: OptionKeywords) -> Result<Self, Self::Error> {
        let precision = match keywords.precision {
            Some(name) => name.parse()?,
            None => Unit::default(),
        };
        Ok(FormatOptions::new()
            .separator(keywords.separator)
            .leading_zeroes(keywords.leading_zeroes)
            .trailing_zeroes(keywords.trailing_zeroes)
            .infix_zeroes(keywords.infix_zeroes)
            .all_zeroes(keywords.all_zeroes)
            .precision(precision))
    }
}
