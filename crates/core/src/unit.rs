// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed table of time units, largest first.
//!
//! Every unit knows its size in microseconds, the finest resolution the
//! formatter works in. Calendar units (months, years) are deliberately absent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

const MICROS_PER_MILLI: u128 = 1_000;
const MICROS_PER_SECOND: u128 = 1_000 * MICROS_PER_MILLI;
const MICROS_PER_MINUTE: u128 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u128 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: u128 = 24 * MICROS_PER_HOUR;
const MICROS_PER_WEEK: u128 = 7 * MICROS_PER_DAY;

/// A unit of elapsed time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Weeks,
    Days,
    Hours,
    Minutes,
    #[default]
    Seconds,
    Milliseconds,
    Microseconds,
}

impl Unit {
    /// All units, largest first. Decomposition walks this table in order.
    pub const ALL: [Unit; 7] = [
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
        Unit::Milliseconds,
        Unit::Microseconds,
    ];

    /// Size of one unit in microseconds.
    pub fn micros(self) -> u128 {
        match self {
            Unit::Weeks => MICROS_PER_WEEK,
            Unit::Days => MICROS_PER_DAY,
            Unit::Hours => MICROS_PER_HOUR,
            Unit::Minutes => MICROS_PER_MINUTE,
            Unit::Seconds => MICROS_PER_SECOND,
            Unit::Milliseconds => MICROS_PER_MILLI,
            Unit::Microseconds => 1,
        }
    }

    /// Suffix used when rendering, e.g. `"h"` in `"3h"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::Weeks => "w",
            Unit::Days => "d",
            Unit::Hours => "h",
            Unit::Minutes => "m",
            Unit::Seconds => "s",
            Unit::Milliseconds => "ms",
            Unit::Microseconds => "µs",
        }
    }

    /// Plural lowercase name, as accepted for `precision`.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Milliseconds => "milliseconds",
            Unit::Microseconds => "microseconds",
        }
    }

    /// Position in [`Unit::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = FormatError;

    /// Parse a precision name. Plural and singular forms are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == name || unit.name().strip_suffix('s') == Some(name.as_str()))
            .ok_or_else(|| FormatError::InvalidPrecision {
                given: s.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
