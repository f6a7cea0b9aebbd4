// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised before any formatting work starts.

use thiserror::Error;

/// Reasons a format request is rejected.
///
/// All variants are detected up front; a rejected request never produces a
/// partial string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No duration source, or more than one, was supplied.
    #[error("expected exactly one of duration, seconds, milliseconds or microseconds, got {given}")]
    InvalidInput { given: usize },

    /// A duration source holds a value of the wrong type.
    #[error("expected {expected} for {field}, got {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// The precision does not name a known unit.
    #[error("unknown precision '{given}', expected one of weeks, days, hours, minutes, seconds, milliseconds, microseconds (or the singular)")]
    InvalidPrecision { given: String },

    /// The value is numeric but too large to count in microseconds.
    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },
}
