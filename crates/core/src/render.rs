// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turn filtered parts into the final string.

use serde::Serialize;
use std::fmt;

use crate::decompose::Part;
use crate::unit::Unit;

/// A rendered duration together with the parts it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Formatted {
    /// The rendered string, e.g. `"-2m11s"`.
    pub formatted: String,
    /// Whether a minus sign was rendered.
    pub negative: bool,
    /// Parts in rendering order, never empty.
    pub parts: Vec<Part>,
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

impl From<Formatted> for String {
    fn from(formatted: Formatted) -> Self {
        formatted.formatted
    }
}

/// Render `parts` as `{amount}{abbreviation}` joined by `separator`.
///
/// An empty `parts` renders as a single zero of `precision`. The minus sign
/// is only shown when some rendered part is non-zero, so zero is never `-0s`.
pub fn render(mut parts: Vec<Part>, precision: Unit, separator: &str, negative: bool) -> Formatted {
    if parts.is_empty() {
        parts.push(Part::new(precision, 0));
    }

    let body = parts
        .iter()
        .map(|part| format!("{}{}", part.amount, part.unit.abbreviation()))
        .collect::<Vec<_>>()
        .join(separator);

    let negative = negative && parts.iter().any(|part| !part.is_zero());
    let formatted = if negative { format!("-{}", body) } else { body };

    Formatted {
        formatted,
        negative,
        parts,
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
