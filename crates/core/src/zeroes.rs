// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Zero suppression.
//!
//! A zero-valued part is classified by its position relative to the first
//! and last non-zero parts of the sequence it came from:
//!
//! ```text
//!   0w  3d  0h  12m  0s
//!   ^^      ^^       ^^
//!   |       infix    trailing
//!   leading
//! ```
//!
//! Both bounds are computed once against the unfiltered sequence; each zero
//! is then kept or dropped by its own class alone. Non-zero parts are always
//! kept.

use crate::decompose::Part;

/// Which classes of zero-valued parts survive filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroFlags {
    /// Zeroes before the first non-zero part.
    pub leading: bool,
    /// Zeroes after the last non-zero part.
    pub trailing: bool,
    /// Zeroes strictly between two non-zero parts.
    pub infix: bool,
}

impl ZeroFlags {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            leading: true,
            trailing: true,
            infix: true,
        }
    }

    pub fn any(&self) -> bool {
        self.leading || self.trailing || self.infix
    }

    fn keeps(&self, kind: ZeroKind) -> bool {
        match kind {
            ZeroKind::Leading => self.leading,
            ZeroKind::Infix => self.infix,
            ZeroKind::Trailing => self.trailing,
        }
    }
}

/// Position of a zero-valued part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZeroKind {
    Leading,
    Infix,
    Trailing,
}

/// Classify the zero at `index` given the bounds of the non-zero run.
fn classify(index: usize, first: usize, last: usize) -> ZeroKind {
    if index < first {
        ZeroKind::Leading
    } else if index > last {
        ZeroKind::Trailing
    } else {
        ZeroKind::Infix
    }
}

/// Filter `parts`, keeping zero-valued parts only where `flags` allows.
///
/// When every part is zero there is no position to classify against: the
/// whole sequence is kept if any flag is set, otherwise nothing is.
pub fn keep_zeroes(parts: &[Part], flags: ZeroFlags) -> Vec<Part> {
    let first = parts.iter().position(|part| !part.is_zero());
    let last = parts.iter().rposition(|part| !part.is_zero());

    let (Some(first), Some(last)) = (first, last) else {
        return if flags.any() {
            parts.to_vec()
        } else {
            Vec::new()
        };
    };

    let kept: Vec<Part> = parts
        .iter()
        .enumerate()
        .filter(|(index, part)| !part.is_zero() || flags.keeps(classify(*index, first, last)))
        .map(|(_, part)| *part)
        .collect();
    tracing::trace!(
        before = parts.len(),
        after = kept.len(),
        ?flags,
        "filtered zero parts"
    );
    kept
}

#[cfg(test)]
#[path = "zeroes_tests.rs"]
mod tests;
