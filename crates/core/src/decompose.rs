// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Split a microsecond total into per-unit amounts.

use serde::Serialize;

use crate::unit::Unit;

/// One unit and its amount in a decomposed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Part {
    pub unit: Unit,
    pub amount: u128,
}

impl Part {
    pub fn new(unit: Unit, amount: u128) -> Self {
        Self { unit, amount }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

/// Decompose `micros` into one [`Part`] per unit from weeks down to
/// `precision`, inclusive.
///
/// Whatever remains below `precision` is dropped, not rounded.
pub fn decompose(micros: u128, precision: Unit) -> Vec<Part> {
    let mut remainder = micros;
    let parts: Vec<Part> = Unit::ALL[..=precision.index()]
        .iter()
        .map(|&unit| {
            let size = unit.micros();
            let amount = remainder / size;
            remainder %= size;
            Part::new(unit, amount)
        })
        .collect();
    tracing::trace!(%micros, %precision, dropped = %remainder, "decomposed");
    parts
}

#[cfg(test)]
#[path = "decompose_tests.rs"]
mod tests;
