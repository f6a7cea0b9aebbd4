// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration sources and their normalization to a signed microsecond count.
//!
//! A format call takes exactly one source: a structured [`SignedDuration`] or
//! a count of seconds, milliseconds or microseconds. Fractional counts are
//! truncated toward zero once scaled to microseconds, never rounded.

use std::ops::Neg;
use std::time::Duration;

use crate::error::FormatError;
use crate::unit::Unit;

/// A numeric count of some unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Int(i128),
    Float(f64),
}

impl Amount {
    /// Parse a raw textual value supplied for `field`.
    ///
    /// Integers are tried first so large counts keep full precision.
    /// Anything that is not a finite number is an [`FormatError::InvalidType`].
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, FormatError> {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i128>() {
            return Ok(Amount::Int(n));
        }
        match trimmed.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Amount::Float(x)),
            _ => Err(FormatError::InvalidType {
                field,
                expected: "int or float",
                found: format!("'{}'", raw),
            }),
        }
    }

    /// Scale to microseconds, truncating any fraction toward zero.
    fn to_micros(self, field: &'static str, micros_per_unit: u128) -> Result<i128, FormatError> {
        let per_unit = i128::try_from(micros_per_unit)
            .map_err(|_| FormatError::OutOfRange { field })?;
        match self {
            Amount::Int(n) => n
                .checked_mul(per_unit)
                .ok_or(FormatError::OutOfRange { field }),
            Amount::Float(x) => {
                if !x.is_finite() {
                    return Err(FormatError::InvalidType {
                        field,
                        expected: "int or float",
                        found: x.to_string(),
                    });
                }
                let scaled = (x * per_unit as f64).trunc();
                if scaled.abs() >= i128::MAX as f64 {
                    return Err(FormatError::OutOfRange { field });
                }
                Ok(scaled as i128)
            }
        }
    }
}

macro_rules! amount_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Amount {
                fn from(n: $ty) -> Self {
                    Amount::Int(i128::from(n))
                }
            }
        )*
    };
}

amount_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for Amount {
    fn from(x: f64) -> Self {
        Amount::Float(x)
    }
}

impl From<f32> for Amount {
    fn from(x: f32) -> Self {
        Amount::Float(f64::from(x))
    }
}

/// A [`Duration`] with a sign.
///
/// `std::time::Duration` cannot be negative, so the sign travels alongside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignedDuration {
    duration: Duration,
    negative: bool,
}

impl SignedDuration {
    pub fn new(duration: Duration, negative: bool) -> Self {
        Self { duration, negative }
    }

    /// Magnitude without the sign.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl From<Duration> for SignedDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration, false)
    }
}

impl Neg for SignedDuration {
    type Output = SignedDuration;

    fn neg(self) -> Self::Output {
        Self::new(self.duration, !self.negative)
    }
}

/// Exactly one source of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationSource {
    Duration(SignedDuration),
    Seconds(Amount),
    Milliseconds(Amount),
    Microseconds(Amount),
}

impl DurationSource {
    /// Name of the keyword this source is supplied under.
    pub fn field(&self) -> &'static str {
        match self {
            DurationSource::Duration(_) => "duration",
            DurationSource::Seconds(_) => "seconds",
            DurationSource::Milliseconds(_) => "milliseconds",
            DurationSource::Microseconds(_) => "microseconds",
        }
    }

    /// Reduce to a non-negative microsecond count and a sign.
    pub fn normalize(self) -> Result<Magnitude, FormatError> {
        let field = self.field();
        let magnitude = match self {
            DurationSource::Duration(d) => Magnitude {
                micros: d.duration().as_micros(),
                negative: d.is_negative(),
            },
            DurationSource::Seconds(amount) => {
                Magnitude::from_signed(amount.to_micros(field, Unit::Seconds.micros())?)
            }
            DurationSource::Milliseconds(amount) => {
                Magnitude::from_signed(amount.to_micros(field, Unit::Milliseconds.micros())?)
            }
            DurationSource::Microseconds(amount) => {
                Magnitude::from_signed(amount.to_micros(field, Unit::Microseconds.micros())?)
            }
        };
        tracing::trace!(
            field,
            micros = %magnitude.micros,
            negative = magnitude.negative,
            "normalized duration source"
        );
        Ok(magnitude)
    }
}

impl From<Duration> for DurationSource {
    fn from(duration: Duration) -> Self {
        DurationSource::Duration(duration.into())
    }
}

impl From<SignedDuration> for DurationSource {
    fn from(duration: SignedDuration) -> Self {
        DurationSource::Duration(duration)
    }
}

/// A total elapsed time in microseconds, with the sign carried separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    pub micros: u128,
    pub negative: bool,
}

impl Magnitude {
    fn from_signed(micros: i128) -> Self {
        Self {
            micros: micros.unsigned_abs(),
            negative: micros < 0,
        }
    }
}

/// The four optional duration keywords of a format call.
///
/// Exactly one must be set; [`DurationInputs::into_source`] enforces that.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DurationInputs {
    duration: Option<SignedDuration>,
    seconds: Option<Amount>,
    milliseconds: Option<Amount>,
    microseconds: Option<Amount>,
}

impl DurationInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: impl Into<SignedDuration>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn seconds(mut self, amount: impl Into<Amount>) -> Self {
        self.seconds = Some(amount.into());
        self
    }

    pub fn milliseconds(mut self, amount: impl Into<Amount>) -> Self {
        self.milliseconds = Some(amount.into());
        self
    }

    pub fn microseconds(mut self, amount: impl Into<Amount>) -> Self {
        self.microseconds = Some(amount.into());
        self
    }

    /// Number of sources that were set.
    pub fn given(&self) -> usize {
        [
            self.duration.is_some(),
            self.seconds.is_some(),
            self.milliseconds.is_some(),
            self.microseconds.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn into_source(self) -> Result<DurationSource, FormatError> {
        match (
            self.duration,
            self.seconds,
            self.milliseconds,
            self.microseconds,
        ) {
            (Some(d), None, None, None) => Ok(DurationSource::Duration(d)),
            (None, Some(s), None, None) => Ok(DurationSource::Seconds(s)),
            (None, None, Some(ms), None) => Ok(DurationSource::Milliseconds(ms)),
            (None, None, None, Some(us)) => Ok(DurationSource::Microseconds(us)),
            _ => Err(FormatError::InvalidInput {
                given: self.given(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
