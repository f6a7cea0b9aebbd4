// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loosely typed format requests, as read from JSON.
//!
//! Every keyword of a format call is optional here and the duration sources
//! are arbitrary JSON values, so the checks the type system otherwise gives
//! for free happen at runtime. They run in a fixed order: value types first,
//! then the number of sources, then the precision name.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::render::Formatted;
use crate::source::{Amount, DurationInputs, DurationSource, SignedDuration};
use crate::unit::Unit;

const NANOS_PER_SEC: u64 = 1_000_000_000;

const AMOUNT_EXPECTED: &str = "int or float";
const DURATION_EXPECTED: &str = "duration object {secs, nanos, negative}";

/// A format call with every keyword optional.
///
/// ```json
/// {"duration": {"secs": 12000}, "separator": " ", "precision": "minutes"}
/// {"seconds": -131.9}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milliseconds: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microseconds: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_zeroes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_zeroes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infix_zeroes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_zeroes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
}

impl FormatRequest {
    /// Layer `upper` on top of `self`: every keyword set in `upper` wins.
    ///
    /// An `all_zeroes = true` below is expanded into the three zero flags
    /// when `upper` sets any of them, so a higher layer can still turn a
    /// single class back off.
    pub fn overlay(mut self, upper: FormatRequest) -> FormatRequest {
        let touches_zeroes = upper.leading_zeroes.is_some()
            || upper.trailing_zeroes.is_some()
            || upper.infix_zeroes.is_some();
        if touches_zeroes && upper.all_zeroes.is_none() && self.all_zeroes == Some(true) {
            self.all_zeroes = None;
            self.leading_zeroes = Some(true);
            self.trailing_zeroes = Some(true);
            self.infix_zeroes = Some(true);
        }

        FormatRequest {
            duration: upper.duration.or(self.duration),
            seconds: upper.seconds.or(self.seconds),
            milliseconds: upper.milliseconds.or(self.milliseconds),
            microseconds: upper.microseconds.or(self.microseconds),
            separator: upper.separator.or(self.separator),
            leading_zeroes: upper.leading_zeroes.or(self.leading_zeroes),
            trailing_zeroes: upper.trailing_zeroes.or(self.trailing_zeroes),
            infix_zeroes: upper.infix_zeroes.or(self.infix_zeroes),
            all_zeroes: upper.all_zeroes.or(self.all_zeroes),
            precision: upper.precision.or(self.precision),
        }
    }

    /// The keywords other than the duration sources.
    pub fn options_only(&self) -> FormatRequest {
        FormatRequest {
            duration: None,
            seconds: None,
            milliseconds: None,
            microseconds: None,
            ..self.clone()
        }
    }

    /// Type-check the duration sources without checking how many are set.
    pub fn inputs(&self) -> Result<DurationInputs, FormatError> {
        let mut inputs = DurationInputs::new();
        if let Some(value) = &self.duration {
            inputs = inputs.duration(duration_from_value(value)?);
        }
        if let Some(value) = &self.seconds {
            inputs = inputs.seconds(amount_from_value("seconds", value)?);
        }
        if let Some(value) = &self.milliseconds {
            inputs = inputs.milliseconds(amount_from_value("milliseconds", value)?);
        }
        if let Some(value) = &self.microseconds {
            inputs = inputs.microseconds(amount_from_value("microseconds", value)?);
        }
        Ok(inputs)
    }

    /// Apply the keywords that are set on top of `base`.
    pub fn options(&self, base: FormatOptions) -> Result<FormatOptions, FormatError> {
        let mut options = base;
        if let Some(separator) = &self.separator {
            options = options.separator(separator.as_str());
        }
        if let Some(keep) = self.leading_zeroes {
            options = options.leading_zeroes(keep);
        }
        if let Some(keep) = self.trailing_zeroes {
            options = options.trailing_zeroes(keep);
        }
        if let Some(keep) = self.infix_zeroes {
            options = options.infix_zeroes(keep);
        }
        if let Some(keep) = self.all_zeroes {
            options = options.all_zeroes(keep);
        }
        if let Some(precision) = &self.precision {
            options = options.precision(precision.parse::<Unit>()?);
        }
        Ok(options)
    }

    /// Validate the whole request into a source and options.
    pub fn resolve(&self, base: FormatOptions) -> Result<(DurationSource, FormatOptions), FormatError> {
        let source = self.inputs()?.into_source()?;
        let options = self.options(base)?;
        Ok((source, options))
    }

    pub fn format(&self, base: FormatOptions) -> Result<Formatted, FormatError> {
        let (source, options) = self.resolve(base)?;
        options.format(source)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn invalid_type(field: &'static str, expected: &'static str, value: &Value) -> FormatError {
    FormatError::InvalidType {
        field,
        expected,
        found: type_name(value).to_string(),
    }
}

fn amount_from_value(field: &'static str, value: &Value) -> Result<Amount, FormatError> {
    let Value::Number(n) = value else {
        return Err(invalid_type(field, AMOUNT_EXPECTED, value));
    };
    if let Some(i) = n.as_i64() {
        Ok(Amount::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Amount::from(u))
    } else if let Some(x) = n.as_f64() {
        Ok(Amount::from(x))
    } else {
        Err(invalid_type(field, AMOUNT_EXPECTED, value))
    }
}

fn duration_from_value(value: &Value) -> Result<SignedDuration, FormatError> {
    let Value::Object(map) = value else {
        return Err(invalid_type("duration", DURATION_EXPECTED, value));
    };
    if let Some(key) = map
        .keys()
        .find(|key| !matches!(key.as_str(), "secs" | "nanos" | "negative"))
    {
        return Err(FormatError::InvalidType {
            field: "duration",
            expected: DURATION_EXPECTED,
            found: format!("object with key '{}'", key),
        });
    }

    let secs = u64_field(map, "secs")?.ok_or_else(|| FormatError::InvalidType {
        field: "duration",
        expected: DURATION_EXPECTED,
        found: "object without 'secs'".to_string(),
    })?;
    let nanos = u64_field(map, "nanos")?.unwrap_or(0);
    if nanos >= NANOS_PER_SEC {
        return Err(FormatError::OutOfRange { field: "duration" });
    }
    let negative = match map.get("negative") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(other) => return Err(invalid_type("duration", DURATION_EXPECTED, other)),
    };

    // nanos < 1e9 so this fits u32 and Duration::new cannot carry into secs
    let nanos = u32::try_from(nanos).map_err(|_| FormatError::OutOfRange { field: "duration" })?;
    Ok(SignedDuration::new(Duration::new(secs, nanos), negative))
}

fn u64_field(map: &Map<String, Value>, key: &str) -> Result<Option<u64>, FormatError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| invalid_type("duration", DURATION_EXPECTED, value)),
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
