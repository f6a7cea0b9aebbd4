// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nd-core: compact human-readable duration formatting
//!
//! Turns an elapsed time into strings such as `"3h20m"`, `"1w 5d 13h 10m"`
//! or `"-2m11s"`.
//!
//! # Pipeline
//!
//! ```text
//! DurationSource ──normalize──▶ Magnitude { micros, negative }
//!                ──decompose──▶ [Part; weeks..=precision]
//!                ──keep_zeroes─▶ [Part] (zero parts filtered by position)
//!                ──render─────▶ Formatted
//! ```
//!
//! # Zero suppression
//!
//! Zero-valued parts are dropped unless their class is enabled in
//! [`ZeroFlags`]: *leading* (before the first non-zero part), *trailing*
//! (after the last) or *infix* (between two non-zero parts). See
//! [`keep_zeroes`].

pub mod decompose;
mod error;
pub mod format;
pub mod options;
pub mod render;
pub mod request;
pub mod source;
pub mod unit;
pub mod zeroes;

pub use decompose::{decompose, Part};
pub use error::FormatError;
pub use format::{format_duration, format_inputs};
pub use options::FormatOptions;
pub use render::{render, Formatted};
pub use request::FormatRequest;
pub use source::{Amount, DurationInputs, DurationSource, Magnitude, SignedDuration};
pub use unit::Unit;
pub use zeroes::{keep_zeroes, ZeroFlags};
