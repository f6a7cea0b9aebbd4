// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

// --- Config file ---

/// Explicit config file path (ND_CONFIG). A missing file is an error.
pub fn config_path() -> Option<PathBuf> {
    non_empty("ND_CONFIG").map(PathBuf::from)
}

pub fn xdg_config_home() -> Option<PathBuf> {
    non_empty("XDG_CONFIG_HOME").map(PathBuf::from)
}

// --- Format defaults ---

/// Separator override (ND_SEPARATOR). An empty value is honoured.
pub fn separator() -> Option<String> {
    std::env::var("ND_SEPARATOR").ok()
}

pub fn precision() -> Option<String> {
    non_empty("ND_PRECISION")
}
