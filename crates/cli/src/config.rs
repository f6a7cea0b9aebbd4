// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User defaults for formatting, read from a TOML file.
//!
//! ```toml
//! separator = " "
//! precision = "minutes"
//! infix_zeroes = true
//! ```

use std::path::{Path, PathBuf};

use nd_core::FormatRequest;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_DIR: &str = "nd";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Formatting defaults. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub separator: Option<String>,
    pub precision: Option<String>,
    pub leading_zeroes: Option<bool>,
    pub trailing_zeroes: Option<bool>,
    pub infix_zeroes: Option<bool>,
    pub all_zeroes: Option<bool>,
}

impl Config {
    /// Load from `explicit`, else ND_CONFIG, else the default location.
    ///
    /// Only an explicitly named file has to exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = explicit.map(Path::to_path_buf).or_else(crate::env::config_path);
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            return Self::read(&path);
        }

        match default_path() {
            Some(path) if path.exists() => Self::read(&path),
            _ => {
                tracing::debug!("no config file, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The defaults as a request carrying options only.
    pub fn into_request(self) -> FormatRequest {
        FormatRequest {
            separator: self.separator,
            precision: self.precision,
            leading_zeroes: self.leading_zeroes,
            trailing_zeroes: self.trailing_zeroes,
            infix_zeroes: self.infix_zeroes,
            all_zeroes: self.all_zeroes,
            ..FormatRequest::default()
        }
    }
}

/// `$XDG_CONFIG_HOME/nd/config.toml`, falling back to the platform config dir.
fn default_path() -> Option<PathBuf> {
    crate::env::xdg_config_home()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
