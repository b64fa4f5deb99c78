// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config file
//! and a partial file only overrides what it names.
//!
//! ```json
//! { "debounceMs": 150, "pageLimit": 50 }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Longest debounce window accepted from a config file.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Search engine and session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a query runs.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Result limit for the page-level search view.
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,

    /// Result limit for the header search dropdown.
    #[serde(default = "default_header_limit")]
    pub header_limit: usize,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_page_limit() -> usize {
    20
}

fn default_header_limit() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            page_limit: default_page_limit(),
            header_limit: default_header_limit(),
        }
    }
}

impl SearchConfig {
    /// Load a JSON config file. Out-of-range values fall back to defaults
    /// with a warning instead of failing the load.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(target: "docsift::config", path = %path.display(), ?config, "config loaded");
        Ok(config.sanitized())
    }

    /// Replace unusable values with defaults.
    pub fn sanitized(mut self) -> Self {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            tracing::warn!(
                target: "docsift::config",
                debounce_ms = self.debounce_ms,
                max = MAX_DEBOUNCE_MS,
                "debounce window too long, clamping"
            );
            self.debounce_ms = MAX_DEBOUNCE_MS;
        }
        if self.page_limit == 0 {
            tracing::warn!(target: "docsift::config", "pageLimit of 0 ignored, using default");
            self.page_limit = default_page_limit();
        }
        if self.header_limit == 0 {
            tracing::warn!(target: "docsift::config", "headerLimit of 0 ignored, using default");
            self.header_limit = default_header_limit();
        }
        self
    }

    #[inline]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit;
        self
    }
}
