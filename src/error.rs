// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that can reach a caller.
//!
//! Only corpus loading and configuration loading can fail. Scoring, ranking,
//! highlighting and the session controller are total over a loaded corpus,
//! and an unknown filter value is an unsatisfiable filter, not an error.

use crate::types::RecordId;
use std::fmt;
use std::path::PathBuf;

/// Why a corpus was rejected. The corpus is not installed when this is returned.
#[derive(Debug)]
pub enum CorpusError {
    /// Two records share an id. Positions are load-order indexes.
    DuplicateId {
        id: RecordId,
        first: usize,
        second: usize,
    },
    /// A record has an empty id.
    EmptyId { position: usize },
    /// The corpus source could not be decoded into records.
    Malformed {
        origin: String,
        source: serde_json::Error,
    },
    /// The corpus source could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::DuplicateId { id, first, second } => {
                write!(
                    f,
                    "invalid corpus: duplicate id '{}' at records {} and {}",
                    id, first, second
                )
            }
            CorpusError::EmptyId { position } => {
                write!(f, "invalid corpus: record {} has an empty id", position)
            }
            CorpusError::Malformed { origin, source } => {
                write!(f, "malformed corpus in {}: {}", origin, source)
            }
            CorpusError::Io { path, source } => {
                write!(f, "failed to read corpus {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Malformed { source, .. } => Some(source),
            CorpusError::Io { source, .. } => Some(source),
            CorpusError::DuplicateId { .. } | CorpusError::EmptyId { .. } => None,
        }
    }
}

/// Why a configuration file could not be used.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}
