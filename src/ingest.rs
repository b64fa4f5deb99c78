// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus ingestion: JSON array of records → `Vec<DocumentRecord>`.
//!
//! Shape problems (missing fields, wrong types) are caught here as
//! `CorpusError::Malformed`. Identity problems (duplicate or empty ids) are
//! caught by `Corpus::load`, which sees the whole set.

use crate::corpus::Corpus;
use crate::error::CorpusError;
use crate::types::DocumentRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decode records from any reader. `origin` names the source in errors.
pub fn records_from_reader<R: Read>(reader: R, origin: &str) -> Result<Vec<DocumentRecord>, CorpusError> {
    serde_json::from_reader(BufReader::new(reader)).map_err(|source| CorpusError::Malformed {
        origin: origin.to_string(),
        source,
    })
}

/// Decode records from an in-memory JSON string.
pub fn records_from_str(json: &str) -> Result<Vec<DocumentRecord>, CorpusError> {
    serde_json::from_str(json).map_err(|source| CorpusError::Malformed {
        origin: "<string>".to_string(),
        source,
    })
}

/// Decode records from a JSON file.
pub fn records_from_path(path: impl AsRef<Path>) -> Result<Vec<DocumentRecord>, CorpusError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = records_from_reader(file, &path.display().to_string())?;
    tracing::debug!(
        target: "docsift::corpus",
        path = %path.display(),
        records = records.len(),
        "records decoded"
    );
    Ok(records)
}

/// Decode and load a corpus file in one step.
pub fn load_path(path: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
    Corpus::load(records_from_path(path)?)
}
