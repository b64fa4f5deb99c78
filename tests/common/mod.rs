//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::{Corpus, DocumentRecord, ScoredMatch, SearchConfig, SearchEngine};
use std::io::Write;

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_record, make_record_with_facets, sample_corpus, sample_records, thesis_corpus};

// ============================================================================
// FIXTURES
// ============================================================================

/// Corpus JSON in the exporter's shape, with both id styles and sentinels.
pub const SAMPLE_JSON: &str = r#"[
  {"id": 1, "title": "AI in Education", "abstract": "uses AI", "filename": "education.pdf",
   "folder": "CS", "yearRange": "2020-2021", "source": "library", "wordCount": 12000},
  {"id": 2, "title": "Database Systems", "abstract": "AI is mentioned", "filename": "databases.pdf",
   "folder": "CS", "yearRange": "2019", "source": "library", "wordCount": 9000},
  {"id": "ee-3", "title": "Power Electronics", "abstract": "converter design", "filename": "power_ai_notes.pdf",
   "folder": "EE", "yearRange": "unknown", "source": "archive", "wordCount": 7000}
]"#;

/// Engine over the two-record sample corpus with default settings.
pub fn sample_engine() -> SearchEngine {
    SearchEngine::new(sample_corpus(), SearchConfig::default())
}

/// Load records, panicking on an invalid corpus.
pub fn load(records: Vec<DocumentRecord>) -> Corpus {
    Corpus::load(records).expect("test corpus should be valid")
}

/// Write JSON to a temporary file that lives as long as the handle.
pub fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Result ids in ranked order.
pub fn ids(matches: &[ScoredMatch]) -> Vec<String> {
    matches.iter().map(|m| m.id().to_string()).collect()
}
