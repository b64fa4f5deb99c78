//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::corpus::Corpus;
use crate::types::DocumentRecord;

/// Create a record with a numeric id and the two main text fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: u64, title: &str, abstract_text: &str) -> DocumentRecord {
    DocumentRecord::new(id, title, abstract_text)
}

/// Create a record with both facets set.
pub fn make_record_with_facets(
    id: u64,
    title: &str,
    abstract_text: &str,
    folder: &str,
    year_range: &str,
) -> DocumentRecord {
    make_record(id, title, abstract_text)
        .with_folder(folder)
        .with_year_range(year_range)
}

/// The two-record corpus used throughout the docs:
///
/// | id | title              | abstract          | folder | yearRange |
/// |----|--------------------|-------------------|--------|-----------|
/// | 1  | AI in Education    | uses AI           | CS     | 2020-2021 |
/// | 2  | Database Systems   | AI is mentioned   | CS     | 2019      |
pub fn sample_records() -> Vec<DocumentRecord> {
    vec![
        make_record_with_facets(1, "AI in Education", "uses AI", "CS", "2020-2021")
            .with_filename("education.pdf"),
        make_record_with_facets(2, "Database Systems", "AI is mentioned", "CS", "2019")
            .with_filename("databases.pdf"),
    ]
}

/// `sample_records()` loaded into a corpus.
pub fn sample_corpus() -> Corpus {
    match Corpus::load(sample_records()) {
        Ok(corpus) => corpus,
        Err(err) => panic!("sample corpus is valid: {err}"),
    }
}

/// A larger corpus spread over several folders and years.
pub fn thesis_corpus() -> Vec<DocumentRecord> {
    let folders = ["CS", "EE", "ME", "unknown"];
    let years = ["2019", "2020-2021", "2022", "unknown"];
    let topics = [
        ("Neural Networks for Grading", "deep learning applied to essays"),
        ("Power Grid Stability", "control of distributed generation"),
        ("Robot Arm Kinematics", "inverse kinematics with learning"),
        ("Database Indexing", "b-trees and learned indexes"),
        ("Signal Denoising", "wavelets for audio"),
    ];

    (0..40u64)
        .map(|i| {
            let (title, abstract_text) = topics[i as usize % topics.len()];
            make_record_with_facets(
                100 + i,
                title,
                abstract_text,
                folders[i as usize % folders.len()],
                years[(i as usize / 2) % years.len()],
            )
            .with_filename(&format!("thesis_{}.pdf", 100 + i))
            .with_word_count(1000 + i * 10)
        })
        .collect()
}
