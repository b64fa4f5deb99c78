//! Ingestion tests: JSON corpus files, validation failures, config files.

use super::common::{write_temp, SAMPLE_JSON};
use docsift::{ingest, rank, Corpus, CorpusError, Query, SearchConfig};

#[test]
fn test_load_corpus_file() {
    let file = write_temp(SAMPLE_JSON);
    let corpus = ingest::load_path(file.path()).unwrap();

    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.total_words(), 28000);
    let third = corpus.all().nth(2).unwrap();
    assert_eq!(third.id.as_str(), "ee-3");
    assert_eq!(third.year_range, None);
}

#[test]
fn test_loaded_file_searches_like_the_sample() {
    let file = write_temp(SAMPLE_JSON);
    let corpus = ingest::load_path(file.path()).unwrap();
    let ranked = rank(&corpus, &Query::text("AI"), 10);

    let scores: Vec<u32> = ranked.iter().map(|m| m.score).collect();
    // Third record only matches through its filename
    assert_eq!(scores, vec![5, 2, 1]);
}

#[test]
fn test_duplicate_ids_in_file_are_rejected() {
    let json = r#"[
        {"id": 7, "title": "a", "abstract": "", "filename": "", "source": "", "wordCount": 0},
        {"id": "7", "title": "b", "abstract": "", "filename": "", "source": "", "wordCount": 0}
    ]"#;
    let records = ingest::records_from_str(json).unwrap();
    match Corpus::load(records) {
        Err(CorpusError::DuplicateId { id, first, second }) => {
            assert_eq!(id.as_str(), "7");
            assert_eq!((first, second), (0, 1));
        }
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_names_the_path() {
    let file = write_temp(r#"[{"id": 1}]"#);
    let err = ingest::load_path(file.path()).unwrap_err();
    assert!(matches!(err, CorpusError::Malformed { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_null_facets_are_absent() {
    let json = r#"[{"id": 1, "title": "t", "abstract": "", "filename": "", "folder": null,
                    "source": "", "wordCount": 0}]"#;
    let records = ingest::records_from_str(json).unwrap();
    assert_eq!(records[0].folder, None);
    assert_eq!(records[0].year_range, None);
}

#[test]
fn test_config_file_overrides_defaults() {
    let file = write_temp(r#"{"debounceMs": 120, "headerLimit": 3}"#);
    let config = SearchConfig::from_path(file.path()).unwrap();
    assert_eq!(config.debounce_ms, 120);
    assert_eq!(config.header_limit, 3);
    assert_eq!(config.page_limit, 20);
}
