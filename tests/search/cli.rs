//! End-to-end tests for the `docsift` binary.

use super::common::{write_temp, SAMPLE_JSON};
use std::process::{Command, Output};

fn docsift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docsift"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run docsift")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_search_json_output() {
    let corpus = write_temp(SAMPLE_JSON);
    let path = corpus.path().to_str().unwrap();
    let output = docsift(&["search", path, "AI", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 3);
    assert_eq!(report["outcome"]["outcome"], "results");
    let results = report["outcome"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["record"]["id"], "1");
}

#[test]
fn test_search_with_folder_filter() {
    let corpus = write_temp(SAMPLE_JSON);
    let path = corpus.path().to_str().unwrap();
    let output = docsift(&["search", path, "AI", "--folder", "EE", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 1);
    assert_eq!(report["outcome"]["results"][0]["record"]["id"], "ee-3");
}

#[test]
fn test_search_display_shows_count_and_highlight() {
    let corpus = write_temp(SAMPLE_JSON);
    let path = corpus.path().to_str().unwrap();
    let output = docsift(&["search", path, "education", "--scope", "title"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("1 result found"), "{text}");
    assert!(text.contains("[Education]"), "{text}");
}

#[test]
fn test_empty_query_is_not_an_error() {
    let corpus = write_temp(SAMPLE_JSON);
    let path = corpus.path().to_str().unwrap();
    let output = docsift(&["search", path, "   ", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"]["outcome"], "noSearch");
}

#[test]
fn test_facets_json() {
    let corpus = write_temp(SAMPLE_JSON);
    let path = corpus.path().to_str().unwrap();
    let output = docsift(&["facets", path, "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["records"], 3);
    assert_eq!(report["folders"]["CS"], 2);
    assert_eq!(report["folders"]["EE"], 1);
    assert!(report["years"].get("unknown").is_none());
}

#[test]
fn test_replay_reports_single_settle() {
    let corpus = write_temp(SAMPLE_JSON);
    let path = corpus.path().to_str().unwrap();
    let output = docsift(&["replay", path, "A", "AI", "AIE", "--interval-ms", "50"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("1 settle event(s)"), "{text}");
    assert!(text.contains("\"aie\""), "{text}");
}

#[test]
fn test_invalid_corpus_exits_with_error() {
    let corpus = write_temp(
        r#"[
        {"id": 1, "title": "a", "abstract": "", "filename": "", "source": "", "wordCount": 0},
        {"id": 1, "title": "b", "abstract": "", "filename": "", "source": "", "wordCount": 0}
    ]"#,
    );
    let path = corpus.path().to_str().unwrap();
    let output = docsift(&["search", path, "a"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate id"), "{stderr}");
}
