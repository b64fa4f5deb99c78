// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use docsift::types::ALL_FACET;
use docsift::{
    highlight_match, ingest, replay, Corpus, FacetFilter, FacetKind, FieldScope, HighlightedMatch,
    Query, SearchConfig, SearchEngine, SearchOutcome, SearchSession, SettleEvent,
};

mod cli;
use cli::display::{
    highlighted, pad_right, result_count, row, score_value, section_bot, section_mid, section_top,
    themed, tier_label, timing_ms, BOLD, BOX_WIDTH, CYAN, GRAY, WHITE,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("❌ {:#}", err);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for results and `--json`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "docsift=debug",
        _ => "docsift=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            corpus,
            query,
            folder,
            year,
            scope,
            limit,
            json,
        } => {
            let limit = limit.unwrap_or(config.page_limit);
            let engine = SearchEngine::new(load_corpus(&corpus)?, config);
            let query = Query::normalize(
                &query,
                FacetFilter::parse(&folder),
                FacetFilter::parse(&year),
                scope.into(),
            );
            for (kind, value) in [(FacetKind::Folder, &folder), (FacetKind::Year, &year)] {
                if !engine.facets().offers(kind, value) && !query.filter(kind).is_all() {
                    tracing::warn!(
                        target: "docsift::search",
                        facet = kind.as_str(),
                        value = %value,
                        "no record has this value, the filter will match nothing"
                    );
                }
            }
            run_search(&engine, &query, limit, json)
        }
        Commands::Facets { corpus, json } => run_facets(&load_corpus(&corpus)?, json),
        Commands::Replay {
            corpus,
            keystrokes,
            interval_ms,
            debounce_ms,
            limit,
        } => {
            let config = match debounce_ms {
                Some(ms) => config.with_debounce_ms(ms),
                None => config,
            };
            let limit = limit.unwrap_or(config.header_limit);
            let engine = SearchEngine::new(load_corpus(&corpus)?, config.clone());
            let session = SearchSession::with_config(engine, &config).with_limit(limit);
            run_replay(session, &keystrokes, Duration::from_millis(interval_ms))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    ingest::load_path(path).with_context(|| format!("loading corpus {}", path.display()))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'a> {
    query: &'a Query,
    total: usize,
    outcome: SearchOutcome<HighlightedMatch>,
}

fn run_search(engine: &SearchEngine, query: &Query, limit: usize, json: bool) -> Result<()> {
    let start = Instant::now();
    let (outcome, total) = if query.is_no_search() {
        (SearchOutcome::NoSearch, 0)
    } else {
        let ranked = engine.rank_counted(query, limit);
        let hits = ranked
            .matches
            .into_iter()
            .map(|hit| highlight_match(hit, query))
            .collect();
        (SearchOutcome::Results(hits), ranked.total)
    };
    let elapsed = start.elapsed();

    if json {
        let report = SearchReport {
            query,
            total,
            outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    section_top("SEARCH");
    row(&format!(
        " {} {}",
        themed(GRAY, &[], "query "),
        themed(WHITE, &[BOLD], &format!("{:?}", query.raw_text))
    ));
    row(&format!(
        " {} {}   {} {}   {} {}",
        themed(GRAY, &[], "folder"),
        query.folder_filter.as_str(),
        themed(GRAY, &[], "year"),
        query.year_filter.as_str(),
        themed(GRAY, &[], "scope"),
        scope_name(query.field_scope)
    ));

    match &outcome {
        SearchOutcome::NoSearch => {
            section_mid("RESULTS");
            row(&format!(" {}", themed(GRAY, &[], "Nothing to search for")));
        }
        SearchOutcome::Results(hits) => {
            section_mid("RESULTS");
            row(&format!(" {}", result_count(hits.len(), total)));
            for hit in hits {
                print_hit(hit);
            }
        }
    }
    section_bot();
    println!(
        " {} ms",
        timing_ms(elapsed.as_secs_f64() * 1000.0)
    );
    Ok(())
}

fn print_hit(hit: &HighlightedMatch) {
    let record = &hit.hit.record;
    row("");
    row(&format!(
        " {} {}  {}",
        tier_label(hit.hit.tier),
        score_value(hit.hit.score),
        highlighted(&hit.title, BOX_WIDTH - 14)
    ));
    if !hit.abstract_text.spans.is_empty() {
        row(&format!("         {}", highlighted(&hit.abstract_text, BOX_WIDTH - 10)));
    }
    let meta = format!(
        "{}  {}  {}",
        pad_right(&record.filename, 24),
        record.folder.as_deref().unwrap_or("-"),
        record.year_range.as_deref().unwrap_or("-")
    );
    row(&format!("         {}", themed(GRAY, &[], &meta)));
}

fn scope_name(scope: FieldScope) -> &'static str {
    match scope {
        FieldScope::All => "all",
        FieldScope::TitleOnly => "title",
        FieldScope::AbstractOnly => "abstract",
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FACETS
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FacetReport {
    records: usize,
    total_words: u64,
    folders: BTreeMap<String, usize>,
    years: BTreeMap<String, usize>,
}

fn facet_counts(corpus: &Corpus, kind: FacetKind) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in corpus.all() {
        if let Some(value) = record.facet(kind) {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

fn run_facets(corpus: &Corpus, json: bool) -> Result<()> {
    let report = FacetReport {
        records: corpus.len(),
        total_words: corpus.total_words(),
        folders: facet_counts(corpus, FacetKind::Folder),
        years: facet_counts(corpus, FacetKind::Year),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    section_top("CORPUS");
    row(&format!(
        " {} records, {} words",
        themed(WHITE, &[BOLD], &report.records.to_string()),
        report.total_words
    ));
    for (label, kind, counts) in [
        ("FOLDERS", FacetKind::Folder, &report.folders),
        ("YEARS", FacetKind::Year, &report.years),
    ] {
        section_mid(label);
        for option in corpus.facets().options(kind) {
            let count = if option == ALL_FACET {
                report.records
            } else {
                counts.get(option).copied().unwrap_or(0)
            };
            row(&format!(
                " {} {}",
                pad_right(&themed(CYAN, &[], option), 24),
                themed(GRAY, &[], &count.to_string())
            ));
        }
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// REPLAY
// ═══════════════════════════════════════════════════════════════════════════

fn run_replay(mut session: SearchSession, keystrokes: &[String], interval: Duration) -> Result<()> {
    let inputs: Vec<&str> = keystrokes.iter().map(String::as_str).collect();
    let debounce = session.debounce();
    let events = replay(&mut session, &inputs, interval, Instant::now());

    section_top("REPLAY");
    row(&format!(
        " {} keystrokes, {} ms apart, {} ms debounce → {} settle event(s)",
        inputs.len(),
        interval.as_millis(),
        debounce.as_millis(),
        events.len()
    ));
    for event in &events {
        print_event(event);
    }
    section_bot();
    Ok(())
}

fn print_event(event: &SettleEvent) {
    section_mid(&format!("#{}", event.generation));
    let label = if event.is_searching {
        format!("{:?}", event.query.normalized_text)
    } else {
        "(cleared)".to_string()
    };
    row(&format!(" {}  {}", themed(WHITE, &[BOLD], &label), event.summary()));
    for hit in event.results.results() {
        row(&format!(
            "   {} {}  {}",
            tier_label(hit.hit.tier),
            score_value(hit.hit.score),
            highlighted(&hit.title, BOX_WIDTH - 16)
        ));
    }
}
