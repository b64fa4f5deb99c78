// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `search` to query a corpus file once, `facets` to list
//! the folder and year values a corpus offers, and `replay` to push a
//! sequence of keystrokes through the debounced session on a simulated clock
//! and see which ones would actually have produced results.

pub mod display;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use docsift::FieldScope;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Search, filter and highlight a document corpus",
    version
)]
pub struct Cli {
    /// JSON config file (debounceMs, pageLimit, headerLimit)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked, highlighted results
    Search {
        /// Path to a JSON array of document records
        corpus: PathBuf,

        /// Search text (matched case-insensitively as a substring)
        query: String,

        /// Only records in this folder ("all" for no filter)
        #[arg(long, default_value = "all")]
        folder: String,

        /// Only records in this year range ("all" for no filter)
        #[arg(long, default_value = "all")]
        year: String,

        /// Which fields to search
        #[arg(long, value_enum, default_value_t = ScopeArg::All)]
        scope: ScopeArg,

        /// Maximum number of results (defaults to the configured page limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of the boxed display
        #[arg(long)]
        json: bool,
    },

    /// List the folder and year values present in a corpus
    Facets {
        /// Path to a JSON array of document records
        corpus: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay keystrokes through the debounced session
    ///
    /// Each argument is the full contents of the search box after one
    /// keystroke, e.g. `replay corpus.json A AI AIE`. An empty string clears
    /// the box.
    Replay {
        /// Path to a JSON array of document records
        corpus: PathBuf,

        /// Successive search box contents
        #[arg(required = true)]
        keystrokes: Vec<String>,

        /// Simulated time between keystrokes in milliseconds
        #[arg(long, default_value = "100")]
        interval_ms: u64,

        /// Override the debounce window in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Maximum number of results per settle event
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// `--scope` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    All,
    Title,
    Abstract,
}

impl From<ScopeArg> for FieldScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::All => FieldScope::All,
            ScopeArg::Title => FieldScope::TitleOnly,
            ScopeArg::Abstract => FieldScope::AbstractOnly,
        }
    }
}
