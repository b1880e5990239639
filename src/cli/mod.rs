// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the spicerack command-line interface.
//!
//! Four subcommands over a catalog data root: `search` to rank, `suggest` for
//! autocomplete names, `go` to resolve a query to the page it would open, and
//! `inspect` to dump what was loaded. Tuning flags override the catalog's own
//! `search.json` for one invocation.

pub mod display;

use clap::{Args, Parser, Subcommand};
use spicerack::SearchConfigOverride;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spicerack",
    about = "Fuzzy catalog search for products and services",
    version
)]
pub struct Cli {
    /// Catalog root containing one directory per language
    #[arg(short, long, global = true, default_value = "data")]
    pub data: PathBuf,

    /// Catalog language; falls back to eng when missing
    #[arg(short, long, global = true, default_value = "eng")]
    pub lang: String,

    /// Emit JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Per-invocation overrides of the catalog's search config.
#[derive(Args, Debug, Default)]
pub struct TuningArgs {
    /// Maximum number of results to return
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Minimum similarity for a fuzzy name match, in [0, 1]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Queries shorter than this (after normalization) return nothing
    #[arg(long)]
    pub min_length: Option<usize>,
}

impl TuningArgs {
    pub fn overrides(&self) -> SearchConfigOverride {
        SearchConfigOverride {
            min_query_length: self.min_length,
            max_results: self.limit,
            fuzzy_threshold: self.threshold,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog items against a query
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        tuning: TuningArgs,

        /// Show every scoring signal behind each result
        #[arg(long)]
        explain: bool,
    },

    /// Autocomplete names for a partial query
    Suggest {
        /// Partial query
        query: String,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Print the page the best match for a query would open
    Go {
        /// Search query
        query: String,
    },

    /// Show the loaded catalog, config, aliases and redirects
    Inspect {
        /// Also print how this query expands through the alias table
        #[arg(long)]
        expand: Option<String>,
    },
}
