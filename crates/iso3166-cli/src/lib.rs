//! # iso3166-cli
//!
//! Command-line front end for the country code index.
//!
//! The binary reads one resource file, builds a [`CountryIndex`] and
//! answers a single query:
//!
//! ```text
//! iso3166-lookup code MD
//! iso3166-lookup name Österreich
//! iso3166-lookup --format json dump
//! ```
//!
//! The resource is taken from `--data` (or `ISO3166_DATA_PATH`), otherwise
//! it is looked up by language below `--data-dir`.

#![warn(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use iso3166_loader::{
    find_resource, Alpha2Config, Alpha2Parser, Alpha2Result, CountryIndex, CountryLookup,
    EmptyNamePolicy, ParseStats, DEFAULT_LANGUAGE,
};
use iso3166_types::CountryEntry;

/// Default directory searched for resource files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "iso3166-lookup")]
#[command(version)]
#[command(about = "Look up ISO 3166-1 alpha-2 codes and localized country names", long_about = None)]
pub struct Cli {
    /// Query to run.
    #[command(subcommand)]
    pub command: Command,

    /// Resource file to read
    #[arg(long, global = true, env = "ISO3166_DATA_PATH")]
    pub data: Option<PathBuf>,

    /// Directory searched for the resource when --data is not given
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Language of the resource, e.g. german
    #[arg(long, global = true, default_value = DEFAULT_LANGUAGE)]
    pub lang: String,

    /// Fail on an unreadable resource instead of treating it as empty
    #[arg(long, global = true)]
    pub strict: bool,

    /// Drop names that are empty after trimming
    #[arg(long, global = true)]
    pub filter_empty_names: bool,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,
}

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Query to run against the index.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the names listed for a country code
    Code {
        /// Country code, e.g. AT
        code: String,
    },

    /// Print a country code listing the given name
    Name {
        /// Country name, e.g. Österreich
        name: String,

        /// Print every code listing the name
        #[arg(long)]
        all: bool,
    },

    /// Print every entry, sorted by code
    Dump,

    /// Print parse statistics for the resource
    Stats,
}

#[derive(Serialize)]
struct CodeResult<'a> {
    code: &'a str,
    names: &'a [String],
}

#[derive(Serialize)]
struct NameResult<'a> {
    name: &'a str,
    codes: Vec<&'a str>,
}

#[derive(Serialize)]
struct StatsResult {
    codes: usize,
    names: usize,
    total_lines: usize,
    parsed_records: usize,
    skipped_lines: usize,
    overwritten_codes: usize,
    parse_time_ms: u64,
}

impl Cli {
    /// Builds the parser configuration from the flags.
    pub fn config(&self) -> Alpha2Config {
        Alpha2Config {
            empty_names: if self.filter_empty_names {
                EmptyNamePolicy::Filter
            } else {
                EmptyNamePolicy::Preserve
            },
            ..Default::default()
        }
    }

    /// Resolves the resource path from `--data` or `--data-dir`/`--lang`.
    pub fn resource_path(&self) -> Alpha2Result<PathBuf> {
        match &self.data {
            Some(path) => Ok(path.clone()),
            None => find_resource(&self.data_dir, &self.lang),
        }
    }
}

/// Loads the index selected by the arguments, with the statistics of
/// that parse.
///
/// Without `--strict`, a missing or unreadable resource is logged and an
/// empty index with empty statistics is returned.
pub fn load_index(cli: &Cli) -> Alpha2Result<(CountryIndex, ParseStats)> {
    match load_resource(cli) {
        Ok(loaded) => Ok(loaded),
        Err(e) if !cli.strict => {
            tracing::warn!("Could not load country codes: {}", e);
            Ok((CountryIndex::new(), ParseStats::default()))
        }
        Err(e) => Err(e),
    }
}

fn load_resource(cli: &Cli) -> Alpha2Result<(CountryIndex, ParseStats)> {
    let path = cli.resource_path()?;
    tracing::info!("Loading country codes from: {}", path.display());
    CountryIndex::from_parser(Alpha2Parser::from_path(&path, cli.config())?)
}

/// Runs the selected query against a loaded index and renders the result.
///
/// Does no I/O; `stats` must come from the parse that built `index`.
pub fn run(
    cli: &Cli,
    index: &CountryIndex,
    stats: &ParseStats,
) -> Result<String, Box<dyn std::error::Error>> {
    let output = match &cli.command {
        Command::Code { code } => {
            let names = index.names_for_code(code);
            match cli.format {
                OutputFormat::Text => names.join("\n"),
                OutputFormat::Json => serde_json::to_string_pretty(&CodeResult { code, names })?,
            }
        }
        Command::Name { name, all } => {
            let codes = if *all {
                index.codes_for_name(name)
            } else {
                index.code_for_name(name).into_iter().collect()
            };
            match cli.format {
                OutputFormat::Text => codes.join("\n"),
                OutputFormat::Json => serde_json::to_string_pretty(&NameResult { name, codes })?,
            }
        }
        Command::Dump => {
            let entries = index.entries();
            match cli.format {
                OutputFormat::Text => render_entries(&entries),
                OutputFormat::Json => serde_json::to_string_pretty(&entries)?,
            }
        }
        Command::Stats => {
            let result = StatsResult {
                codes: index.len(),
                names: index.name_count(),
                total_lines: stats.total_lines,
                parsed_records: stats.parsed_records,
                skipped_lines: stats.skipped_lines,
                overwritten_codes: stats.overwritten_codes,
                parse_time_ms: stats.parse_time_ms,
            };
            match cli.format {
                OutputFormat::Text => format!(
                    "{} codes, {} names\n{} lines read, {} parsed, {} skipped, {} overwritten ({:.1}% skipped)",
                    result.codes,
                    result.names,
                    result.total_lines,
                    result.parsed_records,
                    result.skipped_lines,
                    result.overwritten_codes,
                    stats.skip_rate()
                ),
                OutputFormat::Json => serde_json::to_string_pretty(&result)?,
            }
        }
    };

    Ok(output)
}

/// Renders entries back into resource line format.
fn render_entries(entries: &[CountryEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{} = {}", entry.code, entry.names.join("; ")))
        .collect::<Vec<_>>()
        .join("\n")
}
