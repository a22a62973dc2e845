//! In-memory country code index.
//!
//! Maps each country code to its ordered list of names. An index is built
//! in one pass from a resource and is immutable afterwards, so it can be
//! shared across threads for read-only lookups.
//!
//! ```ignore
//! let index = CountryIndex::from_path("data/iso_3166_alpha2_german.properties")?;
//! assert_eq!(index.names_for_code("AT"), ["Österreich"]);
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use iso3166_types::{CountryCode, CountryEntry, CountryName};

use crate::parser::Alpha2Parser;
#[cfg(feature = "parallel")]
use crate::parser::parse_line;
use crate::types::{Alpha2Config, Alpha2Result, ParseStats};

/// Country codes mapped to their localized names.
///
/// Later entries for a code replace earlier ones. Two indices are equal
/// when they hold the same codes with the same name lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryIndex {
    names_by_code: HashMap<CountryCode, Vec<CountryName>>,
}

impl CountryIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a resource with the default configuration.
    ///
    /// # Errors
    /// Returns [`Alpha2Error::Read`](crate::Alpha2Error::Read) if the input cannot be fully read.
    /// Nothing of the partially read input is kept.
    pub fn from_reader<R: Read>(reader: R) -> Alpha2Result<Self> {
        Self::from_reader_with_config(reader, Alpha2Config::default())
    }

    /// Parses a resource with the given configuration.
    pub fn from_reader_with_config<R: Read>(reader: R, config: Alpha2Config) -> Alpha2Result<Self> {
        Self::from_parser(Alpha2Parser::from_reader(reader, config)).map(|(index, _)| index)
    }

    /// Parses a resource, returning an empty index if it cannot be read.
    ///
    /// The read error is logged, not returned.
    pub fn from_reader_or_empty<R: Read>(reader: R) -> Self {
        Self::from_reader(reader).unwrap_or_else(|e| {
            tracing::warn!("Could not read country code resource: {}", e);
            Self::new()
        })
    }

    /// Parses a resource file with the default configuration.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Alpha2Result<Self> {
        Self::from_path_with_config(path, Alpha2Config::default())
    }

    /// Parses a resource file with the given configuration.
    pub fn from_path_with_config<P: AsRef<Path>>(
        path: P,
        config: Alpha2Config,
    ) -> Alpha2Result<Self> {
        Self::from_parser(Alpha2Parser::from_path(path, config)?).map(|(index, _)| index)
    }

    /// Parses a resource file, returning an empty index if it is missing
    /// or cannot be read.
    pub fn from_path_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::from_path(path).unwrap_or_else(|e| {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            Self::new()
        })
    }

    /// Drains a parser into a new index.
    ///
    /// Returns the index together with the parse statistics. On a read
    /// error the partially built index is dropped.
    pub fn from_parser<R: Read>(mut parser: Alpha2Parser<R>) -> Alpha2Result<(Self, ParseStats)> {
        let mut index = Self::new();
        let mut overwritten = 0;

        for entry in parser.by_ref() {
            if index.insert_entry(entry?).is_some() {
                overwritten += 1;
            }
        }

        let stats = ParseStats {
            overwritten_codes: overwritten,
            ..parser.stats()
        };

        tracing::debug!(
            codes = index.len(),
            skipped = stats.skipped_lines,
            overwritten = stats.overwritten_codes,
            "Parsed country code resource in {} ms",
            stats.parse_time_ms
        );

        Ok((index, stats))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // PARALLEL LOADING (requires "parallel" feature)
    // ═══════════════════════════════════════════════════════════════════════════

    /// Builds an index from pre-read lines, parsing them in parallel.
    ///
    /// Entries are inserted in line order afterwards, so a later line for
    /// the same code still wins.
    #[cfg(feature = "parallel")]
    pub fn from_lines_parallel<S>(lines: &[S], config: &Alpha2Config) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let entries: Vec<CountryEntry> = lines
            .par_iter()
            .filter_map(|line| parse_line(line.as_ref(), config))
            .collect();

        let mut index = Self::new();
        index.extend(entries);
        index
    }

    /// Reads a resource file fully, then parses its lines in parallel.
    #[cfg(feature = "parallel")]
    pub fn from_path_parallel<P: AsRef<Path>>(path: P, config: &Alpha2Config) -> Alpha2Result<Self> {
        let lines = read_lines(path)?;
        Ok(Self::from_lines_parallel(&lines, config))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // MUTATION & ACCESS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Inserts names for a code, returning the names it replaced.
    pub fn insert(
        &mut self,
        code: impl Into<CountryCode>,
        names: Vec<CountryName>,
    ) -> Option<Vec<CountryName>> {
        self.names_by_code.insert(code.into(), names)
    }

    /// Inserts a parsed entry, returning the names it replaced.
    pub fn insert_entry(&mut self, entry: CountryEntry) -> Option<Vec<CountryName>> {
        self.names_by_code.insert(entry.code, entry.names)
    }

    /// Returns the names stored for `code`, if any.
    pub fn get(&self, code: &str) -> Option<&[CountryName]> {
        self.names_by_code.get(code).map(Vec::as_slice)
    }

    /// Returns the number of codes.
    pub fn len(&self) -> usize {
        self.names_by_code.len()
    }

    /// Returns true if the index holds no codes.
    pub fn is_empty(&self) -> bool {
        self.names_by_code.is_empty()
    }

    /// Returns the total number of names across all codes.
    pub fn name_count(&self) -> usize {
        self.names_by_code.values().map(Vec::len).sum()
    }

    /// Iterates over all codes in unspecified order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.names_by_code.keys().map(String::as_str)
    }

    /// Iterates over all codes and their names in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CountryName])> {
        self.names_by_code
            .iter()
            .map(|(code, names)| (code.as_str(), names.as_slice()))
    }

    /// Returns all entries sorted by code.
    pub fn entries(&self) -> Vec<CountryEntry> {
        let mut entries: Vec<CountryEntry> = self
            .names_by_code
            .iter()
            .map(|(code, names)| CountryEntry {
                code: code.clone(),
                names: names.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.code.cmp(&b.code));
        entries
    }
}

impl Extend<CountryEntry> for CountryIndex {
    fn extend<I: IntoIterator<Item = CountryEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert_entry(entry);
        }
    }
}

impl FromIterator<CountryEntry> for CountryIndex {
    fn from_iter<I: IntoIterator<Item = CountryEntry>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

/// Reads a file and splits it into lines.
///
/// Accepts `\n`, `\r\n` and `\r` terminators; invalid UTF-8 is replaced.
/// A leading UTF-8 BOM is dropped, as the csv reader does on the streaming path.
#[cfg(feature = "parallel")]
fn read_lines<P: AsRef<Path>>(path: P) -> Alpha2Result<Vec<String>> {
    use crate::types::Alpha2Error;
    use std::fs::File;

    let path = path.as_ref();
    if !path.exists() {
        return Err(Alpha2Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;

    let text = String::from_utf8_lossy(&bytes);
    Ok(text
        .strip_prefix('\u{feff}')
        .unwrap_or(&*text)
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
