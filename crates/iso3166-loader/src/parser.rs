//! Streaming parser for country code resource files.
//!
//! Each line has the shape `<code> = <name>[;<name>]*`. Lines without a
//! separator are skipped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use csv::{ByteRecord, Reader, ReaderBuilder};
use iso3166_types::{CountryEntry, CountryName};

use crate::types::{Alpha2Config, Alpha2Error, Alpha2Result, EmptyNamePolicy, ParseStats};

/// A streaming parser for country code resources.
///
/// Records are produced line by line. The parser never fails on a
/// malformed line; only read failures surface as errors.
pub struct Alpha2Parser<R: Read> {
    reader: Reader<R>,
    config: Alpha2Config,
    stats: ParseStats,
    started: Instant,
}

impl Alpha2Parser<BufReader<File>> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P, config: Alpha2Config) -> Alpha2Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Alpha2Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file), config))
    }
}

impl<R: Read> Alpha2Parser<R> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R, config: Alpha2Config) -> Self {
        // Unquoted and flexible: a line is split on every separator and the
        // tail fields are re-joined in `next`.
        let reader = ReaderBuilder::new()
            .delimiter(config.separator)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self {
            reader,
            config,
            stats: ParseStats::default(),
            started: Instant::now(),
        }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &Alpha2Config {
        &self.config
    }

    /// Returns statistics for the lines read so far.
    pub fn stats(&self) -> ParseStats {
        ParseStats {
            parse_time_ms: self.started.elapsed().as_millis() as u64,
            ..self.stats.clone()
        }
    }

    /// Parses all records into a Vec.
    ///
    /// Fails on the first read error; no partial result is returned.
    pub fn parse_all(self) -> Alpha2Result<Vec<CountryEntry>> {
        self.collect()
    }
}

impl<R: Read> Iterator for Alpha2Parser<R> {
    type Item = Alpha2Result<CountryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = ByteRecord::new();
        loop {
            match self.reader.read_byte_record(&mut record) {
                Ok(true) => {
                    self.stats.total_lines += 1;

                    if record.len() < 2 {
                        self.stats.skipped_lines += 1;
                        tracing::debug!(
                            line = ?record.position().map(|p| p.line()),
                            "skipping line without separator"
                        );
                        continue;
                    }

                    let code = String::from_utf8_lossy(&record[0]);
                    let rest = record
                        .iter()
                        .skip(1)
                        .collect::<Vec<_>>()
                        .join(&self.config.separator);
                    let names = String::from_utf8_lossy(&rest);

                    self.stats.parsed_records += 1;
                    return Some(Ok(build_entry(&code, &names, &self.config)));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Parses a single line.
///
/// Returns `None` if the line has no separator. The line must not contain
/// a line terminator.
pub fn parse_line(line: &str, config: &Alpha2Config) -> Option<CountryEntry> {
    let (code, names) = line.split_once(char::from(config.separator))?;
    Some(build_entry(code, names, config))
}

/// Builds an entry from the text left and right of the separator.
fn build_entry(code: &str, names: &str, config: &Alpha2Config) -> CountryEntry {
    let names = trim_blank(names)
        .split(config.name_delimiter)
        .map(trim_blank)
        .filter(|name| config.empty_names == EmptyNamePolicy::Preserve || !name.is_empty())
        .map(CountryName::from)
        .collect();

    CountryEntry {
        code: trim_blank(code).to_string(),
        names,
    }
}

/// Trims spaces and ASCII control characters (everything up to U+0020).
///
/// Other Unicode whitespace such as U+00A0 or U+3000 is kept.
fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}
