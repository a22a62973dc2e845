//! Parser-specific types for country code resource processing.

use thiserror::Error;

/// Errors that can occur while reading a country code resource.
///
/// Malformed lines are not errors; the parser skips them.
#[derive(Error, Debug)]
pub enum Alpha2Error {
    /// The input could not be fully read.
    #[error("IO error reading country code resource: {0}")]
    Read(#[from] std::io::Error),

    /// Record splitting failed for a reason other than I/O.
    #[error("CSV parsing error: {0}")]
    Csv(csv::Error),

    /// Resource file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },
}

impl From<csv::Error> for Alpha2Error {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Self::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Read(io),
            kind => Self::Read(std::io::Error::other(format!("{kind:?}"))),
        }
    }
}

/// Result type for country code resource operations.
pub type Alpha2Result<T> = Result<T, Alpha2Error>;

/// What to do with names that are empty after trimming.
///
/// A trailing delimiter (`AT = Österreich;`) or a line holding only the
/// separator (`=`) produces empty names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyNamePolicy {
    /// Keep empty names in place.
    #[default]
    Preserve,
    /// Drop empty names. An entry may end up with no names.
    Filter,
}

/// Configuration for parsing a country code resource.
#[derive(Debug, Clone)]
pub struct Alpha2Config {
    /// Byte separating the code from the names. Only the first occurrence
    /// on a line splits. Must be ASCII.
    pub separator: u8,
    /// Character separating individual names.
    pub name_delimiter: char,
    /// Handling of empty names.
    pub empty_names: EmptyNamePolicy,
}

impl Default for Alpha2Config {
    fn default() -> Self {
        Self {
            separator: b'=',
            name_delimiter: ';',
            empty_names: EmptyNamePolicy::Preserve,
        }
    }
}

impl Alpha2Config {
    /// Creates a config that drops empty names.
    pub fn filter_empty_names() -> Self {
        Self {
            empty_names: EmptyNamePolicy::Filter,
            ..Default::default()
        }
    }
}

/// Statistics from parsing a country code resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-empty lines read.
    pub total_lines: usize,
    /// Lines that produced an entry.
    pub parsed_records: usize,
    /// Lines skipped for lacking a separator.
    pub skipped_lines: usize,
    /// Entries that replaced an earlier entry with the same code.
    pub overwritten_codes: usize,
    /// Time taken to parse in milliseconds.
    pub parse_time_ms: u64,
}

impl ParseStats {
    /// Returns the percentage of lines that were skipped.
    pub fn skip_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.skipped_lines as f64 / self.total_lines as f64) * 100.0
        }
    }
}
