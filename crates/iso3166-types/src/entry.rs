//! Country entry type.
//!
//! This module provides the `CountryEntry` struct representing one record
//! of a country code resource file.

use crate::{CountryCode, CountryName};

/// A country code together with its localized names.
///
/// Represents a line such as `MD = Moldawien; Republik Moldau`. The order
/// of `names` follows the source line; the first name is the primary one.
///
/// # Examples
///
/// ```
/// use iso3166_types::CountryEntry;
///
/// let entry = CountryEntry::new("MD", ["Moldawien", "Republik Moldau"]);
///
/// assert_eq!(entry.primary_name(), Some("Moldawien"));
/// assert!(entry.has_name("Republik Moldau"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryEntry {
    /// The trimmed country code.
    pub code: CountryCode,
    /// The trimmed names, in source order.
    pub names: Vec<CountryName>,
}

impl CountryEntry {
    /// Creates an entry from a code and a list of names.
    pub fn new<C, I, N>(code: C, names: I) -> Self
    where
        C: Into<CountryCode>,
        I: IntoIterator<Item = N>,
        N: Into<CountryName>,
    {
        Self {
            code: code.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the first listed name.
    ///
    /// Returns `None` only when the entry has no names at all, which a
    /// parsed line never produces.
    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// Returns true if `name` is one of this entry's names (exact match).
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
