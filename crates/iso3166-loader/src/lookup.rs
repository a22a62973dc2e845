//! Code-to-name and name-to-code queries.
//!
//! Queries never fail. An unknown code yields an empty slice and an unknown
//! name yields `None`.

use std::io::Read;

use iso3166_types::{CountryCode, CountryName};

use crate::index::CountryIndex;

/// Read-only queries over a country index.
pub trait CountryLookup {
    /// Returns the names listed for `code`, in source order.
    ///
    /// Returns an empty slice if the code is unknown. The match is exact:
    /// no trimming or case folding is applied to `code`.
    fn names_for_code(&self, code: &str) -> &[CountryName];

    /// Returns a code whose names include `name` exactly.
    ///
    /// Entries are scanned in unspecified order. When several codes list
    /// the same name, any one of them may be returned; use
    /// [`codes_for_name`](CountryLookup::codes_for_name) to see them all.
    fn code_for_name(&self, name: &str) -> Option<&str>;

    /// Returns every code whose names include `name`, sorted.
    fn codes_for_name(&self, name: &str) -> Vec<&str>;

    /// Returns the first listed name for `code`.
    fn primary_name(&self, code: &str) -> Option<&str> {
        self.names_for_code(code).first().map(String::as_str)
    }

    /// Returns true if `code` has an entry.
    fn contains_code(&self, code: &str) -> bool;
}

impl CountryLookup for CountryIndex {
    fn names_for_code(&self, code: &str) -> &[CountryName] {
        self.get(code).unwrap_or_default()
    }

    fn code_for_name(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(code, _)| code)
    }

    fn codes_for_name(&self, name: &str) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .iter()
            .filter(|(_, names)| names.iter().any(|n| n == name))
            .map(|(code, _)| code)
            .collect();
        codes.sort_unstable();
        codes
    }

    fn contains_code(&self, code: &str) -> bool {
        self.get(code).is_some()
    }
}

/// Returns the names listed for `code` in `index`.
pub fn names_for_code<'a>(index: &'a CountryIndex, code: &str) -> &'a [CountryName] {
    index.names_for_code(code)
}

/// Returns a code in `index` whose names include `name`.
pub fn code_for_name<'a>(index: &'a CountryIndex, name: &str) -> Option<&'a str> {
    index.code_for_name(name)
}

/// Parses `reader` and returns the names listed for `code`.
///
/// The resource is parsed on every call. A resource that cannot be read
/// behaves like an empty one.
pub fn country_code_to_names<R: Read>(reader: R, code: &str) -> Vec<CountryName> {
    CountryIndex::from_reader_or_empty(reader)
        .names_for_code(code)
        .to_vec()
}

/// Parses `reader` and returns a code whose names include `name`.
///
/// The resource is parsed on every call. A resource that cannot be read
/// behaves like an empty one.
pub fn country_name_to_code<R: Read>(reader: R, name: &str) -> Option<CountryCode> {
    CountryIndex::from_reader_or_empty(reader)
        .code_for_name(name)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    const SAMPLE: &str = "DE = Deutschland\nMD = Moldawien; Republik Moldau\nAT = Österreich";

    fn sample_index() -> CountryIndex {
        CountryIndex::from_reader(Cursor::new(SAMPLE)).unwrap()
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::TimedOut, "timed out"))
        }
    }

    #[test]
    fn test_names_for_code() {
        let index = sample_index();
        assert_eq!(index.names_for_code("DE"), ["Deutschland"]);
        assert_eq!(index.names_for_code("MD"), ["Moldawien", "Republik Moldau"]);
    }

    #[test]
    fn test_names_for_unknown_code_is_empty() {
        let index = sample_index();
        assert!(index.names_for_code("XX").is_empty());
        assert!(index.names_for_code(" DE").is_empty());
        assert!(index.names_for_code("de").is_empty());
    }

    #[test]
    fn test_code_for_name() {
        let index = sample_index();
        assert_eq!(index.code_for_name("Österreich"), Some("AT"));
        assert_eq!(index.code_for_name("Republik Moldau"), Some("MD"));
        assert_eq!(index.code_for_name("Austria"), None);
        assert_eq!(index.code_for_name("österreich"), None);
    }

    #[test]
    fn test_every_name_maps_back_to_a_listing_code() {
        let index = CountryIndex::from_reader(Cursor::new(
            "DE = Deutschland\nMD = Moldawien; Republik Moldau\nXK = Kosovo\nKS = Kosovo; Kosova",
        ))
        .unwrap();

        for (code, names) in index.iter() {
            for name in names {
                let found = index.code_for_name(name).unwrap();
                assert!(index.names_for_code(found).contains(name), "{code}: {name}");
            }
        }
    }

    #[test]
    fn test_ambiguous_name_lists_all_codes() {
        let index = CountryIndex::from_reader(Cursor::new("XK = Kosovo\nKS = Kosova; Kosovo")).unwrap();

        let code = index.code_for_name("Kosovo").unwrap();
        assert!(code == "XK" || code == "KS");
        assert_eq!(index.codes_for_name("Kosovo"), vec!["KS", "XK"]);
        assert_eq!(index.codes_for_name("Kosova"), vec!["KS"]);
        assert!(index.codes_for_name("Serbien").is_empty());
    }

    #[test]
    fn test_empty_index_finds_nothing() {
        let index = CountryIndex::from_reader(Cursor::new("")).unwrap();
        assert!(index.names_for_code("DE").is_empty());
        assert!(index.names_for_code("").is_empty());
        assert_eq!(index.code_for_name("Deutschland"), None);
        assert_eq!(index.code_for_name(""), None);
    }

    #[test]
    fn test_empty_code_and_name() {
        let index = CountryIndex::from_reader(Cursor::new("=\nAT=Österreich;")).unwrap();
        assert_eq!(index.names_for_code(""), [""]);
        assert_eq!(index.codes_for_name(""), vec!["", "AT"]);
    }

    #[test]
    fn test_primary_name_and_contains_code() {
        let index = sample_index();
        assert_eq!(index.primary_name("MD"), Some("Moldawien"));
        assert_eq!(index.primary_name("XX"), None);
        assert!(index.contains_code("AT"));
        assert!(!index.contains_code("XX"));
    }

    #[test]
    fn test_free_functions() {
        let index = sample_index();
        assert_eq!(names_for_code(&index, "DE"), ["Deutschland"]);
        assert_eq!(code_for_name(&index, "Österreich"), Some("AT"));
    }

    #[test]
    fn test_one_shot_helpers() {
        assert_eq!(
            country_code_to_names(Cursor::new(SAMPLE), "MD"),
            vec!["Moldawien", "Republik Moldau"]
        );
        assert_eq!(
            country_name_to_code(Cursor::new(SAMPLE), "Österreich"),
            Some("AT".to_string())
        );
    }

    #[test]
    fn test_one_shot_helpers_on_read_failure() {
        assert!(country_code_to_names(BrokenReader, "DE").is_empty());
        assert_eq!(country_name_to_code(BrokenReader, "Deutschland"), None);
    }

    #[test]
    fn test_bundled_german_resource() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/iso_3166_alpha2_german.properties");
        let index = CountryIndex::from_path(path).unwrap();

        assert_eq!(index.names_for_code("DE"), ["Deutschland"]);
        assert_eq!(index.names_for_code("MD"), ["Moldawien", "Republik Moldau"]);
        assert_eq!(index.code_for_name("Österreich"), Some("AT"));
        assert_eq!(index.primary_name("GB"), Some("Vereinigtes Königreich"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_bundled_resource_parallel() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/iso_3166_alpha2_german.properties");
        let parallel = CountryIndex::from_path_parallel(path, &crate::Alpha2Config::default()).unwrap();
        assert_eq!(parallel, CountryIndex::from_path(path).unwrap());
    }

    #[test]
    fn test_shared_across_threads() {
        let index = std::sync::Arc::new(sample_index());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let index = std::sync::Arc::clone(&index);
                std::thread::spawn(move || index.code_for_name("Deutschland").map(str::to_string))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("DE".to_string()));
        }
    }
}
