//! # iso3166-loader
//!
//! Parser and lookup index for ISO 3166-1 alpha-2 country name resources.
//!
//! A resource is a text file where each line maps a code to one or more
//! semicolon-separated names:
//!
//! ```text
//! AT = Österreich
//! MD = Moldawien; Republik Moldau
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use iso3166_loader::{CountryIndex, CountryLookup};
//!
//! let input = "DE = Deutschland\nMD = Moldawien; Republik Moldau\nAT = Österreich";
//! let index = CountryIndex::from_reader(input.as_bytes())?;
//!
//! assert_eq!(index.names_for_code("MD"), ["Moldawien", "Republik Moldau"]);
//! assert_eq!(index.code_for_name("Österreich"), Some("AT"));
//! assert!(index.names_for_code("XX").is_empty());
//! # Ok::<(), iso3166_loader::Alpha2Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): Enables [`CountryIndex::from_lines_parallel`] via rayon.

#![warn(missing_docs)]

mod index;
pub mod loader;
pub mod lookup;
pub mod parser;
pub mod types;

pub use index::CountryIndex;
pub use loader::{available_languages, find_resource, resource_file_name, DEFAULT_LANGUAGE};
pub use lookup::{
    code_for_name, country_code_to_names, country_name_to_code, names_for_code, CountryLookup,
};
pub use parser::{parse_line, Alpha2Parser};
pub use types::{Alpha2Config, Alpha2Error, Alpha2Result, EmptyNamePolicy, ParseStats};

// Re-export iso3166-types for convenience
pub use iso3166_types;
pub use iso3166_types::{CountryCode, CountryEntry, CountryName};
