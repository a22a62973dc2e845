//! # iso3166-types
//!
//! Type definitions for ISO 3166-1 alpha-2 country codes and their
//! localized names.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use iso3166_types::{CountryCode, CountryEntry};
//!
//! let entry = CountryEntry::new("AT", ["Österreich"]);
//! let code: &CountryCode = &entry.code;
//!
//! assert_eq!(code, "AT");
//! assert_eq!(entry.primary_name(), Some("Österreich"));
//! ```

#![warn(missing_docs)]

mod code;
mod entry;

pub use code::{CountryCode, CountryName};
pub use entry::CountryEntry;
